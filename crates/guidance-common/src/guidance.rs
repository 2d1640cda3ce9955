use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of passage returned by the guidance backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GuidanceType {
    Quran,
    Hadith,
    Dua,
}

impl GuidanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quran => "Quran",
            Self::Hadith => "Hadith",
            Self::Dua => "Dua",
        }
    }
}

impl fmt::Display for GuidanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuidanceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quran" => Ok(Self::Quran),
            "hadith" => Ok(Self::Hadith),
            "dua" => Ok(Self::Dua),
            other => Err(format!(
                "unknown guidance type '{other}' (expected Quran, Hadith or Dua)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuidanceResult {
    #[serde(rename = "type")]
    pub kind: GuidanceType,
    pub arabic_text: String,
    pub translation: String,
    pub citation: String,
    /// Backend relevance in [0, 1].
    pub similarity_score: f32,
}

impl GuidanceResult {
    /// Whole-number match percentage shown next to a result.
    pub fn match_percentage(&self) -> u8 {
        (self.similarity_score.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuidanceResponse {
    pub results: Vec<GuidanceResult>,
    pub query: String,
    pub total_results: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceRequest {
    pub emotion_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_store: Option<String>,
}

/// Client-side category predicate applied to a guidance response.
///
/// The backend always returns every kind of passage; which kinds a caller
/// wants to see is decided here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    excluded: Vec<GuidanceType>,
}

impl CategoryFilter {
    /// Keeps everything.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn excluding(kinds: impl IntoIterator<Item = GuidanceType>) -> Self {
        let mut excluded = Vec::new();
        for kind in kinds {
            if !excluded.contains(&kind) {
                excluded.push(kind);
            }
        }
        Self { excluded }
    }

    pub fn excluding_quran() -> Self {
        Self::excluding([GuidanceType::Quran])
    }

    /// Parses a comma separated list such as `"Quran,Dua"`. Blank input keeps
    /// everything.
    pub fn parse_list(list: &str) -> Result<Self, String> {
        let kinds = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(GuidanceType::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::excluding(kinds))
    }

    pub fn excluded(&self) -> &[GuidanceType] {
        &self.excluded
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn allows(&self, kind: GuidanceType) -> bool {
        !self.excluded.contains(&kind)
    }

    /// Drops excluded results in place, keeping the relative order of the rest.
    /// `total_results` is always recomputed from what remains.
    pub fn apply(&self, mut response: GuidanceResponse) -> GuidanceResponse {
        if !self.is_empty() {
            response.results.retain(|r| self.allows(r.kind));
        }
        response.total_results = response.results.len();
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: GuidanceType, citation: &str, score: f32) -> GuidanceResult {
        GuidanceResult {
            kind,
            arabic_text: String::new(),
            translation: String::new(),
            citation: citation.to_string(),
            similarity_score: score,
        }
    }

    fn response(results: Vec<GuidanceResult>, total_results: usize) -> GuidanceResponse {
        GuidanceResponse {
            results,
            query: "anxious".to_string(),
            total_results,
        }
    }

    #[test]
    fn excluding_quran_keeps_order_and_recounts() {
        let raw = response(
            vec![
                result(GuidanceType::Quran, "Quran 2:153", 0.91),
                result(GuidanceType::Hadith, "Bukhari 5641", 0.88),
                result(GuidanceType::Quran, "Quran 94:5", 0.85),
                result(GuidanceType::Dua, "Abu Dawud 1555", 0.80),
            ],
            4,
        );

        let filtered = CategoryFilter::excluding_quran().apply(raw);
        let citations: Vec<&str> = filtered.results.iter().map(|r| r.citation.as_str()).collect();
        assert_eq!(citations, ["Bukhari 5641", "Abu Dawud 1555"]);
        assert_eq!(filtered.total_results, 2);
        assert!(filtered.results.iter().all(|r| r.kind != GuidanceType::Quran));
    }

    #[test]
    fn server_count_is_never_trusted() {
        let raw = response(vec![result(GuidanceType::Dua, "Tirmidhi 3524", 0.7)], 10);
        let filtered = CategoryFilter::none().apply(raw);
        assert_eq!(filtered.total_results, 1);
    }

    #[test]
    fn parse_list_accepts_mixed_case_and_blanks() {
        let filter = CategoryFilter::parse_list(" quran , DUA ,").unwrap();
        assert_eq!(filter.excluded(), [GuidanceType::Quran, GuidanceType::Dua]);
        assert!(CategoryFilter::parse_list("").unwrap().is_empty());
        assert!(CategoryFilter::parse_list("Tafsir").is_err());
    }

    #[test]
    fn excluding_deduplicates() {
        let filter = CategoryFilter::excluding([GuidanceType::Quran, GuidanceType::Quran]);
        assert_eq!(filter.excluded(), [GuidanceType::Quran]);
    }

    #[test]
    fn wire_format_uses_type_field() {
        let json = r#"{
            "results": [
                {"type": "Hadith", "arabic_text": "a", "translation": "b", "citation": "c", "similarity_score": 0.42},
                {"type": "Quran", "arabic_text": "d", "translation": "e", "citation": "f", "similarity_score": 1.0}
            ],
            "query": "sad",
            "total_results": 2
        }"#;
        let parsed: GuidanceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results[0].kind, GuidanceType::Hadith);
        assert_eq!(parsed.results[1].kind, GuidanceType::Quran);

        let reencoded = serde_json::to_value(&parsed).unwrap();
        assert_eq!(reencoded["results"][0]["type"], "Hadith");

        let reread: GuidanceResponse = serde_json::from_value(reencoded).unwrap();
        assert_eq!(reread, parsed);
        assert!(reread
            .results
            .iter()
            .all(|r| (0.0..=1.0).contains(&r.similarity_score)));
    }

    #[test]
    fn match_percentage_rounds() {
        assert_eq!(result(GuidanceType::Dua, "", 0.876).match_percentage(), 88);
        assert_eq!(result(GuidanceType::Dua, "", 0.0).match_percentage(), 0);
        assert_eq!(result(GuidanceType::Dua, "", 1.0).match_percentage(), 100);
    }

    #[test]
    fn health_tolerates_status_only() {
        let health: HealthResponse = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert_eq!(health.status, "healthy");
        assert!(health.version.is_none());
    }
}
