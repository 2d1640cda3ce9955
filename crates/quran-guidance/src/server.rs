/// MCP server for emotion-driven guidance and the Quran reader.
///
/// Tools:
/// - `get_guidance`: query the guidance backend, filtered by passage type
/// - `guidance_state` / `reset_guidance`: the latest-wins guidance session
/// - `search_surahs`, `get_surah`: local chapter search and lookup
/// - `daily_verse`: the verse of the day
/// - `check_health`: backend health probe
use std::sync::Arc;

use chrono::NaiveDate;
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use guidance_common::client::GuidanceClient;
use guidance_common::guidance::{CategoryFilter, GuidanceResponse, GuidanceType, HealthResponse};

use crate::config::Config;
use crate::corpus::ChapterSource;
use crate::daily::{day_of_year, select_daily_entry, DAILY_VERSES};
use crate::error::AppError;
use crate::model::{ChapterRecord, DailyVerse, VerseRecord};
use crate::session::{FetchOutcome, GuidanceSession, SessionState};

#[derive(Debug, Deserialize, JsonSchema)]
struct GetGuidanceParams {
    /// How the user feels, in their own words.
    query: String,
    /// Passage types to drop. Omit to use the server default (Quran).
    exclude_types: Option<Vec<GuidanceType>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchSurahsParams {
    /// English name, Arabic name, meaning, or exact surah number.
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetSurahParams {
    number: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DailyVerseParams {
    /// Calendar date as YYYY-MM-DD. Defaults to today in local time.
    date: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct VerseInfo {
    ayah_number: u32,
    arabic_text: String,
    translation: String,
    tafsir: String,
}

#[derive(Debug, Serialize, JsonSchema)]
struct SurahSummary {
    number: u32,
    name: String,
    english_name: String,
    meaning: String,
    verses_count: u32,
    revelation_place: String,
}

#[derive(Debug, Serialize, JsonSchema)]
struct SurahDetailResponse {
    #[serde(flatten)]
    summary: SurahSummary,
    overview: String,
    verses: Vec<VerseInfo>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct SurahSearchResponse {
    query: String,
    /// First match, shown in full.
    selected: Option<SurahDetailResponse>,
    matches: Vec<SurahSummary>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct DailyVerseResponse {
    date: String,
    day_of_year: u32,
    surah_number: u32,
    ayah_number: u32,
    surah_name: String,
    arabic_text: String,
    translation: String,
    tafsir: String,
}

#[derive(Clone)]
pub struct QuranGuidanceServer {
    client: Arc<GuidanceClient>,
    session: Arc<GuidanceSession>,
    corpus: Arc<dyn ChapterSource>,
    config: Config,
    tool_router: ToolRouter<QuranGuidanceServer>,
}

impl QuranGuidanceServer {
    pub fn new(client: Arc<GuidanceClient>, corpus: Arc<dyn ChapterSource>, config: Config) -> Self {
        let session = Arc::new(GuidanceSession::new(Arc::clone(&client)));
        Self {
            client,
            session,
            corpus,
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// A server for one more connection: same backend client and corpus,
    /// its own guidance session.
    pub fn for_connection(&self) -> Self {
        Self {
            session: Arc::new(GuidanceSession::new(Arc::clone(&self.client))),
            ..self.clone()
        }
    }

    fn filter_for(&self, exclude_types: Option<Vec<GuidanceType>>) -> CategoryFilter {
        match exclude_types {
            Some(kinds) => CategoryFilter::excluding(kinds),
            None => self.config.guidance_filter.clone(),
        }
    }
}

#[tool_router]
impl QuranGuidanceServer {
    #[tool(description = "Find Hadith, Dua and Quran passages that speak to an emotional state. Quran passages are excluded by default; pass exclude_types to change that.")]
    async fn get_guidance(
        &self,
        Parameters(params): Parameters<GetGuidanceParams>,
    ) -> Result<Json<GuidanceResponse>, String> {
        let filter = self.filter_for(params.exclude_types);
        match self.session.fetch(&params.query, &filter).await {
            FetchOutcome::Completed(result) => result.map(Json),
            FetchOutcome::Superseded => {
                Err("guidance request superseded by a newer request".to_string())
            }
        }
    }

    #[tool(description = "Show the current guidance session: last results, loading flag and last error.")]
    async fn guidance_state(&self) -> Result<Json<SessionState>, String> {
        Ok(Json(self.session.snapshot().await))
    }

    #[tool(description = "Clear the guidance session. Responses still in flight are discarded.")]
    async fn reset_guidance(&self) -> Result<Json<SessionState>, String> {
        info!("reset_guidance tool invoked");
        Ok(Json(self.session.reset().await))
    }

    #[tool(description = "Search the available surahs (Al-Fatihah 1, Al-Ikhlas 112, Al-Falaq 113) by English name, Arabic name, meaning, or exact number. The first match is returned in full.")]
    async fn search_surahs(
        &self,
        Parameters(params): Parameters<SearchSurahsParams>,
    ) -> Result<Json<SurahSearchResponse>, String> {
        let found = self
            .corpus
            .search_by_text(&params.query, self.config.empty_query_policy);
        info!(query = %params.query, matches = found.len(), "surah search");

        Ok(Json(SurahSearchResponse {
            selected: found.first().map(|c| to_surah_detail(c)),
            matches: found.iter().map(|c| to_surah_summary(c)).collect(),
            query: params.query,
        }))
    }

    #[tool(description = "Get a surah with every verse, translation and tafsir by its number.")]
    async fn get_surah(
        &self,
        Parameters(params): Parameters<GetSurahParams>,
    ) -> Result<Json<SurahDetailResponse>, String> {
        let chapter = self
            .corpus
            .lookup_by_number(params.number)
            .ok_or_else(|| AppError::NotFound(params.number.to_string()).to_string())?;
        Ok(Json(to_surah_detail(chapter)))
    }

    #[tool(description = "Get the verse of the day with its tafsir. The verse rotates with the day of the year.")]
    async fn daily_verse(
        &self,
        Parameters(params): Parameters<DailyVerseParams>,
    ) -> Result<Json<DailyVerseResponse>, String> {
        let date = match params.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_date(raw).map_err(|e| e.to_string())?,
            _ => chrono::Local::now().date_naive(),
        };
        let verse = select_daily_entry(date, &DAILY_VERSES)
            .ok_or_else(|| "no daily verses configured".to_string())?;
        Ok(Json(to_daily_verse(date, verse)))
    }

    #[tool(description = "Check the guidance backend's health endpoint.")]
    async fn check_health(&self) -> Result<Json<HealthResponse>, String> {
        self.client
            .check_health()
            .await
            .map(Json)
            .map_err(|e| e.user_message())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(raw.to_string()))
}

fn to_surah_summary(chapter: &ChapterRecord) -> SurahSummary {
    SurahSummary {
        number: chapter.number,
        name: chapter.name.to_string(),
        english_name: chapter.english_name.to_string(),
        meaning: chapter.meaning.to_string(),
        verses_count: chapter.verses_count,
        revelation_place: chapter.revelation_place.to_string(),
    }
}

fn to_surah_detail(chapter: &ChapterRecord) -> SurahDetailResponse {
    SurahDetailResponse {
        summary: to_surah_summary(chapter),
        overview: chapter.overview.to_string(),
        verses: chapter.verses.iter().map(to_verse_info).collect(),
    }
}

fn to_verse_info(verse: &VerseRecord) -> VerseInfo {
    VerseInfo {
        ayah_number: verse.ayah_number,
        arabic_text: verse.arabic_text.to_string(),
        translation: verse.translation.to_string(),
        tafsir: verse.tafsir.to_string(),
    }
}

fn to_daily_verse(date: NaiveDate, verse: &DailyVerse) -> DailyVerseResponse {
    DailyVerseResponse {
        date: date.format("%Y-%m-%d").to_string(),
        day_of_year: day_of_year(date),
        surah_number: verse.surah_number,
        ayah_number: verse.ayah_number,
        surah_name: verse.surah_name.to_string(),
        arabic_text: verse.arabic_text.to_string(),
        translation: verse.translation.to_string(),
        tafsir: verse.tafsir.to_string(),
    }
}

#[tool_handler]
impl ServerHandler for QuranGuidanceServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "quran-guidance".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Islamic guidance MCP server. Use get_guidance with a description of how the user \
feels to retrieve Hadith and Dua passages from the guidance backend. Use search_surahs or \
get_surah to read a surah with tafsir, and daily_verse for the verse of the day."
                    .to_string(),
            ),
        }
    }
}
