/// Substring search over chapter records.
///
/// A chapter matches when any of these holds:
/// - `english_name` contains the query, ignoring case
/// - the Arabic `name` contains the query exactly
/// - the chapter number, as a string, equals the query
/// - `meaning` contains the query, ignoring case
///
/// Matches keep corpus order. There is no ranking, tokenization or
/// diacritic folding.
use std::str::FromStr;

use crate::model::ChapterRecord;

/// What an empty query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyQueryPolicy {
    /// Substring semantics: `""` is contained in every field.
    #[default]
    MatchAll,
    MatchNone,
}

impl FromStr for EmptyQueryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "match_all" => Ok(Self::MatchAll),
            "none" | "match_none" => Ok(Self::MatchNone),
            other => Err(format!("unknown empty query policy '{other}' (expected all or none)")),
        }
    }
}

pub fn matches(chapter: &ChapterRecord, query: &str) -> bool {
    let lower_query = query.to_lowercase();
    chapter.english_name.to_lowercase().contains(&lower_query)
        || chapter.name.contains(query)
        || chapter.number.to_string() == query
        || chapter.meaning.to_lowercase().contains(&lower_query)
}

pub fn search_chapters<'a>(
    query: &str,
    corpus: &'a [ChapterRecord],
    policy: EmptyQueryPolicy,
) -> Vec<&'a ChapterRecord> {
    if query.is_empty() && policy == EmptyQueryPolicy::MatchNone {
        return Vec::new();
    }
    corpus.iter().filter(|c| matches(c, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surahs::SURAHS;

    fn numbers(found: &[&ChapterRecord]) -> Vec<u32> {
        found.iter().map(|c| c.number).collect()
    }

    #[test]
    fn number_matches_exactly() {
        let found = search_chapters("1", &SURAHS, EmptyQueryPolicy::MatchAll);
        assert_eq!(numbers(&found), [1]);
        assert_eq!(found[0].english_name, "Al-Fatihah");

        assert_eq!(numbers(&search_chapters("112", &SURAHS, EmptyQueryPolicy::MatchAll)), [112]);
        assert!(search_chapters("11", &SURAHS, EmptyQueryPolicy::MatchAll).is_empty());
    }

    #[test]
    fn english_name_ignores_case() {
        let found = search_chapters("ikhlas", &SURAHS, EmptyQueryPolicy::MatchAll);
        assert_eq!(numbers(&found), [112]);
        assert_eq!(
            numbers(&search_chapters("AL-FATIHAH", &SURAHS, EmptyQueryPolicy::MatchAll)),
            [1]
        );
    }

    #[test]
    fn falaq_returns_chapter_with_ordered_verses() {
        let found = search_chapters("falaq", &SURAHS, EmptyQueryPolicy::MatchAll);
        assert_eq!(found.len(), 1);
        let falaq = found[0];
        assert_eq!(falaq.number, 113);
        assert_eq!(falaq.verses.len(), 5);
        let ayahs: Vec<u32> = falaq.verses.iter().map(|v| v.ayah_number).collect();
        assert_eq!(ayahs, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn meaning_ignores_case() {
        assert_eq!(numbers(&search_chapters("daybreak", &SURAHS, EmptyQueryPolicy::MatchAll)), [113]);
        assert_eq!(numbers(&search_chapters("SINCERITY", &SURAHS, EmptyQueryPolicy::MatchAll)), [112]);
    }

    #[test]
    fn arabic_name_is_exact_substring() {
        assert_eq!(numbers(&search_chapters("الفلق", &SURAHS, EmptyQueryPolicy::MatchAll)), [113]);
        assert_eq!(numbers(&search_chapters("الإخلاص", &SURAHS, EmptyQueryPolicy::MatchAll)), [112]);
        // No hamza folding: bare alif does not match the hamzated form.
        assert!(search_chapters("الاخلاص", &SURAHS, EmptyQueryPolicy::MatchAll).is_empty());
    }

    #[test]
    fn shared_substring_keeps_corpus_order() {
        let found = search_chapters("al-", &SURAHS, EmptyQueryPolicy::MatchAll);
        assert_eq!(numbers(&found), [1, 112, 113]);
    }

    #[test]
    fn empty_query_follows_policy() {
        assert_eq!(search_chapters("", &SURAHS, EmptyQueryPolicy::MatchAll).len(), SURAHS.len());
        assert!(search_chapters("", &SURAHS, EmptyQueryPolicy::MatchNone).is_empty());
    }

    #[test]
    fn no_fuzzy_matching() {
        assert!(search_chapters("fatiha h", &SURAHS, EmptyQueryPolicy::MatchAll).is_empty());
        assert!(search_chapters("falak", &SURAHS, EmptyQueryPolicy::MatchAll).is_empty());
    }

    #[test]
    fn policy_parses() {
        assert_eq!("all".parse::<EmptyQueryPolicy>().unwrap(), EmptyQueryPolicy::MatchAll);
        assert_eq!(" NONE ".parse::<EmptyQueryPolicy>().unwrap(), EmptyQueryPolicy::MatchNone);
        assert!("some".parse::<EmptyQueryPolicy>().is_err());
    }
}
