use serde::Serialize;

/// A chapter (surah) of the compiled-in corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRecord {
    pub number: u32,
    /// Arabic-script name.
    pub name: &'static str,
    pub english_name: &'static str,
    pub meaning: &'static str,
    pub verses_count: u32,
    pub revelation_place: &'static str,
    pub overview: &'static str,
    pub verses: &'static [VerseRecord],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRecord {
    pub ayah_number: u32,
    pub arabic_text: &'static str,
    pub translation: &'static str,
    pub tafsir: &'static str,
}

/// Entry of the daily-verse rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyVerse {
    pub surah_number: u32,
    pub ayah_number: u32,
    pub arabic_text: &'static str,
    pub translation: &'static str,
    pub surah_name: &'static str,
    pub tafsir: &'static str,
}
