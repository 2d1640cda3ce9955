use chrono::{Datelike, NaiveDate};

use crate::model::DailyVerse;

pub static DAILY_VERSES: [DailyVerse; 2] = [
    DailyVerse {
        surah_number: 1,
        ayah_number: 1,
        arabic_text: "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
        translation: "In the name of Allah, the Entirely Merciful, the Especially Merciful.",
        surah_name: "Al-Fatihah (The Opening)",
        tafsir: "This verse, known as the Bismillah, is the opening of the Quran. It emphasizes Allah's mercy and compassion.",
    },
    DailyVerse {
        surah_number: 2,
        ayah_number: 153,
        arabic_text: "يَا أَيُّهَا الَّذِينَ آمَنُوا اسْتَعِينُوا بِالصَّبْرِ وَالصَّلَاةِ",
        translation: "O you who have believed, seek help through patience and prayer.",
        surah_name: "Al-Baqarah (The Cow)",
        tafsir: "This verse teaches believers two essential tools: patience (Sabr) and prayer (Salah).",
    },
];

/// 1-based day of the year, counted from the last day of the previous year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    match NaiveDate::from_ymd_opt(date.year() - 1, 12, 31) {
        Some(reference) => (date - reference).num_days() as u32,
        None => date.ordinal(),
    }
}

/// Picks `pool[day_of_year % len]`. `None` only when the pool is empty.
pub fn select_daily_entry<T>(date: NaiveDate, pool: &[T]) -> Option<&T> {
    if pool.is_empty() {
        return None;
    }
    let idx = day_of_year(date) as usize % pool.len();
    pool.get(idx)
}
