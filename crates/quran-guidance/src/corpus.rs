use crate::model::ChapterRecord;
use crate::search::{search_chapters, EmptyQueryPolicy};
use crate::surahs::SURAHS;

/// Read-only source of chapter records.
///
/// The search rules live in [`crate::search`]; a source only has to hand out
/// its records in a stable order.
pub trait ChapterSource: Send + Sync {
    fn chapters(&self) -> &[ChapterRecord];

    fn lookup_by_number(&self, number: u32) -> Option<&ChapterRecord> {
        self.chapters().iter().find(|c| c.number == number)
    }

    fn search_by_text(&self, query: &str, policy: EmptyQueryPolicy) -> Vec<&ChapterRecord> {
        search_chapters(query, self.chapters(), policy)
    }
}

/// The chapters compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCorpus;

impl ChapterSource for StaticCorpus {
    fn chapters(&self) -> &[ChapterRecord] {
        &SURAHS
    }
}
