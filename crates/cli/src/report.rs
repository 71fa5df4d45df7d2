use serde::Serialize;
use std::path::Path;
use thesaurus_align::ReportingCounters;

/// Summary printed after a successful merge
#[derive(Debug, Serialize)]
pub(crate) struct MergeReport<'a> {
    #[serde(flatten)]
    pub counters: ReportingCounters,
    pub total: usize,
    pub output: &'a Path,
}

impl<'a> MergeReport<'a> {
    pub(crate) fn new(counters: ReportingCounters, output: &'a Path) -> Self {
        Self {
            total: counters.total(),
            counters,
            output,
        }
    }

    /// One `"<count>  <category>  found"` line per category
    pub(crate) fn render_text(&self) -> String {
        self.counters
            .iter()
            .map(|(category, count)| format!("{count}  {category}  found"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
