use crate::types::{Category, StructuredReport, ALL_CATEGORIES};

/// Per-document accumulator of extracted text, one buffer per category
///
/// Text is appended in sentence encounter order and finalized into a
/// [`StructuredReport`] by [`finish`](ObservationAccumulator::finish).
#[derive(Debug, Clone)]
pub struct ObservationAccumulator {
    buffers: Vec<String>,
}

impl Default for ObservationAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationAccumulator {
    /// Creates empty buffers for every category
    pub fn new() -> Self {
        Self {
            buffers: vec![String::new(); ALL_CATEGORIES.len()],
        }
    }

    /// Records one matched sentence for a category
    ///
    /// Appends the space-joined clauses followed by a separator space, or the
    /// whole sentence text when no clause was extracted.
    pub fn record(&mut self, category: Category, sentence_text: &str, clauses: &[String]) {
        let buffer = &mut self.buffers[category.index()];
        if clauses.is_empty() {
            buffer.push_str(sentence_text);
        } else {
            buffer.push_str(&clauses.join(" "));
        }
        buffer.push(' ');
    }

    /// Returns the raw (untrimmed) text accumulated for a category
    pub fn raw(&self, category: Category) -> &str {
        &self.buffers[category.index()]
    }

    /// Finalizes every category into a report
    ///
    /// Buffers are trimmed; empty results become the placeholder.
    pub fn finish(self) -> StructuredReport {
        StructuredReport::from_raw(self.buffers)
    }
}
