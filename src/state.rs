use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the window draws from. Built once in `main` and never
/// mutated: the tool is one-shot and the UI only reads.
pub struct AppState {
    /// The padded series on display.
    pub series: Series,

    /// Filename stem the segments were loaded from.
    pub file_prefix: String,

    /// How many segment files were read.
    pub segment_count: usize,
}

impl AppState {
    pub fn new(series: Series, file_prefix: String, segment_count: usize) -> Self {
        Self {
            series,
            file_prefix,
            segment_count,
        }
    }
}
