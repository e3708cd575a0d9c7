use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionCounts {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub header_candidates_rejected: usize,
    pub rows_written: usize,
    pub rows_dropped: usize,
    pub rows_padded: usize,
    pub excess_fields_dropped: usize,
    pub column_count: usize,
}

impl ConversionCounts {
    /// CSV lines written, header included.
    pub fn output_lines(&self) -> usize {
        if self.column_count == 0 {
            0
        } else {
            self.rows_written + 1
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub output_path: String,
    pub columns: Vec<String>,
    pub counts: ConversionCounts,
}
