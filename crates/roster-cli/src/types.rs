use std::path::PathBuf;

/// Result of one subcommand run, rendered by the summary table.
#[derive(Debug)]
pub struct RunSummary {
    pub outputs: Vec<OutputSummary>,
    /// Follow-ups worth surfacing (unmatched rows, fallback placements).
    pub notes: Vec<String>,
}

#[derive(Debug)]
pub struct OutputSummary {
    pub label: String,
    pub path: PathBuf,
    pub records: usize,
}
