use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::RunSummary;

pub fn render_summary_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> std::io::Result<()> {
    let json = render_summary_json(summary)?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}
