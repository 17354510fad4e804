use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::model::VectorRecord;
use crate::pipeline::PipelineError;

pub const VCLUSTER_SUFFIX: &str = ".vcluster";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixShape {
    pub rows: usize,
    pub columns: usize,
}

impl MatrixShape {
    /// Columns come from the first vector; the rest are not checked.
    pub fn of(vectors: &[VectorRecord]) -> Result<Self, PipelineError> {
        let first = vectors.first().ok_or(PipelineError::NoMatchingVectors)?;
        Ok(Self {
            rows: vectors.len(),
            columns: first.len(),
        })
    }

    pub fn header(&self) -> String {
        format!("{} {}", self.rows, self.columns)
    }
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub path: PathBuf,
    pub shape: MatrixShape,
    pub ragged_rows: usize,
}

/// `<vectors path>.vcluster`, suffix appended to the full file name.
pub fn matrix_output_path(vectors_path: &Path) -> PathBuf {
    let mut name = OsString::from(vectors_path.as_os_str());
    name.push(VCLUSTER_SUFFIX);
    PathBuf::from(name)
}

pub fn count_ragged_rows(vectors: &[VectorRecord], columns: usize) -> usize {
    vectors.iter().filter(|v| v.len() != columns).count()
}

/// Header immediately followed by every row, no separators between rows
/// and no trailing newline.
pub fn render_matrix(vectors: &[VectorRecord]) -> Result<(MatrixShape, String), PipelineError> {
    let shape = MatrixShape::of(vectors)?;
    let mut out = shape.header();
    for vector in vectors {
        out.push_str(&vector.values.join(" "));
    }
    Ok((shape, out))
}

pub fn write_matrix(path: &Path, vectors: &[VectorRecord]) -> Result<Stage3Output, PipelineError> {
    let (shape, text) = render_matrix(vectors)?;
    let ragged_rows = count_ragged_rows(vectors, shape.columns);
    if ragged_rows > 0 {
        crate::warn!(
            "{} of {} rows differ from the first row length {}; column boundaries in {} will not line up",
            ragged_rows,
            shape.rows,
            shape.columns,
            path.display()
        );
    }

    let write_err = |source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(write_err)?);
    w.write_all(text.as_bytes()).map_err(write_err)?;
    w.flush().map_err(write_err)?;

    crate::info!(
        "wrote {} ({} rows x {} columns)",
        path.display(),
        shape.rows,
        shape.columns
    );

    Ok(Stage3Output {
        path: path.to_path_buf(),
        shape,
        ragged_rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_matrix.rs"]
mod tests;
