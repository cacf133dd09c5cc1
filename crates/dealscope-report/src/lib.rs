//! Report artifact generation for DealScope.
//!
//! Pure markdown rendering of the three investment notes plus a
//! file-writing `ArtifactGenerator`. PDF layout is deliberately out of
//! scope; markdown keeps the same document structure and is handed to
//! downstream renderers.

mod render;
mod writer;

use thiserror::Error;

pub use render::render_note_report;
pub use writer::FileArtifactGenerator;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
