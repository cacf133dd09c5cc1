//! Deterministic fallback note used whenever the live backend is unavailable.

use dealscope_analysis::NoteKind;

/// Body length cap for fallback notes, matching the live backend's budget.
const MAX_BODY_CHARS: usize = 4000;
/// How many trailing context chunks the snapshot includes.
const SNAPSHOT_CHUNKS: usize = 5;

/// Builds the degraded note: a `[KIND]` tag line, the prompt, and a snapshot
/// of the most recent context chunks, truncated to a fixed budget.
///
/// Deterministic for a given input, so repeated runs produce identical
/// artifacts while the live backend is disabled.
#[must_use]
pub fn fallback_note(prompt: &str, context_chunks: &[String], kind: NoteKind) -> String {
    let start = context_chunks.len().saturating_sub(SNAPSHOT_CHUNKS);
    let joined = context_chunks[start..].join("\n\n");

    let header = format!("[{}]", kind.tag());
    let body: String = format!("Prompt: {prompt}\n\nContext Snapshot:\n{joined}")
        .chars()
        .take(MAX_BODY_CHARS)
        .collect();
    let footer = "\n\n(Enable the narrative backend for richer analysis.)";

    format!("{header}\n{body}{footer}")
}
