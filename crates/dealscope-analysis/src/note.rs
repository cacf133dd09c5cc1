use serde::{Deserialize, Serialize};

/// The three narrative notes produced per analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Summary,
    Detailed,
    Founder,
}

impl NoteKind {
    pub const ALL: [NoteKind; 3] = [NoteKind::Summary, NoteKind::Detailed, NoteKind::Founder];

    /// Lowercase label used for artifact keys and wire payloads.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            NoteKind::Summary => "summary",
            NoteKind::Detailed => "detailed",
            NoteKind::Founder => "founder",
        }
    }

    /// Upper-case bracket tag used in fallback narrative output.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            NoteKind::Summary => "SUMMARY",
            NoteKind::Detailed => "DETAILED",
            NoteKind::Founder => "FOUNDER",
        }
    }

    /// Fixed instructional prompt sent to the narrative backend.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            NoteKind::Summary => {
                "Generate a concise investment summary with recommendation and grading."
            }
            NoteKind::Detailed => {
                "Generate a detailed investment memo including benchmarks, risks, and diligence flags."
            }
            NoteKind::Founder => {
                "Summarize founder background, team structure, and capability risks."
            }
        }
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
