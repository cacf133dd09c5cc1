//! File-writing artifact generator.

use std::collections::HashMap;
use std::path::PathBuf;

use dealscope_analysis::{ArtifactGenerator, NoteKind};
use dealscope_core::AnalysisResult;

use crate::render::render_note_report;
use crate::ReportError;

/// Writes one markdown report per note kind into the output directory,
/// returning label → written path. A failed write is logged and its label
/// omitted; the remaining artifacts are still produced.
pub struct FileArtifactGenerator {
    output_dir: PathBuf,
}

impl FileArtifactGenerator {
    /// Creates the generator, ensuring the output directory exists.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the output directory cannot be created.
    pub fn new(output_dir: PathBuf) -> Result<Self, ReportError> {
        std::fs::create_dir_all(&output_dir).map_err(|source| ReportError::Io {
            path: output_dir.display().to_string(),
            source,
        })?;
        Ok(Self { output_dir })
    }
}

impl ArtifactGenerator for FileArtifactGenerator {
    async fn create_artifacts(&self, result: &AnalysisResult) -> HashMap<String, String> {
        let mut artifacts = HashMap::new();

        for kind in NoteKind::ALL {
            let filename =
                format!("{}_{}.md", result.startup.name, kind.label()).replace(' ', "_");
            let path = self.output_dir.join(filename);
            let content = render_note_report(result, kind);

            match std::fs::write(&path, content) {
                Ok(()) => {
                    artifacts.insert(kind.label().to_string(), path.display().to_string());
                }
                Err(e) => {
                    tracing::warn!(
                        kind = %kind,
                        path = %path.display(),
                        error = %e,
                        "failed to write report artifact"
                    );
                }
            }
        }

        artifacts
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use dealscope_core::{InvestorPreferences, StartupProfile};

    use super::*;

    fn analysis(name: &str) -> AnalysisResult {
        AnalysisResult {
            startup: StartupProfile {
                name: name.to_string(),
                sector: None,
                headquarters: None,
                description: String::new(),
                metrics: HashMap::new(),
                documents: Vec::new(),
                public_signals: Vec::new(),
            },
            investor_preferences: InvestorPreferences {
                focus_weights: HashMap::new(),
                notes: None,
            },
            strengths: Vec::new(),
            risks: Vec::new(),
            benchmarks: HashMap::new(),
            score_breakdown: BTreeMap::new(),
            total_score: 0.0,
            summary_note: "s".to_string(),
            detailed_note: "d".to_string(),
            founder_profile_note: "f".to_string(),
            artifacts: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn writes_all_three_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let generator =
            FileArtifactGenerator::new(dir.path().to_path_buf()).expect("dir creatable");

        let artifacts = generator.create_artifacts(&analysis("Acme Robotics")).await;

        assert_eq!(artifacts.len(), 3);
        for kind in NoteKind::ALL {
            let path = artifacts.get(kind.label()).expect("artifact present");
            // Spaces in the startup name become underscores.
            assert!(path.ends_with(&format!("Acme_Robotics_{}.md", kind.label())));
            assert!(std::path::Path::new(path).exists());
        }
    }

    #[tokio::test]
    async fn founder_artifact_contains_founder_note() {
        let dir = tempfile::tempdir().expect("tempdir");
        let generator =
            FileArtifactGenerator::new(dir.path().to_path_buf()).expect("dir creatable");

        let artifacts = generator.create_artifacts(&analysis("TestCo")).await;
        let founder_path = artifacts.get("founder").expect("founder artifact");
        let content = std::fs::read_to_string(founder_path).expect("readable");
        assert!(content.contains("Founder & Team Profile - TestCo"));
        assert!(content.contains('f'));
    }
}
