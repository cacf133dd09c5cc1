//! The analysis run orchestrator.

use dealscope_core::{AnalysisResult, InvestorPreferences, StartupProfile};
use dealscope_scoring::{derive_strengths_risks, ScoringEngine};

use crate::adapters::{ArtifactGenerator, BenchmarkProvider, DocumentStore, NarrativeGenerator};
use crate::{AnalysisError, AnalysisRequest, NoteKind};

/// Sequences one analysis run over injected adapters.
///
/// 1. Resolve requested documents; none resolving is the only hard failure.
/// 2. Gather public signals for the startup name.
/// 3. Fetch sector benchmarks (empty when sector is unset).
/// 4. Classify strengths and risks from raw metrics.
/// 5. Compute the weighted score breakdown and total.
/// 6. Build the context corpus: document texts, then signal summaries.
/// 7. Generate the three narrative notes (independent, run concurrently).
/// 8. Assemble the result.
/// 9. Create report artifacts and attach their locations.
///
/// The core computation is all-or-nothing; adapter degradation happens inside
/// the adapters and never aborts a run.
pub struct AnalysisPipeline<B, N, A> {
    scoring: ScoringEngine,
    benchmarks: B,
    narrative: N,
    artifacts: A,
}

impl<B, N, A> AnalysisPipeline<B, N, A>
where
    B: BenchmarkProvider,
    N: NarrativeGenerator,
    A: ArtifactGenerator,
{
    pub fn new(benchmarks: B, narrative: N, artifacts: A) -> Self {
        Self {
            scoring: ScoringEngine::new(),
            benchmarks,
            narrative,
            artifacts,
        }
    }

    /// Runs one analysis end to end.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoDocumentsAvailable`] if none of the
    /// requested document ids resolve; no scoring work happens in that case.
    pub async fn run(
        &self,
        store: &dyn DocumentStore,
        request: AnalysisRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        // Step 1: resolve documents before any scoring work.
        let documents = store.get(&request.document_ids);
        if documents.is_empty() {
            return Err(AnalysisError::NoDocumentsAvailable);
        }

        let mut startup = StartupProfile {
            name: request.startup_name,
            sector: request.sector,
            headquarters: request.headquarters,
            description: request.description.unwrap_or_default(),
            metrics: request.metrics,
            documents,
            public_signals: Vec::new(),
        };
        let preferences = InvestorPreferences {
            focus_weights: request.focus_weights,
            notes: request.notes,
        };

        // Step 2: public signals for this run.
        startup.public_signals = self.benchmarks.fetch_signals(&startup.name).await;

        // Step 3: sector benchmarks.
        let benchmarks = self
            .benchmarks
            .fetch_benchmarks(startup.sector.as_deref())
            .await;

        // Step 4: qualitative classification on raw metrics.
        let (strengths, risks) = derive_strengths_risks(&startup.metrics);

        // Step 5: weighted score breakdown.
        let score_breakdown = self.scoring.score(&startup, &preferences);
        let total_score = self.scoring.total_score(&score_breakdown);

        tracing::info!(
            startup = %startup.name,
            documents = startup.documents.len(),
            signals = startup.public_signals.len(),
            total_score,
            "scored analysis run"
        );

        // Step 6: context corpus — document texts in document order, then
        // signal summaries in signal order. Empty texts are skipped.
        let mut context_chunks: Vec<String> = startup
            .documents
            .iter()
            .filter(|doc| !doc.extracted_text.is_empty())
            .map(|doc| doc.extracted_text.clone())
            .collect();
        context_chunks.extend(startup.public_signals.iter().map(|s| s.summary.clone()));

        // Step 7: the three narrative calls share no state and have no
        // ordering requirement, so run them concurrently.
        let (summary_note, detailed_note, founder_profile_note) = tokio::join!(
            self.generate_note(NoteKind::Summary, &context_chunks),
            self.generate_note(NoteKind::Detailed, &context_chunks),
            self.generate_note(NoteKind::Founder, &context_chunks),
        );

        // Step 8: assemble.
        let mut analysis = AnalysisResult {
            startup,
            investor_preferences: preferences,
            strengths,
            risks,
            benchmarks,
            score_breakdown,
            total_score,
            summary_note,
            detailed_note,
            founder_profile_note,
            artifacts: std::collections::HashMap::new(),
        };

        // Step 9: artifacts are attached after narrative generation.
        analysis.artifacts = self.artifacts.create_artifacts(&analysis).await;

        Ok(analysis)
    }

    async fn generate_note(&self, kind: NoteKind, context_chunks: &[String]) -> String {
        self.narrative
            .generate(kind.prompt(), context_chunks, kind)
            .await
    }
}
