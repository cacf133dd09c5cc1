//! Markdown rendering of analysis results.

use std::fmt::Write as _;

use dealscope_analysis::NoteKind;
use dealscope_core::{AnalysisResult, Dimension};

/// Renders the markdown report for one note kind.
///
/// Summary and detailed reports carry the full structure: total score,
/// breakdown, strengths, risks, benchmark comparison, and the analyst
/// narrative. The founder report carries the founder note alone.
#[must_use]
pub fn render_note_report(analysis: &AnalysisResult, kind: NoteKind) -> String {
    match kind {
        NoteKind::Summary => render_full(analysis, "Summary", &analysis.summary_note),
        NoteKind::Detailed => render_full(analysis, "Detailed", &analysis.detailed_note),
        NoteKind::Founder => render_founder(analysis),
    }
}

fn render_full(analysis: &AnalysisResult, kind_label: &str, note: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# {} - {kind_label} Investment Note\n",
        analysis.startup.name
    );
    let _ = writeln!(out, "Total Score: {:.2}\n", analysis.total_score);

    let _ = writeln!(out, "## Score Breakdown\n");
    for dim in Dimension::ALL {
        let value = analysis.score_breakdown.get(&dim).copied().unwrap_or(0.0);
        let _ = writeln!(out, "- {}: {value:.2}", dim.label());
    }

    let _ = writeln!(out, "\n## Strengths\n");
    for item in &analysis.strengths {
        let _ = writeln!(out, "- {item}");
    }

    let _ = writeln!(out, "\n## Risks\n");
    for item in &analysis.risks {
        let _ = writeln!(out, "- {item}");
    }

    let _ = writeln!(out, "\n## Benchmark Comparison\n");
    let mut benchmarks: Vec<_> = analysis.benchmarks.iter().collect();
    benchmarks.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in benchmarks {
        let _ = writeln!(out, "- {key}: {value}");
    }

    let _ = writeln!(out, "\n## Analyst Narrative\n");
    let _ = writeln!(out, "{note}");
    out
}

fn render_founder(analysis: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# Founder & Team Profile - {}\n",
        analysis.startup.name
    );
    let _ = writeln!(out, "{}", analysis.founder_profile_note);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use dealscope_core::{InvestorPreferences, StartupProfile};

    use super::*;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            startup: StartupProfile {
                name: "Acme Robotics".to_string(),
                sector: Some("AI".to_string()),
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
            strengths: vec!["Notable traction momentum".to_string()],
            risks: vec!["Team depth appears thin".to_string()],
            benchmarks: HashMap::from([("revenue_growth_pct".to_string(), 65.0)]),
            score_breakdown: BTreeMap::from([(Dimension::Market, 0.32)]),
            total_score: 0.32,
            summary_note: "summary body".to_string(),
            detailed_note: "detailed body".to_string(),
            founder_profile_note: "founder body".to_string(),
            artifacts: HashMap::new(),
        }
    }

    #[test]
    fn summary_report_has_all_sections() {
        let report = render_note_report(&analysis(), NoteKind::Summary);
        assert!(report.starts_with("# Acme Robotics - Summary Investment Note"));
        assert!(report.contains("Total Score: 0.32"));
        assert!(report.contains("## Score Breakdown"));
        assert!(report.contains("- Market Size & Velocity: 0.32"));
        assert!(report.contains("- Notable traction momentum"));
        assert!(report.contains("- Team depth appears thin"));
        assert!(report.contains("- revenue_growth_pct: 65"));
        assert!(report.contains("summary body"));
    }

    #[test]
    fn detailed_report_uses_detailed_note() {
        let report = render_note_report(&analysis(), NoteKind::Detailed);
        assert!(report.starts_with("# Acme Robotics - Detailed Investment Note"));
        assert!(report.contains("detailed body"));
        assert!(!report.contains("summary body"));
    }

    #[test]
    fn founder_report_is_note_only() {
        let report = render_note_report(&analysis(), NoteKind::Founder);
        assert!(report.starts_with("# Founder & Team Profile - Acme Robotics"));
        assert!(report.contains("founder body"));
        assert!(!report.contains("## Score Breakdown"));
    }

    #[test]
    fn missing_breakdown_entries_render_as_zero() {
        let report = render_note_report(&analysis(), NoteKind::Summary);
        assert!(report.contains("- Regulatory Fit: 0.00"));
    }
}
