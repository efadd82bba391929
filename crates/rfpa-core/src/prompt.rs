//! Proposal-drafting prompt assembled from the prompt generator form.

use std::fmt::Write;

use crate::models::analysis::AnalysisResult;
use crate::validation::FormData;

/// Build an LLM-ready prompt for drafting a proposal.
///
/// When `analysis` is given, its headline fields, requirements and
/// application sections are included so the draft can address them.
pub fn build_prompt(form: &FormData, analysis: Option<&AnalysisResult>) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are an experienced grant writer. Draft a funding proposal on behalf of {}.",
        form.org_name.trim()
    );

    let mission = form.mission.trim();
    if !mission.is_empty() {
        let _ = writeln!(prompt, "\nMission statement:\n{}", mission);
    }

    let funding = form.funding_amount.trim();
    if !funding.is_empty() {
        let _ = writeln!(prompt, "\nAmount requested: {}", funding);
    }

    if let Some(analysis) = analysis {
        let _ = writeln!(prompt, "\nThe proposal responds to \"{}\".", analysis.title);
        let _ = writeln!(prompt, "Issuing organization: {}", analysis.organization);
        let _ = writeln!(prompt, "Funding available: {}", analysis.funding_amount);

        for (category, items) in analysis.requirements.categories() {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(prompt, "\n{}:", category.label());
            for item in items {
                let _ = writeln!(prompt, "- {}", item);
            }
        }

        let _ = writeln!(prompt, "\nStructure the proposal with these sections:");
        for (i, section) in analysis.application_sections.iter().enumerate() {
            let _ = writeln!(prompt, "{}. {}: {}", i + 1, section.title, section.description);
        }

        if !analysis.success_tips.is_empty() {
            let _ = writeln!(prompt, "\nReviewer guidance from the RFP:");
            for tip in &analysis.success_tips {
                let _ = writeln!(prompt, "- {}", tip);
            }
        }
    }

    let _ = writeln!(
        prompt,
        "\nWrite in a clear, persuasive tone and address every requirement explicitly."
    );
    prompt
}
