//! Outline timing validation and improvement heuristics.
//!
//! Both functions are advisory: warnings never block anything by
//! themselves. The workflow coordinator wires timing validity into its
//! outline gate.

use super::model::{Outline, SectionType};
use serde::{Deserialize, Serialize};

/// Tolerated difference between declared and allocated minutes.
const TIMING_TOLERANCE_MINUTES: u32 = 2;

/// Result of checking an outline's time allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingValidation {
    pub is_valid: bool,
    pub total_allocated_minutes: u32,
    /// Signed difference: declared total minus allocated sum.
    pub difference_minutes: i64,
    pub warnings: Vec<String>,
}

/// Validates that section durations add up to the declared total.
///
/// Deterministic over its input: calling it twice yields identical
/// warnings.
pub fn validate_outline_timing(outline: &Outline) -> TimingValidation {
    let total_allocated = outline.allocated_minutes();
    let difference =
        i64::from(outline.total_duration_minutes) - i64::from(total_allocated);
    let mut warnings = Vec::new();

    if difference.unsigned_abs() > u64::from(TIMING_TOLERANCE_MINUTES) {
        warnings.push(format!(
            "Allocated {total_allocated} minutes does not match the declared {} (difference {difference})",
            outline.total_duration_minutes
        ));
    }

    for section in &outline.sections {
        if section.section_type != SectionType::Transition && section.duration_minutes < 1 {
            warnings.push(format!(
                "Section '{}' is under 1 minute",
                section.title
            ));
        }
        if section.section_type != SectionType::Main
            && section.duration_minutes * 2 > outline.total_duration_minutes
        {
            warnings.push(format!(
                "Section '{}' takes more than half the talk",
                section.title
            ));
        }
    }

    TimingValidation {
        is_valid: warnings.is_empty(),
        total_allocated_minutes: total_allocated,
        difference_minutes: difference,
        warnings,
    }
}

/// Heuristic structural suggestions for an outline.
pub fn suggest_outline_improvements(outline: &Outline) -> Vec<String> {
    let mut suggestions = Vec::new();

    if outline.learning_objectives.is_empty() {
        suggestions.push("Add learning objectives so the audience knows what they'll take away".to_string());
    }
    if outline.call_to_action.is_none() {
        suggestions.push("Add a call to action to close the talk with a next step".to_string());
    }

    let main_count = outline.sections_of_type(SectionType::Main).len();
    if main_count > 4 {
        suggestions.push(format!(
            "{main_count} main sections is a lot; consider merging related ones"
        ));
    }
    if main_count < 2 && outline.total_duration_minutes > 15 {
        suggestions.push(
            "Talks over 15 minutes usually need at least two main sections".to_string(),
        );
    }

    for section in &outline.sections {
        if section.key_points.is_empty() {
            suggestions.push(format!("Section '{}' has no key points", section.title));
        } else if section.key_points.len() > 6 {
            suggestions.push(format!(
                "Section '{}' has {} key points; more than 6 dilutes focus",
                section.title,
                section.key_points.len()
            ));
        }
    }

    let has_transitions = outline
        .sections
        .iter()
        .any(|s| s.section_type == SectionType::Transition);
    if !has_transitions && outline.total_duration_minutes > 20 {
        suggestions.push(
            "Talks over 20 minutes benefit from explicit transition sections".to_string(),
        );
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TalkConfigInput, TalkType};
    use crate::outline::builder::{build_outline_from_template, create_outline_template};
    use crate::outline::model::Section;
    use crate::template::TalkTemplate;

    fn sample_outline() -> Outline {
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        build_outline_from_template(&template, "Sample", 30)
    }

    #[test]
    fn well_formed_outline_passes_timing() {
        // Per-section rounding leaves a one-minute surplus at 30 minutes
        // (15% of 30 rounds up to 5); that stays within tolerance.
        let validation = validate_outline_timing(&sample_outline());
        assert!(validation.is_valid, "{:?}", validation.warnings);
        assert_eq!(validation.total_allocated_minutes, 31);
        assert_eq!(validation.difference_minutes, -1);
        assert!(validation.difference_minutes.unsigned_abs() <= 2);
    }

    #[test]
    fn timing_validation_is_idempotent() {
        let outline = sample_outline();
        let first = validate_outline_timing(&outline);
        let second = validate_outline_timing(&outline);
        assert_eq!(first, second);
    }

    #[test]
    fn large_mismatch_is_flagged() {
        let mut outline = sample_outline();
        outline.total_duration_minutes = 60;
        let validation = validate_outline_timing(&outline);
        assert!(!validation.is_valid);
        assert!(validation.warnings[0].contains("does not match"));
    }

    #[test]
    fn sub_minute_section_is_flagged_unless_transition() {
        let mut outline = sample_outline();
        outline
            .sections
            .push(Section::new("section-6", "Aside", 0, 6, SectionType::Main));
        let validation = validate_outline_timing(&outline);
        assert!(validation.warnings.iter().any(|w| w.contains("under 1 minute")));

        let mut outline = sample_outline();
        outline.sections.push(Section::new(
            "section-6",
            "Bridge",
            0,
            6,
            SectionType::Transition,
        ));
        let validation = validate_outline_timing(&outline);
        assert!(!validation
            .warnings
            .iter()
            .any(|w| w.contains("under 1 minute")));
    }

    #[test]
    fn oversized_non_main_section_is_flagged() {
        let mut outline = sample_outline();
        outline.sections[0].duration_minutes = 20; // intro, 20 of 30
        let validation = validate_outline_timing(&outline);
        assert!(validation
            .warnings
            .iter()
            .any(|w| w.contains("more than half")));
    }

    #[test]
    fn improvement_heuristics_fire_on_bare_outline() {
        let mut input = TalkConfigInput::new("Heuristics");
        input.duration_minutes = Some(30);
        let config = input.validate().unwrap();
        let outline = create_outline_template(&config);
        let suggestions = suggest_outline_improvements(&outline);
        assert!(suggestions.iter().any(|s| s.contains("learning objectives")));
        assert!(suggestions.iter().any(|s| s.contains("call to action")));
        // The two generic main sections carry no key points.
        assert!(suggestions.iter().any(|s| s.contains("no key points")));
        assert!(suggestions.iter().any(|s| s.contains("transition")));
    }
}
