//! Content-quality validation.

use super::model::Script;
use crate::config::{Audience, TalkConfig};
use serde::{Deserialize, Serialize};

/// Reading speed used for the duration estimate, in words per minute.
const READING_WPM: f64 = 150.0;

/// Minimum characters for the introduction and conclusion.
const MIN_BOOKEND_CHARS: usize = 100;

/// Minimum characters per section body.
const MIN_SECTION_CHARS: usize = 50;

/// Jargon terms counted for general audiences.
const JARGON_TERMS: [&str; 8] = [
    "api", "backend", "middleware", "refactor", "runtime", "latency", "idempotent", "orchestration",
];

/// Maximum jargon occurrences before a suggestion fires.
const JARGON_LIMIT: usize = 5;

/// Result of validating a script against its configuration.
///
/// `is_valid` reflects only `issues`; `suggestions` are advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentValidation {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

fn count_jargon(text: &str) -> usize {
    let lower = text.to_lowercase();
    JARGON_TERMS
        .iter()
        .map(|term| lower.matches(term).count())
        .sum()
}

/// Validates a script's length, pacing, and audience fit.
pub fn validate_content(script: &Script, config: &TalkConfig) -> ContentValidation {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if script.introduction.chars().count() < MIN_BOOKEND_CHARS {
        issues.push(format!(
            "Introduction is under {MIN_BOOKEND_CHARS} characters"
        ));
    }
    if script.conclusion.chars().count() < MIN_BOOKEND_CHARS {
        issues.push(format!("Conclusion is under {MIN_BOOKEND_CHARS} characters"));
    }
    for section in &script.sections {
        if section.body.chars().count() < MIN_SECTION_CHARS {
            issues.push(format!(
                "Section '{}' body is under {MIN_SECTION_CHARS} characters",
                section.title
            ));
        }
    }

    let estimated_minutes = script.word_count() as f64 / READING_WPM;
    let duration = f64::from(config.duration_minutes);
    if estimated_minutes < duration * 0.8 || estimated_minutes > duration * 1.2 {
        suggestions.push(format!(
            "Estimated reading time {estimated_minutes:.1} min is outside ±20% of the {} min slot",
            config.duration_minutes
        ));
    }

    if config.audience == Audience::General {
        let mut full_text = format!("{} {}", script.introduction, script.conclusion);
        for section in &script.sections {
            full_text.push(' ');
            full_text.push_str(&section.body);
        }
        let jargon = count_jargon(&full_text);
        if jargon > JARGON_LIMIT {
            suggestions.push(format!(
                "{jargon} jargon terms found; consider plainer language for a general audience"
            ));
        }
    }

    ContentValidation {
        is_valid: issues.is_empty(),
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TalkConfigInput, Tone};
    use crate::content::model::ScriptSection;

    fn filler(words: usize) -> String {
        "word ".repeat(words).trim_end().to_string()
    }

    fn full_script(body_words: usize) -> Script {
        Script {
            title: "Test".to_string(),
            introduction: filler(40), // 200 chars, comfortably over 100
            sections: vec![ScriptSection {
                body: filler(body_words),
                ..ScriptSection::skeleton("section-0", "Main")
            }],
            conclusion: filler(40),
            speaker_notes: Vec::new(),
        }
    }

    fn config(audience: Audience, duration: u32) -> TalkConfig {
        let mut input = TalkConfigInput::new("Validation");
        input.audience = Some(audience);
        input.duration_minutes = Some(duration);
        input.tone = Some(Tone::Conversational);
        input.validate().unwrap()
    }

    #[test]
    fn skeleton_fails_bookend_and_body_checks() {
        let script = Script {
            title: "Empty".to_string(),
            introduction: String::new(),
            sections: vec![ScriptSection::skeleton("section-0", "Main")],
            conclusion: String::new(),
            speaker_notes: Vec::new(),
        };
        let validation = validate_content(&script, &config(Audience::Technical, 30));
        assert!(!validation.is_valid);
        assert_eq!(validation.issues.len(), 3);
    }

    #[test]
    fn reading_time_outside_band_is_a_suggestion_not_an_issue() {
        // 10 min talk at 150 wpm wants ~1500 words; give it ~130.
        let script = full_script(50);
        let validation = validate_content(&script, &config(Audience::Technical, 10));
        assert!(validation.is_valid);
        assert!(validation
            .suggestions
            .iter()
            .any(|s| s.contains("reading time")));
    }

    #[test]
    fn reading_time_inside_band_passes_quietly() {
        // 5 min * 150 wpm = 750 words target; 700 total is within ±20%.
        let script = full_script(620);
        let validation = validate_content(&script, &config(Audience::Technical, 5));
        assert!(validation.suggestions.is_empty(), "{:?}", validation.suggestions);
    }

    #[test]
    fn jargon_counts_only_for_general_audience() {
        let mut script = full_script(700);
        script.sections[0].body +=
            " API backend API middleware runtime latency refactor orchestration";
        let general = validate_content(&script, &config(Audience::General, 5));
        assert!(general.suggestions.iter().any(|s| s.contains("jargon")));

        let technical = validate_content(&script, &config(Audience::Technical, 5));
        assert!(!technical.suggestions.iter().any(|s| s.contains("jargon")));
    }
}
