//! Script skeleton construction and suggestion tables.
//!
//! Hooks and conclusions come from static tables keyed on tone and
//! audience. Only technical and business audiences receive the extra
//! audience-keyed hooks; other audiences get none.

use super::model::{PacingVerdict, Script, ScriptSection, SpeakerNote};
use crate::config::{Audience, TalkConfig, Tone};
use crate::outline::{Outline, SectionType};

/// Marker that flags an emphasis phrase inside drafted content.
pub const EMPHASIS_MARKER: &str = "[EMPHASIS]";

/// Maximum characters kept when rendering a pause-point sentence.
const PAUSE_POINT_MAX_LEN: usize = 50;

/// Maximum number of pause points extracted per section.
const PAUSE_POINT_LIMIT: usize = 5;

/// Builds an empty script skeleton from an outline.
///
/// One `ScriptSection` per non-Q&A outline section; one `SpeakerNote` per
/// outline section including Q&A. The section's delivery note rides along
/// in the timing string; emphasis points stay empty until content is
/// drafted and recomputed.
pub fn build_script_skeleton(outline: &Outline) -> Script {
    let sections = outline
        .sections
        .iter()
        .filter(|s| s.section_type != SectionType::Qa)
        .map(|s| ScriptSection::skeleton(&s.id, &s.title))
        .collect();

    let speaker_notes = outline
        .sections
        .iter()
        .map(|s| SpeakerNote {
            section_id: s.id.clone(),
            timing: match &s.notes {
                Some(note) => format!("{} min ({note})", s.duration_minutes),
                None => format!("{} min", s.duration_minutes),
            },
            emphasis_points: Vec::new(),
            pause_points: Vec::new(),
            pacing: None,
        })
        .collect();

    Script {
        title: outline.title.clone(),
        introduction: String::new(),
        sections,
        conclusion: String::new(),
        speaker_notes,
    }
}

fn universal_hooks() -> Vec<String> {
    vec![
        "Open with a question the audience can't immediately answer".to_string(),
        "Start with a surprising statistic about your topic".to_string(),
        "Tell a 30-second story that ends where the talk begins".to_string(),
    ]
}

fn tone_hooks(tone: Tone) -> Vec<String> {
    let hooks: [&str; 3] = match tone {
        Tone::Formal => [
            "Cite the founding result or paper the field still builds on",
            "Open with a precise definition the talk will complicate",
            "Present the thesis statement up front, then defend it",
        ],
        Tone::Conversational => [
            "Admit the mistake that taught you this topic",
            "Ask for a show of hands on a relatable frustration",
            "Start mid-anecdote, as if resuming a conversation",
        ],
        Tone::Inspirational => [
            "Paint the before-and-after picture of adopting this idea",
            "Open with the person whose work made yours possible",
            "Describe the moment you realized this mattered",
        ],
        Tone::Educational => [
            "Pose the exam question the audience will be able to answer by the end",
            "Show the wrong answer everyone gives first",
            "Start from the simplest case and promise to break it",
        ],
    };
    hooks.iter().map(|h| h.to_string()).collect()
}

fn audience_hooks(audience: Audience) -> Vec<String> {
    let hooks: Option<[&str; 3]> = match audience {
        Audience::Technical => Some([
            "Open with the stack trace or metric that started it all",
            "Show the one-line diff with an outsized impact",
            "Benchmarks first, explanation second",
        ]),
        Audience::Business => Some([
            "Lead with the cost of the status quo in dollars or hours",
            "Open with a competitor move your topic answers",
            "Start from the quarterly metric this talk improves",
        ]),
        // Academic and general audiences draw from the shared pools only.
        Audience::Academic | Audience::General => None,
    };
    hooks
        .map(|h| h.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

/// Opening-hook suggestions for the configured tone and audience.
///
/// Three universal hooks, three tone-keyed hooks, and - for technical or
/// business audiences only - three audience-keyed hooks.
pub fn generate_hook_suggestions(config: &TalkConfig) -> Vec<String> {
    let mut hooks = universal_hooks();
    hooks.extend(tone_hooks(config.tone));
    hooks.extend(audience_hooks(config.audience));
    hooks
}

fn tone_conclusions(tone: Tone) -> Vec<String> {
    let patterns: [&str; 3] = match tone {
        Tone::Formal => [
            "Restate the thesis and summarize the supporting evidence",
            "Close with the open problems the work leaves behind",
            "End with the formal acknowledgment of limits and scope",
        ],
        Tone::Conversational => [
            "Circle back to the opening story with the ending it deserved",
            "Leave them with the one sentence you'd put on a sticky note",
            "Close by inviting disagreement over coffee",
        ],
        Tone::Inspirational => [
            "End with the future that becomes possible if they act",
            "Close on the person in the room this could help most",
            "Finish with the challenge, then silence",
        ],
        Tone::Educational => [
            "Re-ask the opening question and let the room answer it",
            "Summarize as a checklist they can apply tomorrow",
            "Close with the next concept this one unlocks",
        ],
    };
    patterns.iter().map(|p| p.to_string()).collect()
}

/// Conclusion-pattern suggestions: three universal plus three tone-keyed.
pub fn generate_conclusion_patterns(config: &TalkConfig) -> Vec<String> {
    let mut patterns = vec![
        "Summarize the three points you most want remembered".to_string(),
        "End with a clear call to action".to_string(),
        "Bookend: return to your opening hook with new meaning".to_string(),
    ];
    patterns.extend(tone_conclusions(config.tone));
    patterns
}

/// Estimated words needed to fill a duration at the tone's speaking rate.
pub fn estimate_word_count(duration_minutes: u32, tone: Tone) -> u32 {
    duration_minutes * tone.words_per_minute()
}

fn extract_emphasis_points(content: &str) -> Vec<String> {
    content
        .split(EMPHASIS_MARKER)
        .skip(1)
        .map(|rest| {
            rest.lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .filter(|p| !p.is_empty())
        .collect()
}

fn extract_pause_points(content: &str) -> Vec<String> {
    let mut points = Vec::new();
    let mut sentence = String::new();
    for ch in content.chars() {
        match ch {
            '?' | '!' => {
                let trimmed = sentence.trim();
                if !trimmed.is_empty() {
                    let truncated: String = trimmed.chars().take(PAUSE_POINT_MAX_LEN).collect();
                    points.push(format!("{truncated}{ch}"));
                    if points.len() == PAUSE_POINT_LIMIT {
                        return points;
                    }
                }
                sentence.clear();
            }
            '.' => sentence.clear(),
            _ => sentence.push(ch),
        }
    }
    points
}

/// Computes a speaker note for one drafted section.
///
/// The pacing verdict compares the draft's word count against the target
/// for the section's duration: over 110% is too long, under 90% too short.
pub fn compute_speaker_notes(
    section_id: &str,
    content: &str,
    duration_minutes: u32,
    config: &TalkConfig,
) -> SpeakerNote {
    let target_words = estimate_word_count(duration_minutes, config.tone);
    let actual_words = content.split_whitespace().count() as u32;

    let pacing = if f64::from(actual_words) > f64::from(target_words) * 1.1 {
        PacingVerdict::TooLong
    } else if f64::from(actual_words) < f64::from(target_words) * 0.9 {
        PacingVerdict::TooShort
    } else {
        PacingVerdict::OnTrack
    };

    SpeakerNote {
        section_id: section_id.to_string(),
        timing: format!(
            "{duration_minutes} min, target ~{target_words} words ({actual_words} drafted, {pacing})"
        ),
        emphasis_points: extract_emphasis_points(content),
        pause_points: extract_pause_points(content),
        pacing: Some(pacing),
    }
}
