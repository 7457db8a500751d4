//! Timing-cue report and practice suggestions.

use crate::config::{TalkConfig, TalkType};
use crate::outline::Outline;

/// Formats a minute offset as `MM:SS`.
pub fn format_time(minutes: f64) -> String {
    let whole = minutes.floor() as u32;
    let seconds = ((minutes - f64::from(whole)) * 60.0).round() as u32;
    format!("{whole:02}:{seconds:02}")
}

/// Generates a section-by-section timing-cue report for rehearsal.
///
/// Each section gets cumulative start/end stamps; its key points are
/// distributed evenly across the section's duration window.
pub fn generate_timing_cues(outline: &Outline) -> String {
    let mut output = vec![format!("# Timing Cues: {}\n", outline.title)];
    output.push(format!(
        "**Total Duration:** {} minutes\n",
        outline.total_duration_minutes
    ));

    let mut running_time = 0.0f64;

    for (index, section) in outline.sections.iter().enumerate() {
        let start_time = running_time;
        let end_time = running_time + f64::from(section.duration_minutes);

        output.push(format!("\n## {}. {}", index + 1, section.title));
        output.push(format!(
            "**Start:** {} | **End:** {} | **Duration:** {} min\n",
            format_time(start_time),
            format_time(end_time),
            section.duration_minutes
        ));

        if !section.key_points.is_empty() {
            let point_duration =
                f64::from(section.duration_minutes) / section.key_points.len() as f64;
            for (j, point) in section.key_points.iter().enumerate() {
                let point_time = start_time + j as f64 * point_duration;
                output.push(format!("- {}: {point}", format_time(point_time)));
            }
        }

        running_time = end_time;
    }

    output.join("\n")
}

fn talk_type_tips(talk_type: TalkType) -> [&'static str; 3] {
    match talk_type {
        TalkType::Keynote => [
            "Rehearse the opening story until the timing of its punchline is automatic",
            "Practice walking and pausing; keynote stages are larger than rehearsal rooms",
            "Record a full run and watch only your closing two minutes",
        ],
        TalkType::TechnicalDeepDive => [
            "Run every demo from a clean environment at least once",
            "Rehearse explaining each diagram aloud without looking at the slide",
            "Practice the fallback narration for when the demo fails",
        ],
        TalkType::Workshop => [
            "Time the exercises with someone unfamiliar with the material",
            "Rehearse the transitions between talking and hands-on segments",
            "Prepare what to say while the room works quietly",
        ],
        TalkType::LightningTalk => [
            "Rehearse with a hard timer at least five times; cut until you land at 90%",
            "Practice recovering from a skipped sentence without stopping",
            "Memorize the first and last sentences word for word",
        ],
        TalkType::PanelDiscussion => [
            "Rehearse answers as 30-second positions, not monologues",
            "Practice disagreeing with a co-panelist while staying warm",
            "Prepare a bridge from each likely question to your key message",
        ],
    }
}

/// Practice suggestions: four universal tips plus three per talk type.
pub fn generate_practice_suggestions(config: &TalkConfig) -> Vec<String> {
    let mut tips = vec![
        "Rehearse out loud and standing; silent read-throughs underestimate time by a third"
            .to_string(),
        "Record one full run and listen at normal speed, noting every stumble".to_string(),
        "Practice in front of one person before practicing in front of many".to_string(),
        "Do the final rehearsal with the actual clicker, screen, and clothing".to_string(),
    ];
    tips.extend(
        talk_type_tips(config.talk_type)
            .iter()
            .map(|t| t.to_string()),
    );
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TalkConfigInput;
    use crate::outline::build_outline_from_template;
    use crate::template::TalkTemplate;
    use strum::IntoEnumIterator;

    #[test]
    fn format_time_renders_mm_ss() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(3.5), "03:30");
        assert_eq!(format_time(12.25), "12:15");
        assert_eq!(format_time(105.0), "105:00");
    }

    #[test]
    fn cues_accumulate_start_and_end_offsets() {
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        let outline = build_outline_from_template(&template, "Cue Talk", 30);
        let cues = generate_timing_cues(&outline);
        assert!(cues.starts_with("# Timing Cues: Cue Talk\n"));
        // Introduction: 0-3 min; Problem and Context starts at 3.
        assert!(cues.contains("**Start:** 00:00 | **End:** 03:00"));
        assert!(cues.contains("**Start:** 03:00"));
    }

    #[test]
    fn key_points_are_spread_across_the_window() {
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        let outline = build_outline_from_template(&template, "Cue Talk", 30);
        let cues = generate_timing_cues(&outline);
        // Introduction (3 min, 3 points): cues at 0:00, 1:00, 2:00.
        assert!(cues.contains("- 00:00: Hook"));
        assert!(cues.contains("- 01:00: Why this matters"));
        assert!(cues.contains("- 02:00: What you'll learn"));
    }

    #[test]
    fn practice_suggestions_are_four_plus_three() {
        for talk_type in TalkType::iter() {
            let mut input = TalkConfigInput::new("Practice");
            input.talk_type = Some(talk_type);
            let config = input.validate().unwrap();
            assert_eq!(generate_practice_suggestions(&config).len(), 7);
        }
    }
}
