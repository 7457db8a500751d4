//! Markdown rendering of scripts.

use super::model::Script;

/// Renders a script as a markdown report with a speaker-notes appendix.
pub fn script_to_markdown(script: &Script) -> String {
    let mut lines = vec![format!("# {} - Script\n", script.title)];

    lines.push("## Introduction\n".to_string());
    lines.push(script.introduction.clone());
    lines.push(String::new());

    for section in &script.sections {
        lines.push(format!("## {}\n", section.title));
        if !section.transition_in.is_empty() {
            lines.push(format!("*In: {}*\n", section.transition_in));
        }
        lines.push(section.body.clone());
        for code in &section.code_examples {
            lines.push(format!("\n```\n{code}\n```"));
        }
        for anecdote in &section.anecdotes {
            lines.push(format!("\n> {anecdote}"));
        }
        if !section.transition_out.is_empty() {
            lines.push(format!("\n*Out: {}*", section.transition_out));
        }
        lines.push(String::new());
    }

    lines.push("## Conclusion\n".to_string());
    lines.push(script.conclusion.clone());

    if !script.speaker_notes.is_empty() {
        lines.push("\n## Speaker Notes\n".to_string());
        for note in &script.speaker_notes {
            lines.push(format!("### {}\n", note.section_id));
            lines.push(format!("**Timing:** {}", note.timing));
            if !note.emphasis_points.is_empty() {
                lines.push(format!("**Emphasize:** {}", note.emphasis_points.join("; ")));
            }
            if !note.pause_points.is_empty() {
                lines.push(format!("**Pause after:** {}", note.pause_points.join(" | ")));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
