//! Markdown rendering of outlines.

use super::model::Outline;
use crate::config::TalkConfig;

/// Renders an outline as a human-readable markdown report.
pub fn outline_to_markdown(outline: &Outline, config: &TalkConfig) -> String {
    let mut lines = vec![
        format!("# {}\n", outline.title),
        format!("**Duration:** {} minutes", outline.total_duration_minutes),
        format!("**Audience:** {}", config.audience),
        format!("**Type:** {}\n", config.talk_type.label()),
    ];

    if let Some(subtitle) = &outline.subtitle {
        lines.insert(1, format!("*{subtitle}*\n"));
    }

    if !outline.learning_objectives.is_empty() {
        lines.push("## Learning Objectives\n".to_string());
        for objective in &outline.learning_objectives {
            lines.push(format!("- {objective}"));
        }
        lines.push(String::new());
    }

    lines.push("## Outline\n".to_string());

    for (index, section) in outline.sections.iter().enumerate() {
        lines.push(format!(
            "### {}. {} ({} min)\n",
            index + 1,
            section.title,
            section.duration_minutes
        ));
        for point in &section.key_points {
            lines.push(format!("- {point}"));
        }
        if let Some(notes) = &section.notes {
            lines.push(format!("\n*Notes: {notes}*"));
        }
        lines.push(String::new());
    }

    if let Some(cta) = &outline.call_to_action {
        lines.push(format!("## Call to Action\n\n{cta}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TalkConfigInput, TalkType};
    use crate::outline::builder::build_outline_from_template;
    use crate::template::TalkTemplate;

    #[test]
    fn markdown_report_contains_title_sections_and_objectives() {
        let config = TalkConfigInput::new("Rust for Teams").validate().unwrap();
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        let mut outline = build_outline_from_template(&template, &config.topic, 30);
        outline.learning_objectives = vec!["Understand ownership".to_string()];
        outline.call_to_action = Some("Try it on one module this week".to_string());

        let markdown = outline_to_markdown(&outline, &config);
        assert!(markdown.starts_with("# Rust for Teams\n"));
        assert!(markdown.contains("**Type:** Technical Deep Dive"));
        assert!(markdown.contains("### 1. Introduction (3 min)"));
        assert!(markdown.contains("- Understand ownership"));
        assert!(markdown.contains("## Call to Action"));
    }
}
