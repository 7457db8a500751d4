//! Outline construction.
//!
//! Two builders exist: the template-based one used by the workflow, and a
//! coarser banded builder for callers that bring no template concepts.

use super::model::{Outline, Section, SectionType};
use crate::config::{TalkConfig, TalkType};
use crate::template::TalkTemplate;

/// Builds a concrete outline from a talk template.
///
/// Each section is allocated `round(percent/100 × duration)` minutes. The
/// rounding remainder is not redistributed, so the allocated sum may differ
/// from `duration` by a small amount; `validate_outline_timing` surfaces a
/// warning when the difference exceeds two minutes.
pub fn build_outline_from_template(
    template: &TalkTemplate,
    topic: &str,
    duration_minutes: u32,
) -> Outline {
    let sections = template
        .sections
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let minutes =
                (f64::from(spec.percent) / 100.0 * f64::from(duration_minutes)).round() as u32;
            Section {
                id: format!("section-{index}"),
                title: spec.title.clone(),
                duration_minutes: minutes,
                order: index as u32,
                section_type: spec.section_type,
                key_points: spec.prompts.clone(),
                subsections: None,
                notes: Some(spec.delivery_note.clone()),
            }
        })
        .collect();

    Outline {
        title: topic.to_string(),
        subtitle: None,
        total_duration_minutes: duration_minutes,
        sections,
        learning_objectives: Vec::new(),
        call_to_action: None,
    }
}

/// Percent allocation (intro, main, conclusion, qa) for the coarse builder.
///
/// Four explicit entries; the technical_deep_dive split serves as the
/// fallback for any other talk type.
fn time_allocation(talk_type: TalkType) -> (u32, u32, u32, u32) {
    match talk_type {
        TalkType::Keynote => (15, 55, 10, 20),
        TalkType::Workshop => (10, 70, 10, 10),
        TalkType::LightningTalk => (10, 75, 15, 0),
        TalkType::PanelDiscussion => (10, 50, 10, 30),
        _ => (10, 60, 10, 20),
    }
}

fn banded_minutes(percent: u32, duration: u32) -> u32 {
    (f64::from(percent) / 100.0 * f64::from(duration)).round() as u32
}

/// Builds a coarse outline when no template concepts are supplied.
///
/// Produces intro, exactly two generic main sections splitting the main
/// block 50/50, a conclusion, and a Q&A section only when the talk type
/// allocates time to one.
pub fn create_outline_template(config: &TalkConfig) -> Outline {
    let duration = config.duration_minutes;
    let (intro_pct, main_pct, conclusion_pct, qa_pct) = time_allocation(config.talk_type);

    let main_minutes = banded_minutes(main_pct, duration);
    let half_main = (f64::from(main_minutes) / 2.0).round() as u32;

    let mut sections = vec![Section {
        key_points: vec![
            "Hook/attention grabber".to_string(),
            "Why this matters".to_string(),
            "What you'll learn".to_string(),
        ],
        ..Section::new(
            "section-0",
            "Introduction",
            banded_minutes(intro_pct, duration),
            0,
            SectionType::Intro,
        )
    }];

    for part in 0..2u32 {
        sections.push(Section::new(
            format!("section-{}", part + 1),
            format!("Main Point {}", part + 1),
            half_main,
            part + 1,
            SectionType::Main,
        ));
    }

    sections.push(Section {
        key_points: vec![
            "Summary of key points".to_string(),
            "Call to action".to_string(),
            "Memorable closing".to_string(),
        ],
        ..Section::new(
            "section-3",
            "Conclusion",
            banded_minutes(conclusion_pct, duration),
            3,
            SectionType::Conclusion,
        )
    });

    if qa_pct > 0 {
        sections.push(Section {
            key_points: vec!["Prepared for common questions".to_string()],
            ..Section::new(
                "section-4",
                "Q&A",
                banded_minutes(qa_pct, duration),
                4,
                SectionType::Qa,
            )
        });
    }

    Outline {
        title: config.topic.clone(),
        subtitle: None,
        total_duration_minutes: duration,
        sections,
        learning_objectives: Vec::new(),
        call_to_action: None,
    }
}

/// Recommended slide count for a talk, with a floor of 3.
pub fn estimate_slide_count(duration_minutes: u32, talk_type: TalkType) -> u32 {
    let slides_per_minute = match talk_type {
        TalkType::Keynote => 0.8,
        TalkType::TechnicalDeepDive => 1.0,
        TalkType::Workshop => 0.5,
        TalkType::LightningTalk => 2.0,
        TalkType::PanelDiscussion => 0.3,
    };
    let estimated = (f64::from(duration_minutes) * slides_per_minute).round() as u32;
    estimated.max(3)
}
