//! Rehearsal session lifecycle and timing feedback.
//!
//! `update_section_timing` is a pure update: it returns a new session and
//! never touches sections other than the targeted one.

use super::model::{
    PaceVerdict, RehearsalFeedback, RehearsalSession, SectionTiming, SectionVerdict, TimingStatus,
};
use crate::outline::Outline;
use uuid::Uuid;

/// Variance percent beyond which a section is off pace.
const SECTION_VARIANCE_LIMIT: f64 = 15.0;

/// Overall variance percent under which timing counts as a strength.
const OVERALL_STRENGTH_LIMIT: f64 = 10.0;

/// Share of on-track sections needed for a consistency strength.
const CONSISTENCY_THRESHOLD: f64 = 0.7;

/// Creates a fresh rehearsal session tracking every outline section.
pub fn create_rehearsal_session(outline: &Outline) -> RehearsalSession {
    let section_timings = outline
        .sections
        .iter()
        .map(|s| SectionTiming {
            section_id: s.id.clone(),
            title: s.title.clone(),
            target_seconds: s.duration_minutes * 60,
            actual_seconds: None,
            status: TimingStatus::NotStarted,
        })
        .collect();

    RehearsalSession {
        id: Uuid::new_v4().to_string(),
        started_at: chrono::Utc::now().to_rfc3339(),
        ended_at: None,
        section_timings,
        feedback: RehearsalFeedback::default(),
    }
}

/// Records the actual duration of one section.
///
/// Returns a new session in which only the matching section carries the
/// actual duration and `completed` status. An unknown id leaves every
/// section unchanged.
pub fn update_section_timing(
    session: &RehearsalSession,
    section_id: &str,
    actual_seconds: u32,
) -> RehearsalSession {
    let mut updated = session.clone();
    for timing in updated.section_timings.iter_mut() {
        if timing.section_id == section_id {
            timing.actual_seconds = Some(actual_seconds);
            timing.status = TimingStatus::Completed;
        }
    }
    updated
}

fn section_suggestion(verdict: PaceVerdict, title: &str) -> String {
    match verdict {
        PaceVerdict::TooSlow => format!(
            "'{title}' ran long; trim a key point or tighten the examples"
        ),
        PaceVerdict::TooFast => format!(
            "'{title}' finished early; slow down or add a concrete example"
        ),
        PaceVerdict::OnTrack => format!("'{title}' is paced well; keep it as rehearsed"),
    }
}

/// Derives feedback from recorded timings against the outline's targets.
///
/// The overall comparison sums actuals across every section - not-yet-
/// completed sections contribute zero - against the full target baseline,
/// so overall variance reflects completed work measured against the whole
/// talk.
pub fn generate_rehearsal_feedback(
    session: &RehearsalSession,
    outline: &Outline,
) -> RehearsalFeedback {
    let mut section_verdicts = Vec::new();
    let mut strengths = Vec::new();
    let mut improvement_areas = Vec::new();
    let mut suggestions = Vec::new();

    let completed = session.completed_timings();
    let mut on_track = 0usize;

    for timing in &completed {
        let actual = timing.actual_seconds.unwrap_or(0);
        let target = timing.target_seconds.max(1);
        let variance =
            (f64::from(actual) - f64::from(target)) / f64::from(target) * 100.0;
        let verdict = if variance > SECTION_VARIANCE_LIMIT {
            PaceVerdict::TooSlow
        } else if variance < -SECTION_VARIANCE_LIMIT {
            PaceVerdict::TooFast
        } else {
            on_track += 1;
            PaceVerdict::OnTrack
        };
        section_verdicts.push(SectionVerdict {
            section_id: timing.section_id.clone(),
            verdict,
            variance_percent: variance,
            suggestion: section_suggestion(verdict, &timing.title),
        });
    }

    let overall_target: u32 = session.section_timings.iter().map(|t| t.target_seconds).sum();
    let overall_actual: u32 = session
        .section_timings
        .iter()
        .filter_map(|t| t.actual_seconds)
        .sum();
    let overall_variance = if overall_target > 0 {
        (f64::from(overall_actual) - f64::from(overall_target)) / f64::from(overall_target)
            * 100.0
    } else {
        0.0
    };

    if overall_variance.abs() < OVERALL_STRENGTH_LIMIT {
        strengths.push(format!(
            "Overall timing within {OVERALL_STRENGTH_LIMIT:.0}% of the {} minute target",
            outline.total_duration_minutes
        ));
    }

    if !completed.is_empty() {
        let on_track_share = on_track as f64 / completed.len() as f64;
        if on_track_share >= CONSISTENCY_THRESHOLD {
            strengths.push("Consistent pacing across rehearsed sections".to_string());
        } else {
            improvement_areas.push("Pacing varies widely between sections".to_string());
            suggestions.push(
                "Rehearse the off-pace sections individually with a visible timer".to_string(),
            );
        }
    }

    RehearsalFeedback {
        overall_target_seconds: overall_target,
        overall_actual_seconds: overall_actual,
        overall_variance_percent: overall_variance,
        section_verdicts,
        strengths,
        improvement_areas,
        suggestions,
    }
}
