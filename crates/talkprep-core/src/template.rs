//! Static talk templates and visual themes.
//!
//! Every closed enumeration (talk type, audience) is mapped through an
//! exhaustive match, so adding a variant forces the tables to be extended.
//! Section percentages within each template sum to exactly 100, confirmed
//! by test.

use crate::config::{Audience, TalkType};
use crate::outline::SectionType;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Visual theme category used to pick a deck theme per audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThemeCategory {
    Tech,
    Academic,
    Business,
    Minimal,
    Creative,
}

impl ThemeCategory {
    /// Maps an audience to its recommended theme category.
    pub fn for_audience(audience: Audience) -> Self {
        match audience {
            Audience::Technical => ThemeCategory::Tech,
            Audience::Academic => ThemeCategory::Academic,
            Audience::Business => ThemeCategory::Business,
            Audience::General => ThemeCategory::Minimal,
        }
    }
}

/// A slide-deck visual theme: two colors and a font label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub category: ThemeCategory,
    /// Primary color as a hex string ("#1e40af").
    pub primary_color: String,
    /// Secondary/accent color as a hex string.
    pub secondary_color: String,
    /// Font family label for the styled HTML export.
    pub font: String,
}

impl Theme {
    fn new(
        name: &str,
        category: ThemeCategory,
        primary: &str,
        secondary: &str,
        font: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            font: font.to_string(),
        }
    }

    /// The full theme catalog, one entry per category.
    pub fn catalog() -> Vec<Theme> {
        vec![
            Theme::new("Terminal", ThemeCategory::Tech, "#1e40af", "#3b82f6", "JetBrains Mono"),
            Theme::new("Lecture Hall", ThemeCategory::Academic, "#7c2d12", "#ea580c", "Georgia"),
            Theme::new("Boardroom", ThemeCategory::Business, "#1e293b", "#0ea5e9", "Inter"),
            Theme::new("Whiteboard", ThemeCategory::Minimal, "#111827", "#6b7280", "Helvetica"),
            Theme::new("Gallery", ThemeCategory::Creative, "#581c87", "#d946ef", "Futura"),
        ]
    }

    /// Resolves a category against the catalog.
    pub fn for_category(category: ThemeCategory) -> Theme {
        Theme::catalog()
            .into_iter()
            .find(|t| t.category == category)
            .unwrap_or_else(|| Theme::new("Whiteboard", ThemeCategory::Minimal, "#111827", "#6b7280", "Helvetica"))
    }

    /// Recommended theme for an audience.
    pub fn for_audience(audience: Audience) -> Theme {
        Theme::for_category(ThemeCategory::for_audience(audience))
    }
}

/// One planned section inside a talk template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub title: String,
    pub section_type: SectionType,
    /// Share of the total duration, in whole percent.
    pub percent: u32,
    /// 2-3 prompt strings, used verbatim as initial key points.
    pub prompts: Vec<String>,
    /// How to deliver this section, copied to the outline section's notes.
    pub delivery_note: String,
}

impl SectionSpec {
    fn new(
        title: &str,
        section_type: SectionType,
        percent: u32,
        prompts: &[&str],
        delivery_note: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            section_type,
            percent,
            prompts: prompts.iter().map(|p| p.to_string()).collect(),
            delivery_note: delivery_note.to_string(),
        }
    }
}

/// A complete talk template for one talk type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkTemplate {
    pub talk_type: TalkType,
    pub default_duration_minutes: u32,
    pub sections: Vec<SectionSpec>,
    pub tips: Vec<String>,
    pub opening_hooks: Vec<String>,
    pub theme: Theme,
}

impl TalkTemplate {
    /// Returns the template for the given talk type.
    ///
    /// Total over the closed enum: every talk type has a template.
    pub fn for_talk_type(talk_type: TalkType) -> TalkTemplate {
        match talk_type {
            TalkType::Keynote => keynote(),
            TalkType::TechnicalDeepDive => technical_deep_dive(),
            TalkType::Workshop => workshop(),
            TalkType::LightningTalk => lightning_talk(),
            TalkType::PanelDiscussion => panel_discussion(),
        }
    }

    /// Sum of section percentages; 100 for every built-in template.
    pub fn total_percent(&self) -> u32 {
        self.sections.iter().map(|s| s.percent).sum()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn keynote() -> TalkTemplate {
    TalkTemplate {
        talk_type: TalkType::Keynote,
        default_duration_minutes: 45,
        sections: vec![
            SectionSpec::new(
                "Opening Story",
                SectionType::Intro,
                15,
                &[
                    "A personal story that frames the theme",
                    "Why this moment matters for the field",
                ],
                "Start slow, make eye contact, let the story land before the first slide.",
            ),
            SectionSpec::new(
                "The Big Idea",
                SectionType::Main,
                25,
                &[
                    "State the central thesis in one sentence",
                    "The shift in thinking you are proposing",
                    "What changes if the audience accepts it",
                ],
                "One idea, repeated from three angles. Resist adding detail here.",
            ),
            SectionSpec::new(
                "Evidence and Examples",
                SectionType::Main,
                30,
                &[
                    "Three concrete cases that support the thesis",
                    "A counterexample and why it strengthens the point",
                ],
                "Vary the rhythm: a number, a story, a demo moment.",
            ),
            SectionSpec::new(
                "Call to the Future",
                SectionType::Conclusion,
                10,
                &[
                    "What the audience should do on Monday",
                    "The long-term vision in one image",
                ],
                "End on the vision, not on logistics.",
            ),
            SectionSpec::new(
                "Audience Q&A",
                SectionType::Qa,
                20,
                &[
                    "Invite challenges to the thesis",
                    "Prepared answers for the three hardest questions",
                ],
                "Repeat each question before answering so the room hears it.",
            ),
        ],
        tips: strings(&[
            "Keynotes are remembered for one idea; cut anything that competes with it.",
            "Rehearse the opening story until it sounds unrehearsed.",
            "Plan a strong closing line and stop talking after it.",
        ]),
        opening_hooks: strings(&[
            "Ten years ago, I was certain about something that turned out to be completely wrong.",
            "There is a question everyone in this room is quietly asking.",
            "Let me show you a picture of what our field looks like from the outside.",
        ]),
        theme: Theme::for_category(ThemeCategory::Creative),
    }
}

fn technical_deep_dive() -> TalkTemplate {
    TalkTemplate {
        talk_type: TalkType::TechnicalDeepDive,
        default_duration_minutes: 30,
        sections: vec![
            SectionSpec::new(
                "Introduction",
                SectionType::Intro,
                10,
                &[
                    "Hook: the problem in one sentence",
                    "Why this matters to practitioners",
                    "What you'll learn in the next half hour",
                ],
                "Establish credibility fast: one line on why you hit this problem.",
            ),
            SectionSpec::new(
                "Problem and Context",
                SectionType::Main,
                15,
                &[
                    "The concrete failure or limitation that motivated the work",
                    "Constraints that rule out the obvious solutions",
                ],
                "Ground every claim in a number or an incident.",
            ),
            SectionSpec::new(
                "Core Concepts",
                SectionType::Main,
                25,
                &[
                    "The two or three ideas everything else builds on",
                    "A diagram of the architecture",
                    "Key trade-offs and why you chose this path",
                ],
                "Define terms before using them; assume smart but unfamiliar.",
            ),
            SectionSpec::new(
                "Implementation Walkthrough",
                SectionType::Main,
                20,
                &[
                    "Code or configuration the audience can take home",
                    "A pitfall you hit and how to avoid it",
                ],
                "Show real code, not pseudo-code. Keep each snippet under ten lines.",
            ),
            SectionSpec::new(
                "Lessons and Takeaways",
                SectionType::Conclusion,
                10,
                &[
                    "Three things to remember",
                    "Where to start if trying this tomorrow",
                ],
                "Summarize as actions, not topics.",
            ),
            SectionSpec::new(
                "Q&A",
                SectionType::Qa,
                20,
                &[
                    "Prepared for edge-case and scaling questions",
                    "Pointers to docs and further reading",
                ],
                "Have backup slides ready for the questions you hope nobody asks.",
            ),
        ],
        tips: strings(&[
            "Live demos fail; record a backup or use annotated screenshots.",
            "Every code slide needs a one-line takeaway in the header.",
            "Budget Q&A generously: deep dives attract deep questions.",
        ]),
        opening_hooks: strings(&[
            "At 2 a.m. on a Tuesday, our p99 latency tripled and nobody knew why.",
            "Everything you've read about this topic describes the happy path. This talk is about the other path.",
            "We rewrote this system three times. Here's what the third version taught us.",
        ]),
        theme: Theme::for_category(ThemeCategory::Tech),
    }
}

fn workshop() -> TalkTemplate {
    TalkTemplate {
        talk_type: TalkType::Workshop,
        default_duration_minutes: 90,
        sections: vec![
            SectionSpec::new(
                "Welcome and Setup",
                SectionType::Intro,
                10,
                &[
                    "Learning goals for the session",
                    "Environment check: everyone can run the starter",
                ],
                "Do the setup check first; a broken laptop found late derails the room.",
            ),
            SectionSpec::new(
                "Concept Walkthrough",
                SectionType::Main,
                20,
                &[
                    "The minimum theory needed for the exercises",
                    "A worked example done live, step by step",
                ],
                "Teach only what the next exercise needs; theory on demand.",
            ),
            SectionSpec::new(
                "Guided Exercise",
                SectionType::Main,
                30,
                &[
                    "First exercise with checkpoints every few minutes",
                    "Common errors and their fixes on a visible slide",
                ],
                "Circulate constantly. The quiet corners are the stuck ones.",
            ),
            SectionSpec::new(
                "Independent Practice",
                SectionType::Main,
                20,
                &[
                    "A stretch exercise with three difficulty tiers",
                    "Pairing suggestion for those who finish early",
                ],
                "Let people struggle a little before helping; announce the solution time up front.",
            ),
            SectionSpec::new(
                "Recap and Next Steps",
                SectionType::Conclusion,
                10,
                &[
                    "What was built, mapped back to the learning goals",
                    "Resources for continuing after the workshop",
                ],
                "Have attendees name one thing they'll apply this week.",
            ),
            SectionSpec::new(
                "Open Questions",
                SectionType::Qa,
                10,
                &[
                    "Troubleshooting leftovers",
                    "Where this fits into attendees' real projects",
                ],
                "Offer to stay after for individual environment issues.",
            ),
        ],
        tips: strings(&[
            "Test the full exercise flow on a clean machine the night before.",
            "Print or link a cheat sheet; screens at the back are hard to read.",
            "Plan for the fastest third to finish in half the allotted time.",
        ]),
        opening_hooks: strings(&[
            "By the end of this session, everyone in this room will have built one of these from scratch.",
            "Raise your hand if you've tried this before and given up. Good - this is for you.",
            "The best way to learn this is to break it five times in a safe place. That's today.",
        ]),
        theme: Theme::for_category(ThemeCategory::Tech),
    }
}

fn lightning_talk() -> TalkTemplate {
    TalkTemplate {
        talk_type: TalkType::LightningTalk,
        default_duration_minutes: 5,
        sections: vec![
            SectionSpec::new(
                "Hook",
                SectionType::Intro,
                10,
                &[
                    "One sentence that earns the next four minutes",
                    "The single question this talk answers",
                ],
                "No agenda slide, no bio. Straight into the problem.",
            ),
            SectionSpec::new(
                "The One Idea",
                SectionType::Main,
                45,
                &[
                    "The core insight, stated twice in different words",
                    "The smallest example that demonstrates it",
                ],
                "Lightning talks fail by covering two things. Cover one.",
            ),
            SectionSpec::new(
                "Proof in Practice",
                SectionType::Main,
                30,
                &[
                    "One real result: a number, a before/after",
                    "The caveat that keeps it honest",
                ],
                "One slide, one claim, one piece of evidence.",
            ),
            SectionSpec::new(
                "Takeaway",
                SectionType::Conclusion,
                15,
                &[
                    "The action the audience takes tonight",
                    "Where to find you and the links",
                ],
                "Land the last line before the timer does.",
            ),
        ],
        tips: strings(&[
            "Rehearse with a hard timer; there is no buffer in five minutes.",
            "Auto-advance slides remove the temptation to linger.",
            "If a slide needs explaining, it's two slides.",
        ]),
        opening_hooks: strings(&[
            "I have five minutes to save you forty hours. Ready?",
            "One config line took our build from 20 minutes to 4. This is that line.",
            "Here is the mistake I see in every codebase I review.",
        ]),
        theme: Theme::for_category(ThemeCategory::Minimal),
    }
}

fn panel_discussion() -> TalkTemplate {
    TalkTemplate {
        talk_type: TalkType::PanelDiscussion,
        default_duration_minutes: 60,
        sections: vec![
            SectionSpec::new(
                "Framing and Introductions",
                SectionType::Intro,
                10,
                &[
                    "Why this topic, why now, why these panelists",
                    "One-line introductions with a stated position each",
                ],
                "Ask each panelist for a deliberately sharp opening position.",
            ),
            SectionSpec::new(
                "Opening Positions",
                SectionType::Main,
                25,
                &[
                    "Each panelist's strongest claim on the topic",
                    "A first point of disagreement to surface early",
                ],
                "Interrupt politely but early; long monologues set the wrong tone.",
            ),
            SectionSpec::new(
                "Moderated Discussion",
                SectionType::Main,
                25,
                &[
                    "Prepared questions that force trade-off answers",
                    "Follow-ups that pit positions against each other",
                ],
                "Direct questions to a named panelist; open questions get silence.",
            ),
            SectionSpec::new(
                "Closing Rounds",
                SectionType::Conclusion,
                10,
                &[
                    "One prediction from each panelist",
                    "The one thing they changed their mind about",
                ],
                "Keep closings to thirty seconds each; cut off kindly.",
            ),
            SectionSpec::new(
                "Audience Questions",
                SectionType::Qa,
                30,
                &[
                    "Pre-collected questions as a warm-up",
                    "A plan for the question that's really a comment",
                ],
                "Have two seeded questions ready in case the room is cold.",
            ),
        ],
        tips: strings(&[
            "Brief panelists separately; surprises on stage beat rehearsed consensus.",
            "A panel without disagreement is a slow keynote with extra chairs.",
            "Track speaking time; balance it visibly.",
        ]),
        opening_hooks: strings(&[
            "Our panelists disagree about tonight's topic more than they know. Let's find out where.",
            "We collected your questions in advance; the most-upvoted one is brutal, and we're starting with it.",
            "Each panelist gets one sentence to tell you why the others are wrong.",
        ]),
        theme: Theme::for_category(ThemeCategory::Business),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_template_sums_to_100_percent() {
        for talk_type in TalkType::iter() {
            let template = TalkTemplate::for_talk_type(talk_type);
            assert_eq!(
                template.total_percent(),
                100,
                "percent sum for {talk_type}"
            );
        }
    }

    #[test]
    fn technical_deep_dive_has_six_sections() {
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        assert_eq!(template.sections.len(), 6);
    }

    #[test]
    fn every_section_has_two_or_three_prompts() {
        for talk_type in TalkType::iter() {
            for spec in TalkTemplate::for_talk_type(talk_type).sections {
                assert!(
                    (2..=3).contains(&spec.prompts.len()),
                    "{talk_type} / {}",
                    spec.title
                );
            }
        }
    }

    #[test]
    fn lightning_talk_has_no_qa_section() {
        let template = TalkTemplate::for_talk_type(TalkType::LightningTalk);
        assert!(
            template
                .sections
                .iter()
                .all(|s| s.section_type != SectionType::Qa)
        );
    }

    #[test]
    fn theme_catalog_covers_every_category() {
        let catalog = Theme::catalog();
        assert_eq!(catalog.len(), 5);
        for category in ThemeCategory::iter() {
            assert!(catalog.iter().any(|t| t.category == category));
        }
    }

    #[test]
    fn audience_theme_map_is_fixed() {
        assert_eq!(ThemeCategory::for_audience(Audience::Technical), ThemeCategory::Tech);
        assert_eq!(ThemeCategory::for_audience(Audience::Academic), ThemeCategory::Academic);
        assert_eq!(ThemeCategory::for_audience(Audience::Business), ThemeCategory::Business);
        assert_eq!(ThemeCategory::for_audience(Audience::General), ThemeCategory::Minimal);
    }
}
