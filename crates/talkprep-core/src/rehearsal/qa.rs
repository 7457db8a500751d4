//! Anticipated-question bank construction and the Q&A study guide.

use super::model::{QAPair, QAPreparation, QuestionCategory, QuestionDifficulty};
use crate::config::{Audience, TalkConfig};
use crate::outline::{Outline, SectionType};
use std::collections::HashMap;

/// Key points containing one of these words tend to get challenged.
const ABSOLUTE_CLAIM_WORDS: [&str; 5] = ["best", "only", "always", "never", "wrong"];

/// Key-point count above which a section is flagged as challenging.
const CHALLENGING_POINT_COUNT: usize = 4;

struct QuestionBank {
    pairs: Vec<QAPair>,
}

impl QuestionBank {
    fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn push(
        &mut self,
        question: &str,
        category: QuestionCategory,
        difficulty: QuestionDifficulty,
        suggested_answer: &str,
        follow_ups: &[&str],
        pitfalls: &[&str],
    ) {
        let id = format!("q-{}", self.pairs.len() + 1);
        self.pairs.push(QAPair {
            id,
            question: question.to_string(),
            category,
            difficulty,
            suggested_answer: suggested_answer.to_string(),
            follow_ups: follow_ups.iter().map(|f| f.to_string()).collect(),
            pitfalls: pitfalls.iter().map(|p| p.to_string()).collect(),
        });
    }
}

fn push_generic_questions(bank: &mut QuestionBank) {
    bank.push(
        "Can you summarize the main takeaway in one sentence?",
        QuestionCategory::Clarification,
        QuestionDifficulty::Easy,
        "Have the one-sentence version rehearsed; it's the same sentence as your conclusion.",
        &["What would you tell someone who missed the talk?"],
        &["Rambling through a second, longer version of the talk"],
    );
    bank.push(
        "What are the limitations of this approach?",
        QuestionCategory::Challenge,
        QuestionDifficulty::Medium,
        "Name two real limitations unprompted; credibility comes from knowing the edges.",
        &["When would you recommend against it?"],
        &["Claiming there are no significant limitations"],
    );
    bank.push(
        "How does this apply to a small team or project?",
        QuestionCategory::Application,
        QuestionDifficulty::Easy,
        "Scale the recommendation down explicitly: what to keep, what to drop.",
        &[],
        &["Answering only for large-organization contexts"],
    );
    bank.push(
        "What would you do differently if you were starting today?",
        QuestionCategory::Scope,
        QuestionDifficulty::Medium,
        "Pick one concrete decision you'd change, and say why the original made sense then.",
        &["What's changed in the ecosystem since you started?"],
        &[],
    );
    bank.push(
        "Where can we learn more or try this ourselves?",
        QuestionCategory::Clarification,
        QuestionDifficulty::Easy,
        "Close with the resource slide; name one starting point, not ten.",
        &[],
        &["Listing so many resources none are memorable"],
    );
}

fn push_audience_questions(bank: &mut QuestionBank, audience: Audience) {
    match audience {
        Audience::Technical => {
            bank.push(
                "How does this perform at scale?",
                QuestionCategory::Technical,
                QuestionDifficulty::Hard,
                "Bring one concrete number and its context; extrapolate honestly from there.",
                &["What breaks first under load?"],
                &["Quoting benchmarks without their setup"],
            );
            bank.push(
                "How does this compare to the established alternative?",
                QuestionCategory::Challenge,
                QuestionDifficulty::Medium,
                "Compare on the axis the asker cares about, then name one axis where the alternative wins.",
                &[],
                &["Dismissing the alternative outright"],
            );
        }
        Audience::Academic => {
            bank.push(
                "What related work does this build on?",
                QuestionCategory::Scope,
                QuestionDifficulty::Medium,
                "Cite the two closest lines of work and state the precise gap this fills.",
                &["How does your evaluation differ from theirs?"],
                &[],
            );
            bank.push(
                "How would this generalize beyond your evaluation setting?",
                QuestionCategory::Challenge,
                QuestionDifficulty::Hard,
                "State the assumptions that must hold, and which one you'd test next.",
                &[],
                &["Overclaiming generality"],
            );
        }
        Audience::Business => {
            bank.push(
                "What is the return on this investment?",
                QuestionCategory::Application,
                QuestionDifficulty::Medium,
                "Translate the benefit into time or money saved, with the assumption stated.",
                &["How long until we'd see results?"],
                &["Hand-waving the cost side"],
            );
            bank.push(
                "What are the risks of adopting this now?",
                QuestionCategory::Challenge,
                QuestionDifficulty::Medium,
                "Name the top risk and the mitigation you'd put in place first.",
                &[],
                &["Treating risk questions as attacks"],
            );
        }
        Audience::General => {
            bank.push(
                "Why should someone outside the field care about this?",
                QuestionCategory::Application,
                QuestionDifficulty::Easy,
                "Connect to a daily-life effect within two sentences.",
                &[],
                &["Retreating into technical vocabulary"],
            );
            bank.push(
                "What surprised you most while working on this?",
                QuestionCategory::Clarification,
                QuestionDifficulty::Easy,
                "A genuine, specific surprise lands better than a polished one.",
                &[],
                &[],
            );
        }
    }
}

fn collect_challenging_topics(outline: &Outline) -> Vec<String> {
    let mut topics = Vec::new();
    for section in &outline.sections {
        if section.key_points.len() > CHALLENGING_POINT_COUNT {
            topics.push(section.title.clone());
        }
        for point in &section.key_points {
            let lower = point.to_lowercase();
            if ABSOLUTE_CLAIM_WORDS.iter().any(|w| lower.contains(w)) {
                topics.push(point.clone());
            }
        }
    }
    topics
}

fn redirect_strategies() -> Vec<String> {
    [
        "Acknowledge, answer the useful core, and offer to go deeper afterwards",
        "Bridge from the question asked to the question the room needs answered",
        "Defer gracefully: name who or what could answer it better, and commit to following up",
        "Reframe a hostile premise before answering the question inside it",
        "Park it visibly: write it down and return to it if time allows",
        "Turn a very narrow question back to the audience for a broader take",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Builds the Q&A preparation pack for a talk.
///
/// Question order is fixed: five generic questions, two audience-specific
/// ones, then one generated question per main section with at least one key
/// point. Ids are `q-<n>` in that order.
pub fn build_qa_preparation(config: &TalkConfig, outline: &Outline) -> QAPreparation {
    let mut bank = QuestionBank::new();
    push_generic_questions(&mut bank);
    push_audience_questions(&mut bank, config.audience);

    for section in outline.sections_of_type(SectionType::Main) {
        if let Some(first_point) = section.key_points.first() {
            let question = format!("Can you tell us more about {first_point}?");
            let answer = format!(
                "Prepare a 60-second expansion of '{first_point}' from the '{}' section.",
                section.title
            );
            bank.push(
                &question,
                QuestionCategory::Clarification,
                QuestionDifficulty::Medium,
                &answer,
                &[],
                &[],
            );
        }
    }

    QAPreparation {
        pairs: bank.pairs,
        challenging_topics: collect_challenging_topics(outline),
        response_cache: HashMap::new(),
        redirect_strategies: redirect_strategies(),
    }
}

/// Renders the Q&A preparation as a markdown study guide, grouped by
/// category.
pub fn qa_guide_markdown(prep: &QAPreparation) -> String {
    use strum::IntoEnumIterator;

    let mut lines = vec!["# Q&A Preparation Guide\n".to_string()];

    for category in QuestionCategory::iter() {
        let pairs: Vec<&QAPair> = prep.pairs.iter().filter(|p| p.category == category).collect();
        if pairs.is_empty() {
            continue;
        }
        lines.push(format!("## {category}\n"));
        for pair in pairs {
            lines.push(format!("### {}", pair.question));
            lines.push(format!("**Difficulty:** {}", pair.difficulty));
            lines.push(format!("**Suggested approach:** {}", pair.suggested_answer));
            if !pair.pitfalls.is_empty() {
                lines.push(format!("**Pitfalls:** {}", pair.pitfalls.join("; ")));
            }
            if !pair.follow_ups.is_empty() {
                lines.push(format!("**Likely follow-ups:** {}", pair.follow_ups.join("; ")));
            }
            lines.push(String::new());
        }
    }

    if !prep.challenging_topics.is_empty() {
        lines.push("## Challenging Topics\n".to_string());
        for topic in &prep.challenging_topics {
            lines.push(format!("- {topic}"));
        }
        lines.push(String::new());
    }

    lines.push("## Redirect Strategies\n".to_string());
    for strategy in &prep.redirect_strategies {
        lines.push(format!("- {strategy}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TalkConfigInput, TalkType};
    use crate::outline::build_outline_from_template;
    use crate::template::TalkTemplate;

    fn prep_for(audience: Audience) -> QAPreparation {
        let mut input = TalkConfigInput::new("Q&A Topic");
        input.audience = Some(audience);
        let config = input.validate().unwrap();
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        let outline = build_outline_from_template(&template, &config.topic, 30);
        build_qa_preparation(&config, &outline)
    }

    #[test]
    fn question_pool_is_generic_plus_audience_plus_sections() {
        let prep = prep_for(Audience::Technical);
        // 5 generic + 2 audience + 3 main sections with key points.
        assert_eq!(prep.pairs.len(), 10);
        for (index, pair) in prep.pairs.iter().enumerate() {
            assert_eq!(pair.id, format!("q-{}", index + 1));
        }
        assert!(prep.pairs[7]
            .question
            .starts_with("Can you tell us more about"));
    }

    #[test]
    fn response_cache_starts_empty() {
        let prep = prep_for(Audience::General);
        assert!(prep.response_cache.is_empty());
    }

    #[test]
    fn redirect_strategies_are_fixed_six() {
        assert_eq!(prep_for(Audience::Business).redirect_strategies.len(), 6);
        assert_eq!(
            prep_for(Audience::Academic).redirect_strategies,
            prep_for(Audience::Technical).redirect_strategies
        );
    }

    #[test]
    fn absolute_claims_and_dense_sections_are_challenging() {
        let mut input = TalkConfigInput::new("Claims");
        input.audience = Some(Audience::General);
        let config = input.validate().unwrap();
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        let mut outline = build_outline_from_template(&template, "Claims", 30);
        outline.sections[1].key_points = vec![
            "This is ALWAYS the right choice".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ];
        let prep = build_qa_preparation(&config, &outline);
        assert!(prep
            .challenging_topics
            .contains(&outline.sections[1].title));
        assert!(prep
            .challenging_topics
            .iter()
            .any(|t| t.contains("ALWAYS")));
    }

    #[test]
    fn guide_groups_by_category_and_lists_strategies() {
        let guide = qa_guide_markdown(&prep_for(Audience::Technical));
        assert!(guide.starts_with("# Q&A Preparation Guide"));
        assert!(guide.contains("## clarification"));
        assert!(guide.contains("## technical"));
        assert!(guide.contains("## Redirect Strategies"));
        assert!(guide.contains("**Difficulty:** hard"));
    }
}
