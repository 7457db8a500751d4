use anyhow::{anyhow, Result};
use clap::Args;
use std::str::FromStr;
use strum::IntoEnumIterator;
use talkprep_application::TalkPrepWorkflow;
use talkprep_core::config::{Audience, ExpertiseLevel, TalkConfigInput, TalkType, Tone};

/// Talk configuration flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct TalkArgs {
    /// Talk topic (3 to 200 characters)
    pub topic: String,

    /// Talk length in minutes (5 to 120, defaults to 30)
    #[arg(long, short = 'd')]
    pub duration: Option<u32>,

    /// Talk format: keynote, technical_deep_dive, workshop,
    /// lightning_talk or panel_discussion
    #[arg(long, short = 't')]
    pub talk_type: Option<String>,

    /// Target audience: technical, academic, business or general
    #[arg(long, short = 'a')]
    pub audience: Option<String>,

    /// Audience expertise: beginner, intermediate, advanced or mixed
    #[arg(long)]
    pub expertise: Option<String>,

    /// Speaking tone: formal, conversational, inspirational or educational
    #[arg(long)]
    pub tone: Option<String>,

    /// Key concept to cover; repeatable, the first three become
    /// learning objectives
    #[arg(long = "concept", value_name = "CONCEPT")]
    pub concepts: Vec<String>,
}

impl TalkArgs {
    /// Converts the raw flags into an unvalidated configuration input.
    pub fn to_input(&self) -> Result<TalkConfigInput> {
        let mut input = TalkConfigInput::new(self.topic.as_str());
        input.duration_minutes = self.duration;
        input.talk_type = self.talk_type.as_deref().map(parse_enum::<TalkType>).transpose()?;
        input.audience = self.audience.as_deref().map(parse_enum::<Audience>).transpose()?;
        input.expertise_level = self
            .expertise
            .as_deref()
            .map(parse_enum::<ExpertiseLevel>)
            .transpose()?;
        input.tone = self.tone.as_deref().map(parse_enum::<Tone>).transpose()?;
        Ok(input)
    }
}

/// Initializes a workflow from the flags and generates the outline,
/// the artifact every subcommand builds on.
pub fn outlined_workflow(args: &TalkArgs) -> Result<TalkPrepWorkflow> {
    let mut workflow = TalkPrepWorkflow::new();
    workflow.initialize(args.to_input()?)?;
    workflow.generate_outline(&args.concepts)?;
    Ok(workflow)
}

fn parse_enum<T>(value: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + std::fmt::Display,
{
    T::from_str(value).map_err(|_| {
        let expected = T::iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        anyhow!("unknown value '{value}' (expected one of: {expected})")
    })
}
