use anyhow::Result;

use super::args::{outlined_workflow, TalkArgs};

pub fn run(args: &TalkArgs) -> Result<()> {
    let workflow = outlined_workflow(args)?;
    println!("{}", workflow.timing_cues()?);

    println!("## Practice Suggestions\n");
    for suggestion in workflow.practice_suggestions()? {
        println!("- {suggestion}");
    }
    Ok(())
}
