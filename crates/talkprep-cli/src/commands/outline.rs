use anyhow::Result;
use talkprep_core::outline::suggest_outline_improvements;

use super::args::{outlined_workflow, TalkArgs};

pub fn run(args: &TalkArgs) -> Result<()> {
    let workflow = outlined_workflow(args)?;
    println!("{}", workflow.outline_markdown()?);

    let suggestions = suggest_outline_improvements(workflow.outline()?);
    if !suggestions.is_empty() {
        println!("\n## Suggestions\n");
        for suggestion in suggestions {
            println!("- {suggestion}");
        }
    }
    Ok(())
}
