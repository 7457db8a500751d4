use anyhow::Result;

use super::args::{outlined_workflow, TalkArgs};

pub fn run(args: &TalkArgs) -> Result<()> {
    let mut workflow = outlined_workflow(args)?;
    workflow.generate_script_skeleton()?;
    println!("{}", workflow.script_markdown()?);

    // Opening and closing ideas round out the skeleton.
    println!("## Hook Ideas\n");
    for hook in workflow.hook_suggestions()? {
        println!("- {hook}");
    }
    println!("\n## Conclusion Patterns\n");
    for pattern in workflow.conclusion_patterns()? {
        println!("- {pattern}");
    }
    Ok(())
}
