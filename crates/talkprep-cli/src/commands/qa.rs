use anyhow::Result;

use super::args::{outlined_workflow, TalkArgs};

pub fn run(args: &TalkArgs) -> Result<()> {
    let mut workflow = outlined_workflow(args)?;
    workflow.generate_qa()?;
    println!("{}", workflow.qa_guide()?);
    Ok(())
}
