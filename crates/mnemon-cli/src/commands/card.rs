//! The `mnemon card` command.

use anyhow::Result;

use mnemon_core::cards;

pub fn execute() -> Result<()> {
    println!("{}", cards::random_card());
    Ok(())
}
