//! The `mnemon words-summary` command.

use std::io;

use anyhow::Result;

use mnemon_core::summary::{Summary, SummaryStyle};

use crate::config::AppConfig;

pub fn execute(config: &AppConfig, min: u32, max: u32, nouns: bool, org_mode: bool) -> Result<()> {
    let style = if org_mode || config.summary.org_mode {
        SummaryStyle::Org
    } else {
        SummaryStyle::Plain
    };
    let summary = Summary::new(style, nouns || config.summary.nouns_only);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut printer = summary.printer(&mut out)?;
    for number in Summary::numbers(min, max) {
        printer.print_number(&number)?;
    }
    printer.finish()?;
    Ok(())
}
