//! The `mnemon missing` command.

use anyhow::Result;
use crossterm::style::Stylize;

use mnemon_core::missing::{self, MissingRound};
use mnemon_speech::{CommandSpeaker, NullSpeaker, Speaker};

use crate::config::AppConfig;

pub fn execute(
    config: &AppConfig,
    choices: Vec<String>,
    bible: bool,
    say: bool,
    explain: bool,
) -> Result<()> {
    if explain {
        println!("{}", missing::explain());
    }

    let round = if bible {
        MissingRound::deal_bible()?
    } else if !choices.is_empty() {
        match MissingRound::deal(&choices) {
            Ok(round) => round,
            Err(e) => {
                super::soft_error(&e.to_string());
                return Ok(());
            }
        }
    } else {
        super::soft_error("Pass a series of options for quizzing or preset options");
        return Ok(());
    };

    let speaker: Box<dyn Speaker> = if say {
        Box::new(CommandSpeaker::new(
            config.speech.command.clone(),
            config.speech.args.clone(),
        ))
    } else {
        Box::new(NullSpeaker)
    };

    run_round(&round, speaker.as_ref())
}

fn run_round(round: &MissingRound, speaker: &dyn Speaker) -> Result<()> {
    println!("Which one is missing?");
    for item in round.shown() {
        println!("  {item}");
        if let Err(e) = speaker.say(item) {
            tracing::warn!("speech failed: {e:#}");
        }
    }

    match super::prompt_line("> ")? {
        Some(guess) if round.check(&guess) => println!("{}", "Correct!".green()),
        Some(_) | None => println!("{} {}", "Sorry, it was:".red(), round.hidden()),
    }
    Ok(())
}
