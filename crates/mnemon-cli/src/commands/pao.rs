//! The `mnemon pao` command.

use anyhow::Result;
use crossterm::style::Stylize;

use mnemon_core::pao::{self, PaoSystem};

pub fn execute(config_file: &str, explain: bool, quiz: bool) -> Result<()> {
    if explain {
        println!("{}", pao::explain());
    }

    let path = crate::config::expand_tilde(config_file);
    let system = match PaoSystem::load(&path) {
        Ok(system) => system,
        Err(e) if e.is_unreadable() => {
            super::soft_error(&format!("Unable to read config file: {}", path.display()));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if quiz {
        run_quiz(&system)?;
    }
    Ok(())
}

fn run_quiz(system: &PaoSystem) -> Result<()> {
    if system.is_empty() {
        super::soft_error("No associations defined in your PAO system");
        return Ok(());
    }

    println!("For each number, name its person, action and object. An empty line quits.");

    let mut asked = 0usize;
    // person, action, object
    let mut correct = [0usize; 3];

    'rounds: for entry in system.shuffled() {
        println!("\n{}", entry.number);
        let attributes = [
            ("Person", &entry.person, 0usize),
            ("Action", &entry.action, 1),
            ("Object", &entry.object, 2),
        ];
        for (label, expected, slot) in attributes {
            let Some(guess) = super::prompt_line(&format!("  {label}? "))? else {
                break 'rounds;
            };
            if expected.trim().eq_ignore_ascii_case(guess.trim()) {
                println!("  {}", "Correct!".green());
                correct[slot] += 1;
            } else {
                println!("  {} {expected}", "Nope:".red());
            }
        }
        asked += 1;
    }

    if asked > 0 {
        print_score(asked, &correct);
    }
    Ok(())
}

fn print_score(asked: usize, correct: &[usize; 3]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Attribute", "Correct", "Asked"]);
    for (label, n) in [
        ("Person", correct[0]),
        ("Action", correct[1]),
        ("Object", correct[2]),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(n), Cell::new(asked)]);
    }

    println!("\n{table}");
}
