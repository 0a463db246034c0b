//! The `mnemon words` command.

use anyhow::Result;
use crossterm::style::Stylize;

use mnemon_core::major;

pub fn execute(numbers: Vec<String>, nouns: bool, explain: bool, quiz: bool) -> Result<()> {
    if explain {
        println!("{}", major::explain());
    }

    if quiz {
        return run_quiz(nouns);
    }

    for number in &numbers {
        let words: Vec<&str> = major::lookup(number, nouns).iter().map(|e| e.word).collect();
        println!("{number}: {}", words.join(", "));
    }
    Ok(())
}

fn run_quiz(nouns: bool) -> Result<()> {
    let mut rounds: Vec<(String, String, bool)> = Vec::new();

    println!("Name a word that matches each number. An empty line quits.");
    loop {
        let Some(number) = major::quiz_number(nouns) else {
            super::soft_error("No words available for quizzing");
            break;
        };

        println!("\nWhat word matches {number}?");
        let Some(guess) = super::prompt_line("> ")? else {
            break;
        };

        let correct = major::check_guess(&number, &guess, nouns);
        if correct {
            println!("{}", "Correct!".green());
        } else {
            let options: Vec<&str> = major::lookup(&number, nouns).iter().map(|e| e.word).collect();
            println!("{} {}", "Not quite; try one of:".red(), options.join(", "));
        }
        rounds.push((number, guess, correct));
    }

    if !rounds.is_empty() {
        print_session(&rounds);
    }
    Ok(())
}

fn print_session(rounds: &[(String, String, bool)]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Number", "Your answer", "Result"]);
    for (number, guess, correct) in rounds {
        table.add_row(vec![
            Cell::new(number),
            Cell::new(guess),
            Cell::new(if *correct { "correct" } else { "wrong" }),
        ]);
    }

    let score = rounds.iter().filter(|(_, _, correct)| *correct).count();
    println!("\n{table}");
    println!("{score} of {} correct", rounds.len());
}
