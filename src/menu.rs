//! Interactive menu
//!
//! A blocking, turn-based text loop modeled as a two-state machine:
//! awaiting-choice and terminated. Valid input either runs an action and
//! self-loops or terminates; invalid input self-loops with a re-prompt.
//! There is no iteration limit. EOF on stdin terminates the loop, so piped
//! and non-interactive invocations exit cleanly.

use std::io::{self, BufRead, Write};

use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::error::{StagehandError, StagehandResult};
use crate::routes;
use crate::ui::Reporter;

const PROMPT: &str = "Enter your choice (1-2)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    DisplayRouters,
    Exit,
    Reprompt,
}

/// Map one line of input onto a menu action.
pub fn interpret(input: &str) -> MenuAction {
    match input.trim() {
        "1" => MenuAction::DisplayRouters,
        "2" => MenuAction::Exit,
        _ => MenuAction::Reprompt,
    }
}

/// Run the menu loop until the exit choice is selected.
///
/// On a terminal the prompt goes through dialoguer; otherwise choices are
/// read line-by-line from stdin.
pub fn run(reporter: &Reporter) -> StagehandResult<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        run_loop(reporter, prompt_terminal)
    } else {
        let mut reader = stdin.lock();
        run_loop(reporter, move || prompt_reader(&mut reader))
    }
}

fn run_loop<F>(reporter: &Reporter, mut read_choice: F) -> StagehandResult<()>
where
    F: FnMut() -> StagehandResult<Option<String>>,
{
    let mut state = MenuState::AwaitingChoice;
    while state == MenuState::AwaitingChoice {
        println!();
        println!("Interactive CLI:");
        println!("1. Display added routers");
        println!("2. Exit");

        state = match read_choice()? {
            Some(choice) => step(&choice, reporter),
            None => {
                println!("Exiting.");
                MenuState::Terminated
            }
        };
    }
    Ok(())
}

fn step(choice: &str, reporter: &Reporter) -> MenuState {
    match interpret(choice) {
        MenuAction::DisplayRouters => {
            routes::display_added_routers(reporter);
            MenuState::AwaitingChoice
        }
        MenuAction::Exit => {
            println!("Exiting.");
            MenuState::Terminated
        }
        MenuAction::Reprompt => {
            println!("Invalid choice. Please try again.");
            MenuState::AwaitingChoice
        }
    }
}

fn prompt_terminal() -> StagehandResult<Option<String>> {
    Input::<String>::new()
        .with_prompt(PROMPT)
        .allow_empty(true)
        .interact_text()
        .map(Some)
        .map_err(|e| StagehandError::Io(io::Error::other(e)))
}

fn prompt_reader<R: BufRead>(reader: &mut R) -> StagehandResult<Option<String>> {
    print!("{}: ", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
