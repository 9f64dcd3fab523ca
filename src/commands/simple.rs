//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one guess per line.

use crate::game::{Event, RenderSink, Session, Transition};
use crate::output::{ConsoleSink, print_grid, print_summary};
use crate::sources::{Authenticator, SessionToken, WordSource};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, Write};
use tracing::{info, warn};

/// Login attempts before giving up
const MAX_LOGIN_ATTEMPTS: usize = 3;

/// Login settings for simple mode
pub struct LoginOptions {
    pub authenticator: Box<dyn Authenticator>,
    /// Pre-filled username; prompted for when `None`
    pub username: Option<String>,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure, when login fails repeatedly, or when the
/// word source cannot supply a target word.
pub fn run_simple(source: &mut dyn WordSource, login: Option<LoginOptions>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║            Wordgrid - Simple Mode        ║");
    println!("╚══════════════════════════════════════════╝\n");

    if let Some(login) = login {
        let _token = log_in(&login)?;
    }

    println!("Guess the 5-letter word in 6 tries. Type a word and press Enter.");
    println!("  {} right letter, right spot", "🟩".green());
    println!("  {} right letter, wrong spot", "🟨".yellow());
    println!("  ⬜ not in the word");
    println!("Type 'quit' to exit.\n");

    let mut sink = ConsoleSink;

    loop {
        let mut session = Session::start(source).context("could not start a new game")?;

        while !session.is_over() {
            print_grid(session.grid());
            let input = get_user_input(&format!("Guess {}", session.cursor().row + 1))?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {
                    let letters = input.chars().filter(char::is_ascii_alphabetic).count();
                    if letters > crate::game::MAX_COLS {
                        println!("Only the first 5 letters are used.");
                    }
                    submit_line(&mut session, &input, &mut sink);
                }
            }
        }

        print_grid(session.grid());
        print_summary(&session);

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Type a whole line into the active row and submit it
///
/// A row left incomplete is cleared again so the next line starts fresh.
pub fn submit_line(session: &mut Session, line: &str, sink: &mut impl RenderSink) -> Transition {
    for ch in line.chars() {
        session.dispatch(Event::Character(ch), sink);
    }

    let transition = session.dispatch(Event::Submit, sink);

    if transition == Transition::Incomplete {
        while session.dispatch(Event::Backspace, sink) != Transition::Ignored {}
    }

    transition
}

fn log_in(login: &LoginOptions) -> Result<SessionToken> {
    for attempt in 1..=MAX_LOGIN_ATTEMPTS {
        let username = match &login.username {
            Some(name) => name.clone(),
            None => get_user_input("Username")?,
        };
        let password = rpassword::prompt_password("Password: ").context("reading password")?;

        match login.authenticator.authenticate(&username, &password) {
            Ok(token) => {
                info!(user = %username, "logged in");
                println!("{}\n", format!("Welcome, {username}!").green());
                return Ok(token);
            }
            Err(e) => {
                warn!(attempt, error = %e, "login failed");
                println!("{}", e.to_string().red());
            }
        }
    }

    bail!("login failed after {MAX_LOGIN_ATTEMPTS} attempts")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("input closed");
    }

    Ok(input.trim().to_string())
}
