//! Wordgrid - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordgrid::{
    commands::{LoginOptions, check_guess, run_simple},
    config::AppConfig,
    core::Word,
    logging::{LogFormat, LogTarget, LoggingConfig},
    output::print_check_result,
    sources::{
        AccountAuthenticator, Authenticator, EmbeddedWords, FileWords, FixedWord,
        OpenAuthenticator, WordSource,
    },
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/wordgrid/config.toml)
    #[arg(short, long, global = true, env = "WORDGRID_CONFIG")]
    config: Option<PathBuf>,

    /// Word list file to draw target words from (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Play against a fixed target word
    #[arg(long, global = true)]
    word: Option<Word>,

    /// Seed for picking target words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log in as this user before playing (simple mode)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Log output format: text, json or pretty (overrides the config file)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a single guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    init_logging(&cli, &config, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&cli, &config),
        Commands::Simple => run_simple_command(&cli, &config),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

/// The TUI owns the terminal, so it only ever logs to a file
fn init_logging(cli: &Cli, config: &AppConfig, interactive: bool) -> Result<()> {
    let target = match (&config.logging.file, interactive) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Off,
        (None, false) => LogTarget::Stderr,
    };

    let format = cli.log_format.unwrap_or(config.logging.format);
    LoggingConfig::new(format, config.logging.level.clone(), target).init()
}

/// Pick the word source: fixed word, then word list file, then built-in list
fn build_word_source(cli: &Cli, config: &AppConfig) -> Result<Box<dyn WordSource>> {
    if let Some(word) = cli.word {
        return Ok(Box::new(FixedWord::new(word)));
    }

    let seed = cli.seed.or(config.words.seed);

    let source: Box<dyn WordSource> = match cli.word_list.as_ref().or(config.words.list.as_ref())
    {
        Some(path) => Box::new(FileWords::new(path, seed)),
        None => Box::new(EmbeddedWords::new(seed)),
    };
    Ok(source)
}

fn build_authenticator(config: &AppConfig, force: bool) -> Option<Box<dyn Authenticator>> {
    if !config.auth.required && !force {
        return None;
    }

    let authenticator: Box<dyn Authenticator> = if config.auth.accounts.is_empty() {
        Box::new(OpenAuthenticator)
    } else {
        Box::new(AccountAuthenticator::new(config.auth.accounts.clone()))
    };
    Some(authenticator)
}

fn run_play_command(cli: &Cli, config: &AppConfig) -> Result<()> {
    use wordgrid::interactive::{App, run_tui};

    let source = build_word_source(cli, config)?;
    let authenticator = build_authenticator(config, false);

    let app = App::new(source, authenticator);
    run_tui(app)
}

fn run_simple_command(cli: &Cli, config: &AppConfig) -> Result<()> {
    let mut source = build_word_source(cli, config)?;
    let login = build_authenticator(config, cli.user.is_some()).map(|authenticator| {
        LoginOptions {
            authenticator,
            username: cli.user.clone(),
        }
    });

    run_simple(source.as_mut(), login)
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target)?;
    print_check_result(&result);
    Ok(())
}
