//! Treasure Hunter - Entry Point
//!
//! Sets up logging and settings, asks for a name and difficulty, and runs
//! the menu loop until the hunt ends.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use treasure_hunter::{Action, Difficulty, GameConfig, ParseError, Session, ShopMode};

const CONFIG_ENV: &str = "TREASURE_HUNTER_CONFIG";

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Treasure Hunter v{}", env!("CARGO_PKG_VERSION"));

    let config_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    let config = GameConfig::load_or_default(config_path.as_deref());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", "Welcome to TREASURE HUNTER!".yellow().bold());
    println!("Going hunting for the big treasure, eh?");
    let name = prompt(&mut input, "What's ye name, Hunter? ")?.to_lowercase();
    let difficulty = ask_difficulty(&mut input)?;

    let mut session = Session::new(&name, difficulty, &config);
    let result = run_menu(&mut input, &mut session);

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
    }
    log::info!("Treasure Hunter shut down cleanly");
    result
}

/// Log to a file so the menu stays readable
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("treasure_hunter.log")
    {
        Ok(file) => env_logger::Builder::from_env(env)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init(),
        Err(_) => env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        )
        .init(),
    }
}

fn prompt(input: &mut impl BufRead, question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        anyhow::bail!("input closed");
    }
    Ok(line.trim().to_string())
}

fn ask_difficulty(input: &mut impl BufRead) -> Result<Difficulty> {
    loop {
        let answer = prompt(input, &format!("{}", "Hard/Normal/Easy Mode? (h/n/e): ".red()))?;
        match answer.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

/// Main menu loop
fn run_menu(input: &mut impl BufRead, session: &mut Session) -> Result<()> {
    let mut news = session.greeting();

    while !session.state().is_over() {
        println!();
        println!("{}", news);
        println!("***");
        println!("{}", session.hunter().to_string().green());
        println!("{}", session.current_town().to_string().cyan());
        for line in Action::MENU {
            println!("{}", line);
        }

        let choice = prompt(input, "\nWhat's your next move? ")?;
        news = match choice.parse::<Action>() {
            Ok(action) => session.act(action),
            // A bare "b" or "s" shows the price list
            Err(ParseError::MissingItem(key)) => match key.parse::<ShopMode>() {
                Ok(mode) => format!(
                    "{}\nPick one with '{} <item>'.",
                    session.current_town().shop().price_list(mode),
                    key
                ),
                Err(e) => format!("{} {}", "Yikes!".red().bold(), e),
            },
            Err(e) => format!("{} {}", "Yikes!".red().bold(), e),
        };
    }

    println!("{}", news);
    if let Some(farewell) = session.farewell() {
        println!("{}", farewell.yellow().bold());
    }
    Ok(())
}
