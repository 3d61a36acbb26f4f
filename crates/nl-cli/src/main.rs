//! Terminal front end for the NEUROLINK-7800 adventure.

mod screen;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use nl_core::FileStore;
use nl_engine::{Reply, Session, SessionConfig, Style};

#[derive(Parser)]
#[command(
    name = "neurolink",
    about = "NEUROLINK-7800 - a text adventure for your terminal",
    version
)]
struct Cli {
    /// Where the autosave file lives
    #[arg(short, long, default_value = "neurolink-save.json")]
    save: PathBuf,

    /// RNG seed for reproducible flavor and dialogue
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let (world, script) = nl_world::build();
    let store = FileStore::new(cli.save.clone());
    let mut session = Session::new(
        world,
        script,
        Box::new(store),
        SessionConfig { seed: cli.seed },
    )
    .map_err(|e| e.to_string())?;

    screen::title();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt()?;
        let Some(line) = lines.next() else {
            // EOF: the player closed the stream.
            println!();
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let reply = session.submit(input);
        render(&reply);
        if !session.on_title() {
            status(&session);
        }
        if reply.end_session {
            break;
        }
    }
    Ok(())
}

fn prompt() -> Result<(), String> {
    print!("{} ", ">".bold());
    io::stdout().flush().map_err(|e| e.to_string())
}

fn render(reply: &Reply) {
    if reply.clear_screen {
        print!("\x1b[2J\x1b[H");
    }
    println!();
    for line in reply.lines() {
        match line.style {
            Style::RoomName => println!("{}", line.text.bold()),
            Style::System => println!("{}", line.text.dimmed()),
            Style::UserEcho => println!("{}", line.text.italic().dimmed()),
            Style::Normal => println!("{}", line.text),
        }
    }
    println!();
}

fn status(session: &Session) {
    let location = session
        .world()
        .current_room()
        .map_or("Unknown", |room| room.name.as_str());
    let line = format!("[ {location} | turn {} ]", session.turn());
    println!("{}", line.dimmed());
}
