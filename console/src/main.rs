mod command;
mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::ultimate::{FirstPlayerMode, GameSession, Participant, Player, SearchProgress};
use common::{SessionRng, log, logger};

use command::{Command, HELP, parse_command};
use config::ConsoleConfig;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Human,
    Machine,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Machine => FirstPlayerMode::Machine,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkArg {
    X,
    O,
}

#[derive(Parser)]
#[command(
    name = "uttt_console",
    about = "Play single-sector Ultimate Tic-Tac-Toe against a minimax bot"
)]
struct Args {
    /// Config file (YAML); defaults to uttt_console.yaml next to the binary
    #[arg(long)]
    config: Option<PathBuf>,
    /// Machine search depth
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    depth: Option<u8>,
    #[arg(long, value_enum)]
    first: Option<FirstArg>,
    /// Mark the machine plays
    #[arg(long, value_enum)]
    machine: Option<MarkArg>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn apply_overrides(config: &mut ConsoleConfig, args: &Args) {
    if let Some(depth) = args.depth {
        config.session.search_depth = depth as usize;
    }
    if let Some(first) = args.first {
        config.session.first_player = first.into();
    }
    if let Some(machine) = args.machine {
        config.session.machine_player = match machine {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        };
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.use_log_prefix |= args.use_log_prefix;
    config.verbose |= args.verbose;
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);
    let config_manager = config::get_config_manager(config_path);
    let mut console_config = config_manager.get_config()?;
    apply_overrides(&mut console_config, &args);
    if args.save_config {
        config_manager.set_config(&console_config)?;
    }

    let prefix = console_config.use_log_prefix.then(|| "Console".to_string());
    logger::init_logger(prefix, console_config.verbose);
    log!("Using config file {}", config_manager.content_provider().file_path().display());

    let rng = match console_config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = GameSession::new(console_config.session.clone(), rng)?;

    println!("{}", HELP);
    run(&mut session)?;

    log!("Console closed");
    Ok(())
}

fn run(session: &mut GameSession) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        play_machine_turns(session);
        show(session);

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Err(message) => println!("{}", message),
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Reset) => session.reset(),
            Ok(Command::NewGame(first)) => {
                let first = match first {
                    Some(participant) => participant,
                    None => {
                        let mode = session.settings().first_player;
                        session.resolve_first_player(mode)
                    }
                };
                session.start_new_game(first);
            }
            Ok(Command::Depth(depth)) => match session.set_search_depth(depth) {
                Ok(()) => println!("Search depth is now {}", depth),
                Err(err) => println!("{}", err),
            },
            Ok(Command::Play(index)) => {
                if let Err(rejection) = session.play_human_move(index) {
                    println!("Move rejected: {}", rejection);
                }
            }
        }
    }

    Ok(())
}

fn play_machine_turns(session: &mut GameSession) {
    while !session.status().is_over() && session.current_participant() == Participant::Machine {
        println!("{}", render::render_status(session));
        let mut observer = |progress: &SearchProgress| {
            println!("{}", render::render_progress(progress));
        };
        match session.play_machine_move(&mut observer) {
            Ok(report) => {
                if let Some(decision) = report.decision {
                    println!("{}", render::render_decision(&decision));
                }
            }
            Err(rejection) => {
                log!("Machine could not move: {}", rejection);
                break;
            }
        }
    }
}

fn show(session: &GameSession) {
    println!();
    print!("{}", render::render_board(session));
    println!("{}", render::render_scores(session));
    println!("{}", render::render_status(session));
}
