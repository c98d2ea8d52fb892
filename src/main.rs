mod app;
mod board;
mod color;
mod command;
mod config;
mod consts;
mod game;
mod score;
mod screen;
mod ticker;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Command-line invocation
#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("config") => config = Some(PathBuf::from(parser.value()?)),
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { config, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { config, log_file } => {
                if let Some(path) = log_file {
                    init_logging(&path)?;
                }
                let config = match config {
                    Some(path) => Config::load(&path, false),
                    None => Config::default_path().and_then(|path| Config::load(&path, true)),
                }
                .context("failed to load configuration")?;
                log::info!(
                    "Starting {} {} with a {} board and a {} snake",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION"),
                    config.game.board_size,
                    config.game.snake_color
                );
                let terminal = ratatui::init();
                let r = App::new(&config).run(terminal);
                ratatui::restore();
                log::info!("Exiting");
                r.map_err(Into::into)
            }
            Command::Help => {
                println!("Usage: {} [<options>]", env!("CARGO_PKG_NAME"));
                println!();
                println!("{}", env!("CARGO_PKG_DESCRIPTION"));
                println!();
                println!("Options:");
                println!("  --config <file>     Read configuration from the given file");
                println!("  --log-file <file>   Write log messages to the given file");
                println!("  -h, --help          Display this help message and exit");
                println!("  -V, --version       Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Send log messages to `path`; the terminal itself is in use by the game.
/// The filter is taken from `RUST_LOG`, defaulting to `info`.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to create log file")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")
}

fn main() -> ExitCode {
    let r = Command::from_parser(Parser::from_env())
        .map_err(anyhow::Error::from)
        .and_then(Command::run);
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("{}: {e:#}", env!("CARGO_PKG_NAME"));
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
