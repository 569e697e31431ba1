mod app;
mod command;
mod config;
mod consts;
mod game;
mod hud;
mod logging;
mod render;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: torsnake [OPTIONS]

Play snake on a board with no walls

Options:
  -c, --config <FILE>   Read configuration from the given file
      --log-file <FILE> Write diagnostic logs to the given file
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit

Keys: arrows / wasd / hjkl to steer, p or Space to pause & resume, r to
restart after a game ends, q or Ctrl-C to quit.
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    /// Configuration file to read instead of the default
    config: Option<PathBuf>,

    log_file: Option<PathBuf>,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run(args)) => run(&args),
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("torsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("torsnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Arguments) -> ExitCode {
    setup(args).map_or_else(
        |e| {
            eprintln!("torsnake: {e:?}");
            ExitCode::from(2)
        },
        play,
    )
}

fn play(config: Config) -> ExitCode {
    let terminal = ratatui::init();
    let r = App::new(config.game, rand::rng()).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Start logging (if requested) and load the configuration file
fn setup(args: &Arguments) -> anyhow::Result<Config> {
    if let Some(ref path) = args.log_file {
        logging::init(path)?;
    }
    let config = if let Some(ref path) = args.config {
        Config::load(path, false)
    } else {
        Config::default_path().and_then(|p| Config::load(&p, true))
    }
    .context("failed to load configuration")?;
    tracing::info!(
        tile_count = config.game.grid.tile_count(),
        cell_size = config.game.grid.cell_size(),
        move_interval = config.game.move_interval,
        frame_rate = config.game.frame_rate,
        "Loaded configuration"
    );
    Ok(config)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("torsnake: {e}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).expect("parsing should succeed"),
            Cli::Run(Arguments::default())
        );
    }

    #[rstest]
    #[case(&["-c", "my.toml"])]
    #[case(&["--config", "my.toml"])]
    #[case(&["--config=my.toml"])]
    fn config_path(#[case] args: &[&str]) {
        assert_eq!(
            parse(args).expect("parsing should succeed"),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("my.toml")),
                log_file: None,
            })
        );
    }

    #[test]
    fn log_file() {
        assert_eq!(
            parse(&["--log-file", "snake.log", "-c", "c.toml"]).expect("parsing should succeed"),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("c.toml")),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Cli::Help)]
    #[case(&["--help"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--version"], Cli::Version)]
    #[case(&["-c", "x.toml", "--help"], Cli::Help)]
    fn info_flags(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).expect("parsing should succeed"), cli);
    }

    #[rstest]
    #[case(&["--frobnicate"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmpdir = tempfile::tempdir().expect("should be able to create a tempdir");
        let args = Arguments {
            config: Some(tmpdir.path().join("missing.toml")),
            log_file: None,
        };
        let e = setup(&args).expect_err("missing config should be an error");
        assert_eq!(e.to_string(), "failed to load configuration");
    }

    #[rstest]
    #[case(Ok(()), ExitCode::SUCCESS)]
    #[case(Err(io::Error::from(ErrorKind::BrokenPipe)), ExitCode::SUCCESS)]
    #[case(Err(io::Error::from(ErrorKind::PermissionDenied)), ExitCode::from(2))]
    fn exit_codes(#[case] r: io::Result<()>, #[case] code: ExitCode) {
        assert_eq!(format!("{:?}", io_exit(r)), format!("{code:?}"));
    }
}
