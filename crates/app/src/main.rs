use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, QuizService};
use slam_core::model::{ChampionTable, Tournament, Year};
use storage::Storage;
use tracing::Level;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--log-level <level>]");
    eprintln!("  cargo run -p app -- data [--log-level <level>] [--year <year>]");
    eprintln!();
    eprintln!("Levels: trace, debug, info, warn, error (default info)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SLAM_QUIZ_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Data,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "data" => Some(Self::Data),
            _ => None,
        }
    }
}

struct Args {
    log_level: Level,
    /// Only meaningful for `data`: print one year's champions.
    year: Option<String>,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut log_level = match std::env::var("SLAM_QUIZ_LOG") {
            Ok(raw) => parse_level(raw)?,
            Err(_) => Level::INFO,
        };
        let mut year = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log-level" => {
                    log_level = parse_level(require_value(args, "--log-level")?)?;
                }
                "--year" if cmd == Command::Data => {
                    year = Some(require_value(args, "--year")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { log_level, year })
    }
}

fn parse_level(raw: String) -> Result<Level, ArgsError> {
    Level::from_str(raw.trim()).map_err(|_| ArgsError::InvalidLogLevel { raw })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    dioxus::logger::init(parsed.log_level)?;

    let storage = Storage::embedded();

    match cmd {
        Command::Ui => {
            let quiz_service = Arc::new(QuizService::new(
                Clock::system(),
                Arc::clone(&storage.champions),
            ));
            // Fail before opening a window if the bundled table is broken.
            quiz_service.champion_table()?;

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_service });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Tennis Trivia")
                    .with_always_on_top(false),
            );

            tracing::info!("launching desktop ui");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Data => {
            let table = load_table(&storage)?;
            match parsed.year {
                Some(raw) => print_year(&table, &raw)?,
                None => print_tally(&table),
            }
            Ok(())
        }
    }
}

fn load_table(storage: &Storage) -> Result<ChampionTable, Box<dyn std::error::Error>> {
    let records = storage.champions.load_champions()?;
    let table = ChampionTable::from_records(records).map_err(slam_core::Error::from)?;
    tracing::info!(records = table.len(), "champion table is complete");
    Ok(table)
}

fn print_year(table: &ChampionTable, raw: &str) -> Result<(), slam_core::Error> {
    let year = raw.parse::<Year>()?;
    println!("{year}");
    for tournament in Tournament::ALL {
        println!("  {:<16} {}", tournament.display_name(), table.champion(year, tournament));
    }
    Ok(())
}

fn print_tally(table: &ChampionTable) {
    println!(
        "{} champions across {} titles ({}-{})",
        table.candidates().len(),
        table.len(),
        Year::FIRST,
        Year::LAST
    );
    for (champion, titles) in table.title_counts() {
        println!("{titles:>3}  {champion}");
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
