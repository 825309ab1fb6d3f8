use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, TrackerService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Trainingsplan App";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNow { raw: String },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNow { raw } => write!(f, "invalid --now value: {raw}"),
            ArgsError::EmptyTitle => write!(f, "--title cannot be empty"),
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
    title: String,
    tracker: Arc<TrackerService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    clock: Clock,
    title: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--now <timestamp>] [--title <text>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --now <timestamp>   Pin the clock (RFC 3339 or YYYY-MM-DDTHH:MM:SS local time)");
    eprintln!("  --title <text>      Window and page title (default: {DEFAULT_TITLE})");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRAINER_NOW, TRAINER_TITLE, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed<T> {
    Run(T),
    Help,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed<Self>, ArgsError> {
        let mut clock = match env("TRAINER_NOW") {
            Some(raw) => parse_now(&raw)?,
            None => Clock::default_clock(),
        };
        let mut title = env("TRAINER_TITLE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--now" => {
                    let value = require_value(args, "--now")?;
                    clock = parse_now(&value)?;
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    title = value.to_string();
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { clock, title }))
    }
}

/// Accepts RFC 3339 (the wall-clock part is kept, the offset dropped) or a bare local timestamp.
fn parse_now(raw: &str) -> Result<Clock, ArgsError> {
    let trimmed = raw.trim();
    let at = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ArgsError::InvalidNow {
            raw: raw.to_string(),
        })?;
    Ok(Clock::fixed(at))
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "app=info,services=info,ui=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();
    tracing::info!(title = %args.title, fixed_clock = args.clock.is_fixed(), "starting");

    let app = DesktopApp {
        title: args.title.clone(),
        tracker: Arc::new(TrackerService::with_thread_rng(args.clock)),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
