use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use capsure_lib::config::ApiKeyStatus;
use capsure_lib::models::{Locale, ThemeMode};
use capsure_lib::pipeline::features::FeatureExtractor;
use capsure_lib::pipeline::matching::SelectionPolicy;
use capsure_lib::{CoreState, ScanMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Identify a pill from a photo")]
struct Cli {
    /// SQLite store for cache, history and preferences (default: ~/CapSure/capsure.db)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Identify the pill in a photo and print the result as JSON
    Scan {
        image: PathBuf,

        /// Ask the vision model instead of matching against the local catalog
        #[arg(long)]
        remote: bool,

        /// Display language for this scan (en, ru, uz); defaults to the saved one
        #[arg(long)]
        locale: Option<Locale>,

        #[arg(long, value_enum, default_value_t = Strategy::Pixel)]
        strategy: Strategy,

        /// Pick among matching catalog entries at random instead of in turn
        #[arg(long)]
        random: bool,

        /// Do not save the result to history
        #[arg(long)]
        no_history: bool,
    },
    /// Saved scan results
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Remote result cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// User preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Sample pixel colors
    Pixel,
    /// Random color guess with a dimension-based shape
    Heuristic,
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    List,
    Clear,
}

#[derive(Subcommand, Debug)]
enum CacheAction {
    Stats,
    Clear,
}

#[derive(Subcommand, Debug)]
enum PrefsAction {
    /// Show or set the display language
    Language { code: Option<Locale> },
    /// Show or set the theme mode (light, dark, system)
    Theme { mode: Option<ThemeMode> },
    /// Show or set the onboarding flag
    Onboarding { completed: Option<bool> },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Preferences {
    language: Locale,
    theme_mode: ThemeMode,
    onboarding_completed: bool,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn preferences(state: &CoreState) -> Preferences {
    Preferences {
        language: state.preferences.language().await,
        theme_mode: state.preferences.theme_mode().await,
        onboarding_completed: state.preferences.onboarding_completed().await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    capsure_lib::init_tracing();
    let cli = Cli::parse();

    let state = match &cli.store {
        Some(path) => CoreState::open(path, capsure_lib::config::RemoteConfig::from_env())
            .with_context(|| format!("opening store at {}", path.display()))?,
        None => CoreState::open_default(),
    };

    match cli.command {
        Command::Scan {
            image,
            remote,
            locale,
            strategy,
            random,
            no_history,
        } => {
            let extractor = match strategy {
                Strategy::Pixel => FeatureExtractor::pixel_sampling(),
                Strategy::Heuristic => FeatureExtractor::heuristic(),
            };
            let policy = if random {
                SelectionPolicy::random_from_entropy()
            } else {
                SelectionPolicy::RoundRobin
            };
            let mode = if remote { ScanMode::Remote } else { ScanMode::Local };
            if remote && state.remote_config.key_status() == ApiKeyStatus::Missing {
                tracing::warn!("No vision API key configured, the result will explain how to add one");
            }

            let mut scanner = state.scanner(extractor, policy).await;
            if let Some(locale) = locale {
                scanner.set_locale(locale);
            }
            let outcome = if no_history {
                scanner.scan_path(&image, mode).await
            } else {
                scanner.scan_path_and_record(&image, mode).await
            };
            print_json(&outcome)?;
        }
        Command::History { action } => match action {
            HistoryAction::List => print_json(&state.history.list().await)?,
            HistoryAction::Clear => state.history.clear().await,
        },
        Command::Cache { action } => match action {
            CacheAction::Stats => print_json(&state.cache.stats().await)?,
            CacheAction::Clear => state.cache.clear().await,
        },
        Command::Prefs { action } => {
            match action {
                PrefsAction::Language { code: Some(locale) } => state.preferences.set_language(locale).await,
                PrefsAction::Theme { mode: Some(mode) } => state.preferences.set_theme_mode(mode).await,
                PrefsAction::Onboarding { completed: Some(done) } => {
                    state.preferences.set_onboarding_completed(done).await
                }
                _ => {}
            }
            print_json(&preferences(&state).await)?;
        }
    }

    Ok(())
}
