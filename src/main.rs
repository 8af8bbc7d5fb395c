//! SIX EYES CLI entry point.
//!
//! Diffs, highlights and optimizes source files from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::str::FromStr;

use sixeyes::application::diff::{self, number_lines, render_numbered, stats};
use sixeyes::application::highlight::{highlight, render_html};
use sixeyes::application::optimize::OptimizeService;
use sixeyes::domain::{DiffMode, Language};
use sixeyes::infra::app_config::{self, AppConfig};
use sixeyes::infra::gateway::GatewayClient;
use sixeyes::infra::history_store::HistoryStore;
use sixeyes::infra::input::{SourceInput, read_source};

#[derive(Parser, Debug)]
#[command(name = "sixeyes")]
#[command(version)]
#[command(about = "AI-powered code optimizer with a before/after line diff", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a line diff between two files
    Diff {
        /// Original source (`-` for stdin)
        original: String,
        /// Modified source
        modified: String,
        /// Realign with an edit-distance diff instead of the positional walk
        #[arg(long)]
        minimal: bool,
        /// Print addition/deletion counts after the diff
        #[arg(long)]
        stats: bool,
    },

    /// Print a file with token highlighting
    Highlight {
        /// Source file (`-` for stdin)
        file: String,
        /// Language (javascript, typescript, python, java, c++, go, rust)
        #[arg(short, long, default_value = "javascript")]
        language: String,
        /// Emit HTML spans instead of plain token listing
        #[arg(long)]
        html: bool,
    },

    /// Send a file to the AI gateway and print the optimized version
    Optimize {
        /// Source file (`-` for stdin)
        file: String,
        /// Language (javascript, typescript, python, java, c++, go, rust)
        #[arg(short, long, default_value = "javascript")]
        language: String,
        /// Show the before/after diff instead of the optimized code
        #[arg(long)]
        diff: bool,
    },

    /// Inspect or clear past optimizations
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Show or initialize the configuration file
    Config {
        /// Write the current configuration to disk
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List entries, newest first
    List,
    /// Remove every entry
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = app_config::load_config();

    match args.command {
        Commands::Diff {
            original,
            modified,
            minimal,
            stats: show_stats,
        } => {
            let original = read_source(&SourceInput::parse(&original))?;
            let modified = read_source(&SourceInput::parse(&modified))?;
            let mode = if minimal {
                DiffMode::Minimal
            } else {
                DiffMode::Positional
            };

            let lines = diff::diff(&original, &modified, mode);
            println!("{}", render_numbered(&number_lines(&lines)));

            if show_stats {
                let s = stats(&lines);
                println!(
                    "\n{} additions, {} deletions, {} unchanged",
                    s.additions, s.deletions, s.unchanged
                );
            }
        }

        Commands::Highlight {
            file,
            language,
            html,
        } => {
            let language = parse_language(&language)?;
            let code = read_source(&SourceInput::parse(&file))?;
            let tokens = highlight(&code, language);

            if html {
                println!("<pre><code>{}</code></pre>", render_html(&tokens));
            } else {
                for token in tokens {
                    println!("{:<8} {:?}", token.kind.to_string(), token.text);
                }
            }
        }

        Commands::Optimize {
            file,
            language,
            diff: show_diff,
        } => {
            let language = parse_language(&language)?;
            let code = read_source(&SourceInput::parse(&file))?;
            optimize(&config, &code, language, show_diff).await?;
        }

        Commands::History { action } => {
            let mut store = HistoryStore::open(app_config::history_path(), config.history_limit);
            match action.unwrap_or(HistoryAction::List) {
                HistoryAction::List => {
                    if store.history().is_empty() {
                        println!("No optimizations yet.");
                    }
                    for entry in store.history().iter() {
                        let first_line = entry.original_code.lines().next().unwrap_or_default();
                        println!(
                            "{}  {:<10}  {}  ({} improvements)",
                            entry.created_at,
                            entry.language.to_string(),
                            first_line,
                            entry.improvements.len()
                        );
                    }
                }
                HistoryAction::Clear => {
                    store.clear().context("Failed to clear history")?;
                    println!("History cleared.");
                }
            }
        }

        Commands::Config { init } => {
            if init {
                app_config::save_config(&config).context("Failed to write config")?;
                println!("Wrote {}", app_config::config_path().display());
            }
            print!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to render config")?
            );
        }
    }

    Ok(())
}

fn parse_language(name: &str) -> Result<Language> {
    Language::from_str(name).with_context(|| {
        let known: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
        format!("Choose one of: {}", known.join(", "))
    })
}

async fn optimize(
    config: &AppConfig,
    code: &str,
    language: Language,
    show_diff: bool,
) -> Result<()> {
    let client = GatewayClient::from_config(config)?;
    let store = HistoryStore::open(app_config::history_path(), config.history_limit);
    let mut service = OptimizeService::new(client).with_history(store);

    let outcome = service.optimize(code, language).await?;

    if show_diff {
        println!("{}", render_numbered(&number_lines(&outcome.diff)));
    } else {
        println!("{}", outcome.result.optimized_code);
    }

    if !outcome.result.improvements.is_empty() {
        println!("\nImprovements Applied");
        for improvement in &outcome.result.improvements {
            println!("  ✓ {improvement}");
        }
    }

    Ok(())
}
