use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kotoba::catalog::resolve_catalog;
use kotoba::{App, Config, ProgressRecord};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kotoba")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load chapters from a content file instead of the bundled set
    #[arg(long, global = true, value_name = "FILE")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the chapters in the catalog
    Chapters,
    /// Print study statistics
    Stats,
    /// Erase all saved progress
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

/// Send logs to a file under the data directory; the terminal belongs to
/// the TUI.
fn init_logging() -> Result<()> {
    let dir = Config::data_dir()?;
    fs::create_dir_all(&dir)?;
    let file = fs::File::create(dir.join("kotoba.log"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kotoba=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}

fn main() -> Result<()> {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err:#}");
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chapters) => {
            let config = Config::load()?;
            let catalog = resolve_catalog(cli.content.as_deref(), &config)?;
            for chapter in &catalog.chapters {
                println!(
                    "{:>2}. {} {} ({} vocabulary, {} kanji, {} phrases)",
                    chapter.id,
                    chapter.title,
                    chapter.title_jp,
                    chapter.vocabulary.len(),
                    chapter.kanji.len(),
                    chapter.phrases.len(),
                );
            }
        }
        Some(Commands::Stats) => {
            let record = ProgressRecord::load();
            println!("Streak:        {} days", record.streak);
            println!("Known items:   {}", record.known_count());
            println!("To practice:   {}", record.practice_count());
            println!(
                "Quizzes taken: {} (average {}%)",
                record.quizzes_taken(),
                record.average_quiz_score()
            );
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                println!("This erases all saved progress. Run `kotoba reset --yes` to confirm.");
                return Ok(());
            }
            let mut record = ProgressRecord::load();
            record.reset();
            record.save()?;
            println!("Progress reset.");
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let catalog = resolve_catalog(cli.content.as_deref(), &config)?;
            let mut app = App::new(config, catalog)?;
            app.run()?;
        }
    }

    Ok(())
}
