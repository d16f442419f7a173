use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feature_ledger::models::NewFeature;
use feature_ledger::{init_project, render, LedgerStore};

#[derive(Parser)]
#[command(name = "feature-ledger")]
#[command(about = "Track a project's features in a JSON ledger")]
struct Cli {
    /// Project root containing the `.antigine` directory
    #[arg(short, long, global = true, env = "FEATURE_LEDGER_PROJECT", default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty ledger and project metadata
    Init {
        /// Human-readable project name
        #[arg(short, long)]
        name: String,

        /// Feature id prefix (derived from the name if omitted)
        #[arg(short, long)]
        initials: Option<String>,
    },
    /// Add a feature and save the ledger
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Search keyword (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Feature category (default: new_feature)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Initial status (default: requested)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Print a single feature as JSON
    Show { feature_id: String },
    /// List features with the given status
    List {
        #[arg(short, long)]
        status: String,
    },
    /// Rank features by matching search terms
    Search {
        #[arg(required = true)]
        terms: Vec<String>,
    },
}

/// Initialize tracing on stderr so stdout carries only command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "feature_ledger=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open(project: &Path) -> anyhow::Result<LedgerStore> {
    LedgerStore::open(project)
        .with_context(|| format!("Failed to open ledger in {}", project.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Init { name, initials } => {
            let metadata = init_project(&cli.project, &name, initials)
                .context("Failed to initialize project")?;
            println!(
                "Initialized {} (feature prefix {})",
                metadata.project_name, metadata.project_initials
            );
        }
        Commands::Add {
            title,
            description,
            keywords,
            kind,
            status,
        } => {
            let mut store = open(&cli.project)?;
            let feature_id = store
                .add_feature(NewFeature {
                    title: Some(title),
                    description,
                    keywords: Some(keywords),
                    kind,
                    status,
                })
                .context("Failed to add feature")?;
            store.save().context("Failed to save ledger")?;
            tracing::info!("Added feature {}", feature_id);
            println!("{}", feature_id);
        }
        Commands::Show { feature_id } => {
            let store = open(&cli.project)?;
            let entry = store
                .get_feature_by_id(&feature_id)
                .ok_or_else(|| anyhow::anyhow!("Feature {} not found", feature_id))?;
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        Commands::List { status } => {
            let store = open(&cli.project)?;
            let features = store.get_features_by_status(&status)?;
            print!("{}", render::render_feature_list(&features));
        }
        Commands::Search { terms } => {
            let store = open(&cli.project)?;
            let hits = store.keyword_search(terms.as_slice())?;
            if hits.is_empty() {
                println!("No matching features");
            } else {
                print!("{}", render::render_search_hits(&hits, store.ledger()));
            }
        }
    }

    Ok(())
}
