//! `ganjoor` command-line browser.
//!
//! Reads the archive through the resilient client: lists poets from a full
//! crawl, shows a poet, a category or a poem, and toggles favorites.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use ganjoor_client::api::{CategoryQuery, PoetQuery};
use ganjoor_client::catalog::{page_count, page_of, PoetCatalog};
use ganjoor_client::config::{load_config, validate_config, ClientConfig, ConfigError};
use ganjoor_client::layout::{layout_verses, render_plain};
use ganjoor_client::model::{Century, FavoriteToggle, Poet};
use ganjoor_client::observability::logging::init_logging;
use ganjoor_client::session::{FileSession, MemorySession, Session};
use ganjoor_client::{Api, ApiError};

#[derive(Parser)]
#[command(name = "ganjoor")]
#[command(about = "Browse the Ganjoor poetry archive", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the archive base URL
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file holding the `auth_token` credential
    #[arg(long)]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List poets, optionally filtered by era or name
    Poets {
        /// ancient, classical, contemporary or modern
        #[arg(long)]
        century: Option<Century>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a poet and their books
    Poet { id: u64 },
    /// Show a category with its sections and poems
    Category { id: u64 },
    /// Show a poem laid out verse by verse
    Poem { id: u64 },
    /// Bookmark a verse, or remove the bookmark
    Favorite { poem: u64, verse: u64 },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(token_file) = cli.token_file {
        config.session.token_path = Some(token_file.display().to_string());
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability);

    tracing::debug!(
        base_url = %config.api.base_url,
        token_file = ?config.session.token_path,
        "Configuration loaded"
    );

    let session: Arc<dyn Session> = match &config.session.token_path {
        Some(path) => Arc::new(FileSession::load(path)?),
        None => Arc::new(MemorySession::new()),
    };
    let api = Api::from_config(&config, session)?;

    match run(&api, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "Request failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(api: &Api, command: Commands) -> Result<(), ApiError> {
    match command {
        Commands::Poets {
            century,
            search,
            page,
        } => {
            let catalog = PoetCatalog::new(api.poets().all(&PoetQuery::default()).await?);
            let matches: Vec<&Poet> = match search.as_deref() {
                Some(query) => catalog
                    .search(query)
                    .into_iter()
                    .filter(|p| century.map_or(true, |c| p.century == c))
                    .collect(),
                None => catalog.by_century(century),
            };

            for poet in page_of(&matches, page) {
                println!(
                    "{:>6}  {}  [{}]  {} poems",
                    poet.id,
                    poet.name,
                    poet.century.label(),
                    poet.poems_count
                );
            }
            println!(
                "page {}/{}, {} poets",
                page,
                page_count(matches.len()).max(1),
                matches.len()
            );
            if catalog.may_be_incomplete() {
                println!(
                    "note: only {} of {} poets were loaded",
                    catalog.len(),
                    catalog.reported_count()
                );
            }
        }
        Commands::Poet { id } => {
            let poet = api.poets().get(id).await?;
            println!("{} ({})", poet.poet.name, poet.century_display);
            println!(
                "{} poems in {} books",
                poet.poet.poems_count, poet.categories_count
            );
            if !poet.description.is_empty() {
                println!("\n{}", poet.description);
            }

            let query = CategoryQuery {
                poet: Some(id),
                ..CategoryQuery::default()
            };
            match api.categories().list(&query).await {
                Ok(categories) => {
                    println!();
                    for category in categories.results.iter().filter(|c| !c.is_root()) {
                        println!("{:>6}  {}", category.id, category.title);
                    }
                }
                Err(e) => tracing::warn!(poet = id, error = %e, "Books unavailable"),
            }
        }
        Commands::Category { id } => {
            let category = api.categories().get_or_listed(id).await?;
            let trail: Vec<String> = category
                .breadcrumb_trail()
                .into_iter()
                .map(|crumb| crumb.title)
                .collect();
            if !trail.is_empty() {
                println!("{}", trail.join(" › "));
            }
            println!("{} ({})", category.category.title, category.category.poet_name);

            let sections = api.categories().subcategories_or_empty(id).await;
            if !sections.is_empty() {
                println!("\nsections:");
                for section in sections {
                    println!("{:>6}  {}", section.id, section.title);
                }
            }

            match api.categories().poems_or_fallback(id).await {
                Ok(poems) if !poems.results.is_empty() => {
                    println!("\npoems:");
                    for poem in poems.results {
                        println!("{:>6}  {}", poem.id, poem.title);
                    }
                }
                Ok(_) => {}
                Err(e) => println!("\npoems: {}", e.user_message()),
            }
        }
        Commands::Poem { id } => {
            let poem = api.poems().get(id).await?;
            println!("{}", poem.poem.title);
            println!("{} · {}\n", poem.poem.poet_name, poem.poem.category_title);

            let groups = layout_verses(&poem.verses);
            if groups.is_empty() {
                println!("The verses of this poem are not available.");
            } else {
                println!("{}", render_plain(&groups));
            }
        }
        Commands::Favorite { poem, verse } => {
            let favorite = api
                .favorites()
                .toggle(&FavoriteToggle { poem, verse })
                .await?;
            println!(
                "favorite {}: {} ({})",
                favorite.id, favorite.verse_text, favorite.poem_title
            );
        }
    }

    Ok(())
}
