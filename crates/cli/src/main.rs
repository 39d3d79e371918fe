use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{FilmDocument, JsonFileSource, MongoConfig, MongoSource, RecordSource};
use pipeline::{DashboardStats, RankedEntry, YearTotals, aggregate_documents};
use server::{DEFAULT_TITLE, Dashboard, PageOptions};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Film Dashboard - movie industry statistics served as a single web page
#[derive(Parser)]
#[command(name = "film-dashboard")]
#[command(about = "Aggregate film records and serve them as a chart dashboard", long_about = None)]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017", hide_env_values = true)]
    mongo_uri: String,

    /// Database holding the film collection
    #[arg(long, env = "FILMS_DATABASE", default_value = "films")]
    database: String,

    /// Collection holding one document per film
    #[arg(long, env = "FILMS_COLLECTION", default_value = "films")]
    collection: String,

    /// Read film documents from a JSON array file instead of MongoDB
    #[arg(long, env = "FILMS_JSON")]
    from_json: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dashboard and serve it over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "DASHBOARD_BIND", default_value = "127.0.0.1:8050")]
        bind: SocketAddr,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the aggregated series to the terminal
    Summary,

    /// Build the dashboard and write the page to a file
    Render {
        /// Where to write the HTML page
        #[arg(long, short, default_value = "dashboard.html")]
        output: PathBuf,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Link to the source code shown under the title
    #[arg(long, env = "DASHBOARD_SOURCE_URL")]
    source_url: Option<String>,
}

impl PageArgs {
    fn options(&self) -> PageOptions {
        PageOptions {
            title: self.title.clone(),
            source_url: self.source_url.clone(),
            ..Default::default()
        }
    }
}

impl Cli {
    fn mongo_config(&self) -> MongoConfig {
        MongoConfig {
            uri: self.mongo_uri.clone(),
            database: self.database.clone(),
            collection: self.collection.clone(),
        }
    }
}

/// The record source picked on the command line
enum Source {
    Json(JsonFileSource),
    Mongo(MongoSource),
}

impl RecordSource for Source {
    fn name(&self) -> String {
        match self {
            Source::Json(source) => source.name(),
            Source::Mongo(source) => source.name(),
        }
    }

    async fn fetch_all_films(&self) -> data_loader::Result<Vec<FilmDocument>> {
        match self {
            Source::Json(source) => source.fetch_all_films().await,
            Source::Mongo(source) => source.fetch_all_films().await,
        }
    }
}

async fn open_source(cli: &Cli) -> Result<Source> {
    match &cli.from_json {
        Some(path) => Ok(Source::Json(JsonFileSource::new(path))),
        None => {
            let source = MongoSource::connect(cli.mongo_config())
                .await
                .context("Failed to connect to MongoDB")?;
            Ok(Source::Mongo(source))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let source = open_source(&cli).await?;

    // Dispatch to appropriate command handler
    match &cli.command {
        Commands::Serve { bind, page } => handle_serve(&source, *bind, page.options()).await,
        Commands::Summary => handle_summary(&source).await,
        Commands::Render { output, page } => handle_render(&source, output, page.options()).await,
    }
}

/// Handle the 'serve' command
async fn handle_serve(source: &Source, bind: SocketAddr, options: PageOptions) -> Result<()> {
    let dashboard = Arc::new(Dashboard::build(source, &options).await?);
    info!("Serving dashboard for {} films", dashboard.film_count());
    server::serve(dashboard, bind).await
}

/// Handle the 'summary' command
async fn handle_summary(source: &Source) -> Result<()> {
    let start = Instant::now();
    let documents = source
        .fetch_all_films()
        .await
        .with_context(|| format!("Failed to fetch films from {}", source.name()))?;
    let stats = aggregate_documents(&documents).context("Failed to aggregate films")?;

    println!(
        "{} Aggregated {} films in {:?}\n",
        "✓".green(),
        documents.len(),
        start.elapsed()
    );
    print_summary(&stats);
    Ok(())
}

/// Handle the 'render' command
async fn handle_render(source: &Source, output: &Path, options: PageOptions) -> Result<()> {
    let dashboard = Dashboard::build(source, &options).await?;
    tokio::fs::write(output, dashboard.page_html())
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Wrote dashboard for {} films to {}",
        "✓".green(),
        dashboard.film_count(),
        output.display()
    );
    Ok(())
}

/// Helper function to format and print the five series
fn print_summary(stats: &DashboardStats) {
    if stats.is_empty() {
        println!("{}", "No films found.".yellow());
        return;
    }

    println!("{}", "Films released per year:".bold().blue());
    for (year, count) in &stats.films_per_year {
        println!("  {} {}", year.to_string().green(), count);
    }

    print_year_totals("Box office revenue per year:", &stats.box_office_per_year);
    print_year_totals("Worldwide gross revenue per year:", &stats.worldwide_gross_per_year);

    print_ranking("Top directors:", &stats.top_directors);
    print_ranking("Top countries:", &stats.top_countries);
}

fn print_year_totals(heading: &str, totals: &YearTotals) {
    println!("\n{}", heading.bold().blue());
    for (year, amount) in totals {
        println!(
            "  {} ${:.0} ({})",
            year.to_string().green(),
            amount,
            charts::compact_amount(*amount)
        );
    }
}

fn print_ranking(heading: &str, entries: &[RankedEntry]) {
    println!("\n{}", heading.bold().blue());
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {}. {} ({} films)",
            (i + 1).to_string().green(),
            entry.name,
            entry.count
        );
    }
}
