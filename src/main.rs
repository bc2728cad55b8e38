use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dblp_trends::config::Config;
use dblp_trends::crawler::{self, Crawler};
use dblp_trends::report::{self, Reporter};
use dblp_trends::storage;

#[derive(Parser)]
#[command(
    name = "dblp-trends",
    version,
    about = "DBLP conference paper crawler with keyword and volume trend analytics",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl configured conferences and run the full analysis pipeline
    Crawl {
        /// Only crawl the conference with this key (e.g., "aaai")
        #[arg(short, long)]
        conference: Option<String>,

        /// Output directory for CSV, chart and report files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML config file overriding the built-in conference table
        #[arg(long)]
        config: Option<PathBuf>,

        /// Delay between requests in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Re-run the analysis pipeline from an existing CSV file
    Analyze {
        /// CSV file produced by a previous crawl
        input: PathBuf,

        /// Conference display name used in reports (e.g., "AAAI")
        #[arg(short, long)]
        name: String,

        /// Output directory for chart and report files
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the configured conference table
    Conferences {
        /// TOML config file overriding the built-in conference table
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Crawl {
            conference,
            output,
            config,
            delay_ms,
        } => {
            let mut cfg = load_config(config.as_deref())?;
            if let Some(dir) = output {
                cfg.output.dir = dir;
            }
            if let Some(delay) = delay_ms {
                cfg.crawler.delay_ms = delay;
            }

            crawl(cfg, conference.as_deref()).await?;
        }

        Commands::Analyze {
            input,
            name,
            output,
        } => {
            let mut cfg = load_config(None)?;
            if let Some(dir) = output {
                cfg.output.dir = dir;
            }

            analyze(cfg, &input, &name).await?;
        }

        Commands::Conferences { config } => {
            let cfg = load_config(config.as_deref())?;
            for conf in &cfg.conferences {
                let years: Vec<String> = conf.years().map(|y| y.to_string()).collect();
                println!(
                    "{:<8} {:<8} {}  years: {}",
                    conf.key,
                    conf.name,
                    conf.url_template,
                    years.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

async fn crawl(config: Config, conference: Option<&str>) -> Result<()> {
    // Setup failures (output dir) abort the run; everything later is best-effort
    report::prepare_output_dir(&config.output.dir)?;

    tracing::info!(
        output = %config.output.dir.display(),
        conferences = config.conferences.len(),
        "Starting crawl"
    );

    let crawler = Crawler::new(config)?;
    let stats = crawler.run(conference).await?;

    println!(
        "Done: {} papers across {} conference(s), {} fetch error(s), {} parse mismatch(es) in {:.1}s",
        stats.papers_found,
        stats.conferences_processed,
        stats.fetch_errors,
        stats.parse_mismatches,
        stats.duration.as_secs_f64()
    );

    Ok(())
}

async fn analyze(config: Config, input: &std::path::Path, name: &str) -> Result<()> {
    report::prepare_output_dir(&config.output.dir)?;

    let papers = storage::read_papers(input).await?;
    tracing::info!(records = papers.len(), input = %input.display(), "Loaded CSV");

    if papers.is_empty() {
        println!("No records in {}", input.display());
        return Ok(());
    }

    let reporter = Reporter::new(&config.output);
    crawler::analyze(&reporter, name, &papers);

    println!(
        "Analyzed {} papers for {name}; reports written to {}",
        papers.len(),
        config.output.dir.display()
    );

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("dblp_trends=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("dblp_trends=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
