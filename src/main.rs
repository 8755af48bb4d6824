use aimdb::config::AppConfig;
use aimdb::error::AppError;
use aimdb::server;
use aimdb::telemetry;
use aimdb::workflows::review::rating::{
    CategoryAverage, FinalVerdict, RatingConfig, RatingEngine,
};
use aimdb::workflows::review::PanelCsvImporter;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "AIMDB Expert Review Service",
    about = "Aggregate expert movie evaluations into a panel verdict, from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Produce a verdict offline from a collected panel export
    Verdict(VerdictArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct VerdictArgs {
    /// CSV export of the collected panel (one row per expert)
    #[arg(long)]
    panel_csv: PathBuf,
    /// Genre label for the movie; repeat for multiple genres
    #[arg(long = "genre")]
    genres: Vec<String>,
    /// Include the per-category breakdown in the output
    #[arg(long)]
    breakdown: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Verdict(args) => run_verdict(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let engine = RatingEngine::new(RatingConfig::standard());
    server::serve(&config, engine).await
}

fn run_verdict(args: VerdictArgs) -> Result<(), AppError> {
    let VerdictArgs {
        panel_csv,
        genres,
        breakdown,
    } = args;

    let evaluations = PanelCsvImporter::from_path(&panel_csv)?;
    let engine = RatingEngine::new(RatingConfig::standard());
    let verdict = engine.aggregate(&evaluations, &genres)?;

    render_verdict(&panel_csv, evaluations.len(), &genres, &verdict, breakdown);
    Ok(())
}

fn render_verdict(
    panel_csv: &Path,
    panel_size: usize,
    genres: &[String],
    verdict: &FinalVerdict,
    breakdown: bool,
) {
    println!("Panel verdict for {}", panel_csv.display());
    println!("Experts on panel: {panel_size}");

    if genres.is_empty() {
        println!("Genres: none declared");
    } else {
        println!(
            "Genres: {} (adjustment {:+.2})",
            genres.join(", "),
            verdict.genre_bonus_applied
        );
    }

    println!("Overall score: {:.1}/100", verdict.mean_score);
    println!(
        "Confidence range: [{:.1} - {:.1}]",
        verdict.confidence_interval.low, verdict.confidence_interval.high
    );
    println!("Tier: {}", verdict.tier);

    if breakdown {
        println!();
        println!("Category breakdown:");
        for (category, average) in &verdict.category_breakdown {
            match average {
                CategoryAverage::Rated { mean, contributors } => {
                    println!(
                        "  {:<22} {:>5.1}  ({} expert{})",
                        category.label(),
                        mean,
                        contributors,
                        if *contributors == 1 { "" } else { "s" }
                    );
                }
                CategoryAverage::Unrated => {
                    println!("  {:<22} unrated", category.label());
                }
            }
        }
    }
}
