use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use steam_recommender::{
    display, interactive::Session, AttributeSet, Filters, GameDataset, LoadOptions, OutputFormat,
    Platform, RecommendQuery, Recommender, ScorerKind,
};

#[derive(Parser)]
#[command(name = "steam-recommender")]
#[command(version, about = "Recommend Steam games similar to ones you have played", long_about = None)]
struct Cli {
    /// Dataset path
    #[arg(short, long, default_value = "datasets/steam.csv")]
    data: PathBuf,

    /// Game you have played (exact name, repeatable). Omit to be asked interactively
    #[arg(short, long = "game")]
    games: Vec<String>,

    /// Attributes to compare, comma separated [category, genre, tag, developer]. Empty for all
    #[arg(short, long, default_value = "")]
    attributes: String,

    /// Maximum number of results
    #[arg(short = 'n', long, default_value = "10")]
    limit: usize,

    /// Maximum price (inclusive)
    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum rating score, 0-100 (inclusive)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Platforms, comma separated [windows, mac, linux]
    #[arg(short, long, default_value = "")]
    platform: String,

    /// Similarity scorer [match-count, overlap]
    #[arg(long, default_value = "match-count")]
    scorer: String,

    /// Keep games whose `english` column is 0
    #[arg(long)]
    all_languages: bool,

    /// Output format [text, json]
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "steam_recommender=debug"
    } else {
        "steam_recommender=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let scorer: ScorerKind = cli.scorer.parse()?;
    let format: OutputFormat = cli.format.parse()?;

    let options = LoadOptions {
        english_only: !cli.all_languages,
    };
    let dataset = GameDataset::load(&cli.data, &options)
        .with_context(|| format!("Cannot start without a dataset ({})", cli.data.display()))?;
    let recommender = Recommender::with_scorer(dataset, scorer.build());

    if cli.games.is_empty() {
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout(), cli.limit);
        session.run(&recommender, format)?;
        return Ok(());
    }

    let filters = Filters {
        max_price: cli.max_price,
        min_rating: cli.min_rating,
        platforms: Platform::parse_list(&cli.platform)?,
    };
    let query = RecommendQuery {
        references: cli.games,
        attributes: AttributeSet::parse_or_all(&cli.attributes)?,
        filters,
        limit: Some(cli.limit),
    };

    let report = recommender.recommend(&query)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", display::render(&report, format)?)?;

    Ok(())
}
