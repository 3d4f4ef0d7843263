use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use views_predictor::config::PredictorConfig;
use views_predictor::scoring::{coerce_count, ViewPredictor};
use views_predictor::server::{self, ServeOptions};
use views_predictor::{
    estimate, format_float, format_hour, format_number, prediction_rng, ContextInput,
    MetricsInput,
};

const DEFAULT_LOG_FILTER: &str = "views_predictor=info";

#[derive(Parser)]
#[command(name = "views-predictor", about = "Heuristic YouTube view estimator")]
struct Cli {
    /// Predictor config file (defaults to $PREDICTOR_CONFIG_PATH or config/predictor.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Estimate(EstimateArgs),
    Serve(ServeArgs),
    Categories,
}

#[derive(Args, Debug, Clone)]
struct EstimateArgs {
    #[arg(long, default_value = "1000")]
    likes: String,
    #[arg(long, default_value = "50")]
    comments: String,
    #[arg(long, default_value_t = 1)]
    category: u32,
    #[arg(long, default_value_t = 14)]
    hour: u8,
    #[arg(long, default_value_t = 0)]
    day: u8,
    #[arg(long)]
    seed: Option<String>,
    #[arg(long)]
    json: bool,
}

impl Default for EstimateArgs {
    fn default() -> Self {
        Self {
            likes: "1000".to_string(),
            comments: "50".to_string(),
            category: 1,
            hour: 14,
            day: 0,
            seed: None,
            json: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long)]
    web_root: Option<String>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, config_path) = PredictorConfig::load(cli.config)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::info!(path = %path.display(), "using predictor config");
    }
    let predictor = ViewPredictor::from_config(&config);
    let command = cli
        .command
        .unwrap_or(Command::Estimate(EstimateArgs::default()));

    match command {
        Command::Estimate(args) => run_estimate(args, &predictor),
        Command::Serve(args) => {
            let options = ServeOptions {
                host: args.host,
                port: args.port,
                web_root: args.web_root,
            };
            server::serve(options, predictor).await
        }
        Command::Categories => {
            print_tables(&predictor);
            Ok(())
        }
    }
}

fn run_estimate(args: EstimateArgs, predictor: &ViewPredictor) -> anyhow::Result<()> {
    let metrics = MetricsInput::new(coerce_count(&args.likes), coerce_count(&args.comments));
    let context = ContextInput {
        category_id: Some(args.category),
        publish_hour: validate_hour(args.hour)?,
        day_of_week: validate_day(args.day)?,
    };

    let mut rng = prediction_rng(args.seed.as_deref());
    let output = estimate(predictor, metrics, context, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let tables = predictor.tables();
    println!("Predicted views: {}", format_number(output.prediction.value));
    println!("{}", output.prediction.range_text());
    println!(
        "Engagement score: {}",
        format_float(output.engagement.value(), 2)
    );
    println!("Timing: {}", output.timing.label());
    println!(
        "Summary: likes {} | comments {} | category {} | publish {} | day {}",
        format_number(output.metrics.likes),
        format_number(output.metrics.comments),
        output.category_name,
        format_hour(output.context.publish_hour),
        tables.weekday_short_name(output.context.day_of_week)
    );
    println!("\nInsight:\n{}", output.insight);

    Ok(())
}

fn print_tables(predictor: &ViewPredictor) {
    let tables = predictor.tables();
    println!("Categories:");
    for (id, name) in tables.categories() {
        println!(
            "  {:>3}  {} (boost {})",
            id,
            name,
            format_float(tables.category_boost(name), 2)
        );
    }
    println!("\nWeekdays:");
    for (index, name) in tables.weekdays() {
        println!("  {}  {}", index, name);
    }
}

fn validate_hour(value: u8) -> anyhow::Result<u8> {
    if value > 23 {
        anyhow::bail!("invalid hour (0-23): {}", value);
    }
    Ok(value)
}

fn validate_day(value: u8) -> anyhow::Result<u8> {
    if value > 6 {
        anyhow::bail!("invalid day of week (0-6): {}", value);
    }
    Ok(value)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
