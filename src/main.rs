use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use orato::config;
use orato::pipeline::{analyze, AlphabeticTokenizer};

/// Score a speech transcript against a fixed coaching rubric and write a
/// self-contained HTML report.
#[derive(Parser)]
#[command(name = "orato", version)]
struct Cli {
    /// Groq API key used for the structured extraction call.
    #[arg(long)]
    api_key: String,

    /// Path to the transcript text file.
    #[arg(long, conflicts_with = "text")]
    transcript: Option<PathBuf>,

    /// Inline transcript text.
    #[arg(long)]
    text: Option<String>,

    /// Speech duration in seconds.
    #[arg(long)]
    duration: f64,

    /// Where to write the HTML report.
    #[arg(long, default_value = config::REPORT_FILENAME)]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();

    let transcript = match (&cli.transcript, &cli.text) {
        (Some(path), _) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: cannot read {}: {e}", path.display());
                process::exit(1);
            }
        },
        (None, Some(text)) => text.clone(),
        (None, None) => {
            eprintln!("Error: provide --transcript or --text");
            process::exit(1);
        }
    };

    match analyze(
        Arc::new(AlphabeticTokenizer),
        &cli.api_key,
        &transcript,
        cli.duration,
    ) {
        Ok(report) => {
            println!("{}\n", report.summary);
            println!("{:<12} {:<24} {:>5} {:>5}", "Category", "Metric", "Score", "Max");
            for row in &report.rows {
                println!(
                    "{:<12} {:<24} {:>5} {:>5}",
                    row.category, row.metric, row.score, row.max
                );
            }

            if let Err(e) = fs::write(&cli.output, &report.html) {
                eprintln!("Error: cannot write report: {e}");
                process::exit(1);
            }
            println!("\nReport written to {}", cli.output.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
