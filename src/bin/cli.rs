//! CLI application for face shape classification.
//!
//! Usage:
//!   face-shape <landmarks.json>                  # Human-readable output
//!   face-shape <landmarks.json> --json           # JSON response envelope
//!   face-shape <landmarks.json> -o result.json   # Save to file
//!   face-shape <response.json> --remote          # Normalize a remote service response

use clap::Parser;
use face_shape::{analyze_remote, AnalysisResponse, Analyzer, Classifier, ClassifierConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "face-shape")]
#[command(author, version, about = "Face shape classification from facial landmarks", long_about = None)]
struct Args {
    /// Landmark file (or remote response with --remote)
    #[arg(required = true)]
    input: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Shape profile table (JSON), replacing the built-in bands
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat the input as a face analysis service response
    #[arg(long)]
    remote: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    setup_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(&args.input)?);

    let response = if args.remote {
        log::info!("Normalizing remote response {:?}", args.input);
        let payload: serde_json::Value = serde_json::from_reader(reader)?;
        analyze_remote(&payload)
    } else {
        let classifier = match &args.config {
            Some(path) => {
                log::info!("Loading shape profiles from {:?}", path);
                Classifier::new(ClassifierConfig::load(path)?)?
            }
            None => Classifier::default(),
        };

        log::info!("Reading landmarks from {:?}", args.input);
        // A file that doesn't parse is a failed detection, not a CLI error
        Analyzer::new(classifier).analyze_reader(reader)
    };

    let output_str = if args.json {
        serde_json::to_string_pretty(&response)?
    } else {
        format_human_readable(&response)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        log::info!("Output written to {:?}", path);
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(response: &AnalysisResponse) -> String {
    let report = &response.normalized;
    let mut s = String::new();

    let label = if report.demo { " (demo)" } else { "" };
    s.push_str(&format!("Face shape: {}{}\n", report.shape, label));
    s.push_str(&format!("Confidence: {}%\n", report.confidence_percent()));
    s.push_str(&format!("Source: {}\n", response.source));

    if let Some(ref error) = response.error {
        s.push_str(&format!("Note: {}\n", error));
    }

    s.push_str("\nScores:\n");
    for score in report.sorted_scores() {
        s.push_str(&format!("  {:<10} {:>3}%\n", score.shape, score.percent()));
    }

    s.push_str("\nTips:\n");
    for tip in &report.tips {
        s.push_str(&format!("  - {}\n", tip));
    }

    s
}
