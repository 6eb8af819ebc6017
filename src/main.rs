// Command line front end: extract identity card fields from an image file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use cnie::processing::{HttpTranslator, TesseractRecognizer};
use cnie::{CardExtractor, ErrorClass, ExtractionConfig, Strategy};

#[derive(Parser, Debug)]
#[command(name = "cnie", version, about = "Extract fields from a national identity card image")]
struct Args {
    /// Card image (PNG, JPG or JPEG)
    image: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Strategy::Heuristic)]
    strategy: Strategy,

    /// JSON file overriding the default extraction settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// LibreTranslate-compatible endpoint used to mirror names into Arabic
    #[arg(long)]
    translate_url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &args.config {
        Some(path) => match ExtractionConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::from(1);
            }
        },
        None => ExtractionConfig::default(),
    };

    let translator = match args.translate_url.as_deref().map(HttpTranslator::new).transpose() {
        Ok(translator) => translator,
        Err(e) => {
            error!("Translator unavailable: {}", e);
            return ExitCode::from(1);
        }
    };

    let recognizer = TesseractRecognizer::new(config.tessdata_path.clone());
    let extractor = CardExtractor::new(config, recognizer, translator);

    let bytes = match std::fs::read(&args.image) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read {}: {}", args.image.display(), e);
            return ExitCode::from(1);
        }
    };
    let file_name = args
        .image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    info!("Processing {} with {:?} strategy", args.image.display(), args.strategy);
    match extractor.extract_upload(&file_name, &bytes, args.strategy) {
        Ok(record) => {
            let output = if args.pretty {
                serde_json::to_string_pretty(&record)
            } else {
                serde_json::to_string(&record)
            };
            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("Failed to serialize record: {}", e);
                    ExitCode::from(1)
                }
            }
        }
        Err(e) => {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            match e.class() {
                ErrorClass::Client => ExitCode::from(2),
                ErrorClass::Server => ExitCode::from(1),
            }
        }
    }
}
