use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabla_translate::config::Config;
use tabla_translate::error::PipelineError;
use tabla_translate::ocr::tesseract::TesseractEngine;
use tabla_translate::translate::google::GoogleTranslator;
use tabla_translate::{output, pipeline};

#[derive(Parser, Debug)]
#[command(name = "tabla-translate")]
#[command(about = "Extract Spanish text from an image, translate it to English, save a JSON mapping")]
#[command(version)]
struct Args {
    /// Path to the PNG/JPEG image containing the text
    #[arg(value_name = "IMAGE", required_unless_present = "gui")]
    image: Option<PathBuf>,

    /// Open the graphical file picker instead of passing a path
    #[arg(long)]
    gui: bool,

    /// Where to write the translation map
    #[arg(long, default_value = "translations.json")]
    output: PathBuf,

    /// Path to tessdata directory (uses TESSDATA_PREFIX env var if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    tessdata_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new(args.output, args.tessdata_path);

    if args.gui {
        return run_gui(config);
    }

    let Some(image) = args.image else {
        anyhow::bail!("specify an image path or use --gui");
    };

    run_cli(&config, &image)
}

fn run_cli(config: &Config, image: &Path) -> anyhow::Result<()> {
    let summary = match process_image(config, image) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Failed to process image: {}", e);
            return Ok(());
        }
    };

    output::write_translations(&summary.translations, &config.output_path)?;

    tracing::info!(
        "Saved {} translations to {} ({} lines skipped)",
        summary.translations.len(),
        config.output_path.display(),
        summary.skipped.len()
    );

    Ok(())
}

fn process_image(config: &Config, image: &Path) -> Result<pipeline::RunSummary, PipelineError> {
    let engine = TesseractEngine::new(config)?;
    let translator = GoogleTranslator::new();
    pipeline::run(image, &engine, &translator, config)
}

#[cfg(feature = "gui")]
fn run_gui(config: Config) -> anyhow::Result<()> {
    tabla_translate::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: Config) -> anyhow::Result<()> {
    anyhow::bail!("this build has no graphical mode; rebuild with the gui feature")
}
