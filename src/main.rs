mod adapters;
mod core;
mod global_constants;
mod user_settings;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;

use crate::adapters::PredictServerClassifier;
use crate::core::interfaces::adapters::IntersectionClassifier;
use crate::core::models::SnapshotBuffer;
use crate::user_settings::UserSettings;

/// Classifies a street-intersection snapshot through the local inference
/// server and prints the predicted label.
#[derive(Parser, Debug)]
#[command(name = "intersection-guide", version, about)]
struct CliArgs {
    /// Path to the snapshot image (any format the image crate can decode)
    image_path: PathBuf,

    /// Predict endpoint, overriding the saved settings
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "[MAIN] Starting {}",
        global_constants::APPLICATION_NAME
    );

    let args = CliArgs::parse();

    let settings = UserSettings::load()?;
    let predict_endpoint = args.endpoint.unwrap_or(settings.predict_endpoint);

    let snapshot = load_snapshot_from_file(&args.image_path).await?;

    let classifier: Arc<dyn IntersectionClassifier> =
        Arc::new(PredictServerClassifier::new(predict_endpoint));

    match classifier.classify(&snapshot).await {
        Ok(prediction) => {
            log::info!("[MAIN] Prediction received: {}", prediction);
            println!("{}", prediction);
            Ok(())
        }
        Err(error) => {
            log::error!("[MAIN] Classification failed: {}", error);
            Err(error.into())
        }
    }
}

async fn load_snapshot_from_file(image_path: &Path) -> anyhow::Result<SnapshotBuffer> {
    log::debug!("[MAIN] Loading snapshot from {:?}", image_path);

    let file_bytes = tokio::fs::read(image_path).await?;
    let decoded = image::load_from_memory(&file_bytes)?;
    let rgba = decoded.to_rgba8();

    Ok(SnapshotBuffer::build_from_raw_data(
        rgba.width(),
        rgba.height(),
        rgba.into_raw(),
    ))
}
