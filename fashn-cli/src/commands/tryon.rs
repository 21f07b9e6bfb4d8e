//! Try-on command handler
//!
//! Maps command-line flags onto typed try-on parameters, validates them, and
//! runs one job to completion.

use anyhow::Result;
use clap::Args;
use colored::*;
use fashn_core::domain::tryon::{
    Category, GarmentPhotoType, Mode, ModelVersion, ModerationLevel, OutputFormat,
};
use fashn_core::TryOnParams;
use tracing::info;

use super::print_json;
use crate::config::Config;

/// Try-on parameters
#[derive(Debug, Args)]
pub struct TryOnArgs {
    /// URL or base64 data URI of the person
    #[arg(long)]
    pub model_image: String,

    /// URL or base64 data URI of the garment
    #[arg(long)]
    pub garment_image: String,

    /// Model version (tryon-v1.6, tryon-v1.5)
    #[arg(long, default_value_t = ModelVersion::default())]
    pub model_version: ModelVersion,

    /// Garment category (auto, tops, bottoms, one-pieces)
    #[arg(long, default_value_t = Category::default())]
    pub category: Category,

    /// Segment the original clothing before fitting the garment
    #[arg(long)]
    pub with_segmentation: bool,

    /// Moderation level (conservative, permissive, none)
    #[arg(long, default_value_t = ModerationLevel::default())]
    pub moderation_level: ModerationLevel,

    /// Garment photo type (auto, flat-lay, model)
    #[arg(long, default_value_t = GarmentPhotoType::default())]
    pub garment_photo_type: GarmentPhotoType,

    /// Processing mode (performance, balanced, quality)
    #[arg(long, default_value_t = Mode::default())]
    pub mode: Mode,

    /// Random seed (0 to 2^32-1)
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of output samples (1-4)
    #[arg(long, default_value_t = 1)]
    pub num_samples: u32,

    /// Output image format (png, jpeg)
    #[arg(long, default_value_t = OutputFormat::default())]
    pub output_format: OutputFormat,

    /// Return images as base64 strings instead of URLs
    #[arg(long)]
    pub return_base64: bool,
}

impl From<TryOnArgs> for TryOnParams {
    fn from(args: TryOnArgs) -> Self {
        TryOnParams {
            model_version: args.model_version,
            model_image: args.model_image,
            garment_image: args.garment_image,
            category: args.category,
            segmentation_free: !args.with_segmentation,
            moderation_level: args.moderation_level,
            garment_photo_type: args.garment_photo_type,
            mode: args.mode,
            seed: args.seed,
            num_samples: args.num_samples,
            output_format: args.output_format,
            return_base64: args.return_base64,
        }
    }
}

/// Submit one try-on and print its output
pub async fn handle_tryon(args: TryOnArgs, config: &Config) -> Result<()> {
    let params = TryOnParams::from(args);
    let request = params.to_request()?;
    info!(
        model = %params.model_version,
        category = %params.category,
        num_samples = params.num_samples,
        "Submitting try-on"
    );

    let client = config.client()?;
    let output = client.run(&request, &config.poll).await?;

    eprintln!(
        "{} Job {} completed",
        "✓".green(),
        output.id.to_string().dimmed()
    );
    print_json(&serde_json::to_value(&output)?)
}
