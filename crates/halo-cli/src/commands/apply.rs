use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use halo_core::filter::PostProcessFilter;
use halo_core::io::{load_linear, save_png};
use halo_core::settings::BloomSettings;
use halo_core::sink::ImageSink;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image file (HDR, EXR, PNG, ...)
    pub file: PathBuf,

    /// Bloom settings file (TOML); defaults apply when omitted
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Downsampling ratio between the frame and the bloom buffer
    #[arg(long)]
    pub ratio: Option<usize>,

    /// Blur radius in reduced-buffer pixels
    #[arg(long)]
    pub radius: Option<usize>,

    /// Brightness threshold in linear units
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Output only the bloom contribution
    #[arg(long)]
    pub highlight_only: bool,

    /// Exposure multiplier applied before tone mapping
    #[arg(long, default_value = "1.0")]
    pub exposure: f64,

    /// Output file path
    #[arg(short, long, default_value = "bloom.png")]
    pub output: PathBuf,
}

pub fn run(args: &ApplyArgs) -> Result<()> {
    let settings: BloomSettings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid bloom settings in {}", path.display()))?
        }
        None => BloomSettings::default(),
    };

    let filter = settings.build_filter();

    // Ratio first: its setter rescales the radius, and an explicit
    // --radius must win over the rescaled value.
    if let Some(ratio) = args.ratio {
        filter.set_down_sample_ratio(ratio);
    }
    if let Some(radius) = args.radius {
        filter.set_blur_radius(radius);
    }
    if let Some(threshold) = args.threshold {
        filter.set_threshold(threshold);
    }
    filter.set_highlight_only(args.highlight_only);

    let frame = load_linear(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", frame.width(), frame.height());

    crate::summary::print_apply_summary(&filter, args.exposure);

    let start = Instant::now();
    let mut sink = ImageSink::new(frame.width(), frame.height());
    filter.process_frame(
        frame.width(),
        frame.height(),
        frame.as_slice(),
        &mut sink,
        args.exposure,
    )?;
    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Bloom applied"
    );

    save_png(&sink.into_image(), &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
