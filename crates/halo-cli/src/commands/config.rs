use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use halo_core::settings::BloomSettings;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write settings to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default bloom settings as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let settings = BloomSettings::default();
    let toml_str = toml::to_string_pretty(&settings)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        println!("Default settings saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
