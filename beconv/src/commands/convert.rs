use std::path::PathBuf;

use beconv_config::{BeconvToml, Config, Overrides};
use clap::Args;
use eyre::{Context, Result};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, ConvertOptions, Mode},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Backend declaration file to convert (e.g. src/types/BEUser.ts)
    pub input: PathBuf,

    /// Path to beconv.toml (defaults to ./beconv.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write to this file instead of <input dir>/<out-dir>/<name>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory, relative to the input file's directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Marker prefix of backend type names
    #[arg(long)]
    pub marker: Option<String>,

    /// Suffix appended to converted type names
    #[arg(long)]
    pub suffix: Option<String>,

    /// Preview the converted file without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print only the converted file to stdout
    #[arg(long, conflicts_with = "dry_run")]
    pub stdout: bool,

    /// Fail on lines that look like declarations but do not match the declaration form
    #[arg(long)]
    pub strict: bool,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.load_config().unwrap_or_exit();

        let mode = if self.dry_run {
            Mode::DryRun
        } else if self.stdout {
            Mode::Stdout
        } else {
            Mode::Write
        };

        let report = ops::convert(
            &self.input,
            &config,
            ConvertOptions {
                output: self.output.as_deref(),
                mode,
                strict: self.strict,
            },
        )?;

        report
            .render(&mut TerminalOutput::new())
            .wrap_err("failed to write to stdout")?;

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn load_config(&self) -> beconv_config::Result<Config> {
        let file = match &self.config {
            Some(path) => Some(BeconvToml::open(path)?),
            None => BeconvToml::discover(".")?,
        };
        let config = match file {
            Some(file) => {
                debug!(path = %file.path().display(), "loaded configuration");
                file.into_config()
            }
            None => Config::default(),
        };

        config.with_overrides(Overrides {
            marker: self.marker.clone(),
            suffix: self.suffix.clone(),
            output_dir: self.out_dir.clone(),
        })
    }
}
