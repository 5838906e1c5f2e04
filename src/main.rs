//! Framemark - frame annotation CLI.

mod cli;
mod config;
mod error;
mod frame;
mod marker;
mod output;
mod params;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::frame::{detect_source, load_frame};
use crate::marker::MarkerStyle;
use crate::output::{annotate_and_save, resolve_output_path};
use crate::params::{parse_color, parse_point, validate_corners, validate_thickness};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), error::MarkError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(error::MarkError::Config)?;

    // Resolve the frame source
    let source = detect_source(cli.input.as_deref(), cli.blank.as_deref())
        .map_err(error::MarkError::InvalidArgument)?;

    // Resolve marker style: CLI flags win over config values
    let top_left = parse_point(cli.top_left.as_deref().unwrap_or(&config.marker.top_left))
        .map_err(error::MarkError::InvalidArgument)?;
    let bottom_right =
        parse_point(cli.bottom_right.as_deref().unwrap_or(&config.marker.bottom_right))
            .map_err(error::MarkError::InvalidArgument)?;
    let color = parse_color(cli.color.as_deref().unwrap_or(&config.marker.color))
        .map_err(error::MarkError::InvalidArgument)?;
    let thickness = cli.thickness.unwrap_or(config.marker.thickness);

    validate_corners(top_left, bottom_right).map_err(error::MarkError::InvalidArgument)?;
    validate_thickness(thickness).map_err(error::MarkError::InvalidArgument)?;

    let style = MarkerStyle { top_left, bottom_right, color, thickness };

    if cli.verbose {
        eprintln!("Source: {source:?}");
        eprintln!("Marker: {style:?}");
    }

    // Annotate and save
    let mut frame = load_frame(&source)?;
    let output_path = resolve_output_path(cli.output.as_deref(), &config.output.path);

    annotate_and_save(&mut frame, &style, &output_path)?;
    eprintln!("Saved: {}", output_path.display());

    Ok(())
}
