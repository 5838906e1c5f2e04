//! CLI argument parsing with clap.

use clap::Parser;

/// Frame annotation CLI - draws a marker rectangle and saves the result.
#[derive(Parser, Debug)]
#[command(name = "framemark", version, about)]
pub struct Cli {
    /// Path to the input image to annotate.
    #[arg(conflicts_with = "blank")]
    pub input: Option<String>,

    /// Synthesize a blank frame of the given size (e.g., 640x480) instead of
    /// reading a file.
    #[arg(short, long, conflicts_with = "input")]
    pub blank: Option<String>,

    /// Top-left corner of the marker as `x,y` (config default: 0,0).
    #[arg(long)]
    pub top_left: Option<String>,

    /// Bottom-right corner of the marker as `x,y` (config default: 50,50).
    #[arg(long)]
    pub bottom_right: Option<String>,

    /// Marker color as `r,g,b` (config default: 255,0,0).
    #[arg(short, long)]
    pub color: Option<String>,

    /// Stroke thickness in pixels (config default: 5).
    #[arg(short, long)]
    pub thickness: Option<u32>,

    /// Output file path (config default: images/last.png).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_input() {
        let cli = Cli::parse_from(["framemark", "frame.png"]);
        assert_eq!(cli.input.as_deref(), Some("frame.png"));
        assert!(cli.blank.is_none());
    }

    #[test]
    fn blank_flag() {
        let cli = Cli::parse_from(["framemark", "-b", "640x480"]);
        assert!(cli.input.is_none());
        assert_eq!(cli.blank.as_deref(), Some("640x480"));
    }

    #[test]
    fn input_conflicts_with_blank() {
        let result = Cli::try_parse_from(["framemark", "frame.png", "-b", "640x480"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["framemark", "frame.png"]);
        assert!(cli.top_left.is_none());
        assert!(cli.bottom_right.is_none());
        assert!(cli.color.is_none());
        assert!(cli.thickness.is_none());
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "framemark",
            "--top-left",
            "10,10",
            "--bottom-right",
            "90,90",
            "-c",
            "0,255,0",
            "-t",
            "3",
            "-o",
            "out/frame.png",
            "-v",
            "frame.png",
        ]);
        assert_eq!(cli.top_left.as_deref(), Some("10,10"));
        assert_eq!(cli.bottom_right.as_deref(), Some("90,90"));
        assert_eq!(cli.color.as_deref(), Some("0,255,0"));
        assert_eq!(cli.thickness, Some(3));
        assert_eq!(cli.output.as_deref(), Some("out/frame.png"));
        assert!(cli.verbose);
        assert_eq!(cli.input.as_deref(), Some("frame.png"));
    }
}
