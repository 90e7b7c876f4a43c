//! Command line arguments backing the `ocrion` binary.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "ocrion",
  about = "A CLI tool for reconstructing reading order from OCR text detections",
  version
)]
pub struct Args {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Order detections and print the assembled text
  Order {
    /// Detection file (JSON) produced by a text detector
    input: PathBuf,

    /// Source image width in pixels, overriding the detection file
    #[arg(long, short = 'W')]
    width: Option<u32>,

    /// Source image height in pixels, overriding the detection file
    #[arg(long, short = 'H')]
    height: Option<u32>,

    /// Layout configuration file (JSON)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Print ordered blocks and metadata as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Disable verbose output
    #[arg(long, short = 'q')]
    quiet: bool,
  },
}
