mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Commands};
use ocrion_ocr::{OcrInput, PrecomputedDetections};
use ocrion_rs::{DocumentOptions, DocumentProcessor, LayoutConfig};

#[tokio::main]
async fn main() {
  let args = Args::parse();

  if let Err(e) = run(args).await {
    eprintln!("Error: {:#}", e);
    std::process::exit(1);
  }
}

async fn run(args: Args) -> Result<()> {
  match args.command {
    Commands::Version => {
      println!("ocrion {}", env!("CARGO_PKG_VERSION"));
      Ok(())
    }
    Commands::Order {
      input,
      width,
      height,
      config,
      json,
      quiet,
    } => {
      logging::init(!quiet)?;

      let layout = match config {
        Some(path) => LayoutConfig::from_file(path)?,
        None => LayoutConfig::default(),
      };

      let options = DocumentOptions {
        layout,
        image_width: width,
        image_height: height,
      };

      let engine = PrecomputedDetections::new();
      let processor = DocumentProcessor::new(&engine, options);
      let document = processor
        .process(&OcrInput::FilePath(input.clone()))
        .await
        .with_context(|| format!("Failed to process {}", input.display()))?;

      if json {
        let rendered =
          serde_json::to_string_pretty(&document).context("Failed to serialize document")?;
        println!("{}", rendered);
      } else {
        println!("{}", document.text);
      }
      Ok(())
    }
  }
}
