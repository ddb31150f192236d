// ABOUTME: Main entry point for the reveal-slides program.
// ABOUTME: Provides the `generate` command that writes the demo deck.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use reveal_slides::{demo, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the presentation HTML (the default)
    Generate(GenerateArgs),
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Path to output HTML file (defaults to $REVEAL_SLIDES_OUTPUT or reveal.js/index.html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let deck = demo::demo_presentation();

    if args.stdout {
        print!("{}", deck.generate_html());
        return Ok(());
    }

    let config = Config::from_env()?.with_output(args.output.clone());
    deck.save_to_file(&config.output_path)
        .with_context(|| format!("Failed to write presentation to {:?}", config.output_path))?;

    info!("Open {:?} in your browser to view the presentation", config.output_path);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Generate(args)) => generate(args),
        None => generate(&GenerateArgs::default()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
