//! lzwtext CLI
//! Usage:
//!   lzwtext compress <input_file> <output_file> [--scheme lzw]
//!   lzwtext decompress <input_file> <output_file>

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lzwtext::Scheme;

#[derive(Parser)]
#[command(name = "lzwtext", version, about = "LZW compression for text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a UTF-8 text file into an archive
    Compress {
        input: PathBuf,
        output: PathBuf,
        /// Compression scheme
        #[arg(long, default_value_t = Scheme::Lzw)]
        scheme: Scheme,
    },
    /// Decompress an archive back into UTF-8 text
    Decompress {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lzwtext=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let (input_len, output_len) = match cli.command {
        Commands::Compress { input, output, scheme } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let bytes = lzwtext::pack_archive(&text, scheme)
                .with_context(|| format!("Failed to compress {}", input.display()))?;
            fs::write(&output, &bytes)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            (text.len(), bytes.len())
        }
        Commands::Decompress { input, output } => {
            let bytes = fs::read(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let text = lzwtext::unpack_archive(&bytes)
                .with_context(|| format!("Failed to decompress {}", input.display()))?;
            fs::write(&output, &text)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            (bytes.len(), text.len())
        }
    };

    println!("Done. {} bytes → {} bytes", input_len, output_len);
    Ok(())
}
