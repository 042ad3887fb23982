mod generate;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use leadgen_core::{AppConfig, Catalog};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadgen-cli")]
#[command(about = "Synthetic sales-lead generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a batch of leads and write it to a workbook
    Generate {
        /// Number of leads; non-numeric or zero values fall back to 50
        #[arg(long)]
        count: Option<String>,

        /// Comma-separated industries
        #[arg(long)]
        industries: Option<String>,

        /// Comma-separated locations
        #[arg(long)]
        locations: Option<String>,

        /// Comma-separated company sizes
        #[arg(long)]
        sizes: Option<String>,

        /// Comma-separated job titles
        #[arg(long)]
        titles: Option<String>,

        /// Directory to write the workbook to (defaults to `LEADGEN_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Summarize a lead workbook
    Inspect {
        /// Workbook to read; the latest one in the output directory if omitted
        #[arg(long)]
        file: Option<PathBuf>,

        /// Directory to search for the latest workbook
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    Ok(match &config.catalog_path {
        Some(path) => leadgen_core::load_catalog(path)?,
        None => Catalog::builtin(),
    })
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = leadgen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate {
            count,
            industries,
            locations,
            sizes,
            titles,
            output_dir,
        }) => {
            let catalog = load_catalog(&config)?;
            let args = generate::GenerateArgs {
                count,
                industries,
                locations,
                sizes,
                titles,
            };
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            generate::run_generate(&config, &catalog, &args, &output_dir)?;
        }
        Some(Commands::Inspect { file, output_dir }) => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            inspect::run_inspect(file.as_deref(), &output_dir, config.preview_rows)?;
        }
        None => println!("leadgen-cli: run `leadgen-cli --help` for available commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
