use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

mod generate;
mod normalize;
mod render;
mod types;
mod utils;

pub use types::*;

/// Dataset location relative to the visualization directory
pub const DATA_FILE: &str = "../../data.json";
pub const OUTPUT_DIR: &str = "static-pages";
/// Site-relative path the SPA is deployed under
pub const BASE_PATH: &str = "/desiertos-latinoamerica/experiments/d3-viz";
pub const SITE_ORIGIN: &str = "https://coldfoot.studio";

#[derive(Parser)]
#[command(name = "desiertos-pages")]
#[command(about = "Static redirect pages with OG tags for the Desiertos visualization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one redirect page per country, region and city
    Generate {
        /// Input dataset JSON file
        #[arg(long, default_value = DATA_FILE)]
        data: String,
        /// Output directory for the generated pages
        #[arg(long, default_value = OUTPUT_DIR)]
        output: String,
        /// Site-relative base path the SPA is served under
        #[arg(long, default_value = BASE_PATH)]
        base_path: String,
        /// Origin prepended to the base path for og:url
        #[arg(long, default_value = SITE_ORIGIN)]
        origin: String,
    },
    /// Remove the generated output directory
    Clean {
        /// Output directory to remove
        #[arg(long, default_value = OUTPUT_DIR)]
        output: String,
    },
}

fn run_clean(output: &str) -> Result<()> {
    let path = Path::new(output);
    if path.exists() {
        fs::remove_dir_all(path)?;
        println!("Removed {}/", output);
    } else {
        println!("Nothing to clean ({}/ does not exist)", output);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { data, output, base_path, origin } => {
            let config = generate::Config {
                data_file: data.into(),
                output_dir: output.into(),
                base_url: format!("{}{}", origin, base_path),
                base_path,
            };
            generate::run_generate(&config)
        }
        Commands::Clean { output } => run_clean(&output),
    }
}
