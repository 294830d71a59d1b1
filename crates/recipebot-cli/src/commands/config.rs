use std::path::PathBuf;

use clap::Subcommand;
use recipebot_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the default config path
    Path,
    /// Write a config template to fill in
    Init {
        /// Target file (defaults to the standard location)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print the effective config
    Show {
        /// Config file to read (defaults to the standard location)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Path => {
            println!("{}", Config::default_path().display());
        }
        ConfigAction::Init { path } => {
            let target = path.unwrap_or_else(Config::default_path);
            if target.exists() {
                eprintln!("config already exists: {}", target.display());
                std::process::exit(1);
            }
            Config::default().save_to(&target)?;
            println!("wrote {}", target.display());
        }
        ConfigAction::Show { path } => {
            let target = path.unwrap_or_else(Config::default_path);
            let config = Config::load_from(&target)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
