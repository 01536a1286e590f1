use anyhow::Result;
use clap::{Parser, Subcommand};

use alokasi::cli::{handle_calc_command, CalcArgs};
use alokasi::config::{paths::AlokasiPaths, settings::Settings};
use alokasi::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "alokasi",
    version,
    about = "Terminal budget allocator",
    long_about = "Alokasi spreads a budget across income and expense rows and \
                  tells you what is left: a surplus, a shortfall, or \
                  everything allocated."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Compute the remaining balance from command-line entries
    Calc(CalcArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AlokasiPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            paths.ensure_directories()?;
            logging::init(&settings.log_level, LogTarget::File(paths.log_file()))?;
            alokasi::tui::run_tui(&settings)?;
        }
        Some(Commands::Calc(args)) => {
            logging::init(&settings.log_level, LogTarget::Stderr)?;
            handle_calc_command(&settings, args)?;
        }
        Some(Commands::Config { save }) => {
            println!("Alokasi Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Default budget:    {}",
                settings
                    .default_budget
                    .map(|b| settings.money_format().format(b))
                    .unwrap_or_else(|| "(none)".to_string())
            );
            println!("  Display precision: {}", settings.display_precision);
            println!("  Log level:         {}", settings.log_level);

            if save {
                settings.save(&paths)?;
                println!();
                println!("Saved {}", paths.settings_file().display());
            }
        }
    }

    Ok(())
}
