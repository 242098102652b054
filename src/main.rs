//! Arena Deck - a terminal dashboard for the BLG Arena community
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// Arena Deck - browse game servers, vote, and run the back office
#[derive(Parser, Debug)]
#[command(name = "adeck")]
#[command(about = "A terminal dashboard for the BLG Arena game server community", long_about = None)]
struct Args {
    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the seeded registries as JSON and exit (no TUI)
    #[arg(long)]
    dump: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.dump {
        // Headless mode owns stdout; skip the file logger entirely
        return dump_seed();
    }

    // Logging goes to a file since the TUI owns stdout
    adeck_core::logging::init()?;

    let config_file = args.config.unwrap_or_else(adeck_app::config_path);
    tracing::info!("Config file: {}", config_file.display());
    let settings = adeck_app::load_settings(&config_file);

    adeck_tui::run(settings)?;
    Ok(())
}

/// Serialize the seed data set to stdout
fn dump_seed() -> color_eyre::Result<()> {
    let payload = serde_json::json!({
        "servers": adeck_app::seed::seed_servers(),
        "users": adeck_app::seed::seed_users(),
        "partners": adeck_app::seed::seed_partners(),
        "tickets": adeck_app::seed::seed_tickets(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
