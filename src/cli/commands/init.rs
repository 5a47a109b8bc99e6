use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes:
///  - the configuration file (default location or `--config`)
///  - the settings file with default values
///  - the snapshot data directory, when the sources live in the default one
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { force } = &cli.command else {
        return Ok(());
    };

    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing rAttendance…");

    if path.exists() && !force {
        info(format!(
            "Config file already present: {} (use --force to rewrite)",
            path.display()
        ));
    } else {
        Config::default().save(&path)?;
        success(format!("Config file written: {}", path.display()));
    }

    let cfg = Config::load(Some(path.as_path()))?;

    let mut store = cfg.settings_store();
    if store.path().exists() && !force {
        info(format!("Settings file kept: {}", store.path().display()));
    } else {
        store.reset()?;
        success(format!("Settings file written: {}", store.path().display()));
    }

    let data_dir = Config::config_dir().join("data");
    if cfg.check().iter().any(|c| c.path.starts_with(&data_dir)) {
        std::fs::create_dir_all(&data_dir)?;
        info(format!("Snapshot directory: {}", data_dir.display()));
    }

    println!("🎉 rAttendance initialization completed!");
    Ok(())
}
