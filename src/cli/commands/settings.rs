use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, info, success, warning};
use crate::utils::yes_no;

/// Handle the `settings` subcommand: apply changes first, then print.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Settings {
        enable,
        disable,
        retention,
        reset,
    } = cmd
    else {
        return Ok(());
    };

    let mut store = cfg.settings_store();

    if *reset {
        store.reset()?;
        success("Settings restored to defaults.");
    }

    if let Some(feature) = enable {
        store.set_feature(*feature, true)?;
        success(format!("{} enabled.", feature.label()));
    }

    if let Some(feature) = disable {
        store.set_feature(*feature, false)?;
        success(format!("{} disabled.", feature.label()));
    }

    if let Some(days) = retention {
        let stored = store.set_retention_days(*days)?;
        if stored != *days {
            warning(format!("Retention must be between 7 and 365 days: stored {stored}."));
        } else {
            success(format!("Log retention set to {stored} days."));
        }
    }

    let s = store.settings();
    header("System settings");
    field("AI analysis", yes_no(s.enable_ai_features));
    field("Blockchain sync", yes_no(s.auto_sync_blockchain));
    field("Realtime notifications", yes_no(s.enable_notifications));
    field("Maintenance mode", yes_no(s.maintenance_mode));
    field("Log retention (days)", s.data_retention_days);

    let active = s.active_features();
    println!();
    if active.is_empty() {
        info("No feature enabled.");
    } else {
        info(format!("Active features: {}", active.join(", ")));
    }

    Ok(())
}
