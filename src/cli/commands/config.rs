use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::table::Table;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
    } = &cli.command
    else {
        return Ok(());
    };

    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    if !print_config && !check {
        println!("📄 Configuration file: {}", path.display());
        return Ok(());
    }

    // ---- PRINT CONFIG ----
    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    // ---- CHECK SOURCES ----
    if *check {
        header("Snapshot sources");

        let checks = cfg.check();
        let mut table = Table::new(&["source", "file", "found"]);
        for c in &checks {
            table.add_row(vec![
                c.name.to_string(),
                c.path.display().to_string(),
                crate::utils::yes_no(c.exists).to_string(),
            ]);
        }
        print!("{}", table.render());

        let missing = checks.iter().filter(|c| !c.exists).count();
        if missing == 0 {
            success("All snapshot files found.");
        } else {
            warning(format!(
                "{missing} snapshot file(s) missing: those dashboards will be empty."
            ));
        }
    }

    Ok(())
}
