use crate::config::settings::Feature;
use crate::core::{AttendanceCriteria, DateRange, LogCriteria, Presence, StatusFilter};
use crate::errors::AppResult;
use crate::export::{ExportFormat, ReportKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin reporting CLI: attendance, departments and smart-contract logs from JSON snapshots",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file (useful for tests or several setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Date bounds shared by every dashboard.
#[derive(Args, Debug, Clone, Default)]
pub struct DateArgs {
    #[arg(
        long,
        value_name = "RANGE",
        help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, a:b, all)"
    )]
    pub range: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "First day included")]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Last day included")]
    pub to: Option<String>,
}

impl DateArgs {
    pub fn range(&self) -> AppResult<DateRange> {
        DateRange::from_inputs(
            self.range.as_deref(),
            self.from.as_deref(),
            self.to.as_deref(),
        )
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct AttendanceArgs {
    #[arg(long, value_name = "DID", help = "Only this employee")]
    pub employee: Option<String>,

    #[arg(long, value_name = "ID", help = "Only employees of this department")]
    pub department: Option<String>,

    #[arg(long, help = "Status (all, completed, absent, leave, sick or the source label)")]
    pub status: Option<String>,

    #[arg(long = "onchain", value_name = "WHICH", help = "all, onchain or offchain")]
    pub on_chain: Option<String>,

    #[arg(long, short, help = "Search employee DID, name or transaction hash")]
    pub search: Option<String>,

    #[command(flatten)]
    pub dates: DateArgs,
}

impl AttendanceArgs {
    pub fn criteria(&self) -> AppResult<AttendanceCriteria> {
        let mut c = AttendanceCriteria::default().with_dates(self.dates.range()?);
        if let Some(did) = &self.employee {
            c = c.with_employee(did.as_str());
        }
        if let Some(id) = &self.department {
            c = c.with_department(id.as_str());
        }
        if let Some(s) = &self.status {
            c = c.with_status(s.parse::<StatusFilter<_>>()?);
        }
        if let Some(p) = &self.on_chain {
            c = c.with_on_chain(p.parse::<Presence>()?);
        }
        if let Some(term) = &self.search {
            c = c.with_search(term);
        }
        Ok(c)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    #[arg(long, short, help = "Search transaction hash, contract address or function")]
    pub search: Option<String>,

    #[arg(long, help = "Status (all, success, failed, pending)")]
    pub status: Option<String>,

    #[arg(long, value_name = "ADDRESS", help = "Contract address contains")]
    pub contract: Option<String>,

    #[arg(long, value_name = "NAME", help = "Function name contains")]
    pub function: Option<String>,

    #[command(flatten)]
    pub dates: DateArgs,
}

impl LogArgs {
    pub fn criteria(&self) -> AppResult<LogCriteria> {
        let mut c = LogCriteria::default().with_dates(self.dates.range()?);
        if let Some(term) = &self.search {
            c = c.with_search(term);
        }
        if let Some(s) = &self.status {
            c = c.with_status(s.parse::<StatusFilter<_>>()?);
        }
        if let Some(a) = &self.contract {
            c = c.with_contract(a.as_str());
        }
        if let Some(f) = &self.function {
            c = c.with_function(f.as_str());
        }
        Ok(c)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration and settings files
    Init {
        #[arg(long, short = 'f', help = "Overwrite existing files")]
        force: bool,
    },

    /// Show the configuration file or check the snapshot sources
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check that every snapshot file exists")]
        check: bool,
    },

    /// Show or change the system settings
    Settings {
        #[arg(long, value_enum, value_name = "FEATURE", help = "Turn a feature on")]
        enable: Option<Feature>,

        #[arg(long, value_enum, value_name = "FEATURE", help = "Turn a feature off")]
        disable: Option<Feature>,

        #[arg(long, value_name = "DAYS", help = "Log retention in days (7 to 365)")]
        retention: Option<u32>,

        #[arg(long, help = "Restore the default settings")]
        reset: bool,
    },

    /// Probe the configured sources and print the health board
    Health,

    /// Attendance dashboard: joined records and statistics
    Attendance {
        #[command(flatten)]
        filters: AttendanceArgs,

        #[arg(long, help = "Print only the statistics")]
        stats: bool,
    },

    /// Smart-contract transaction logs
    Logs {
        #[command(flatten)]
        filters: LogArgs,

        #[arg(long, value_name = "HASH", help = "Show one transaction and its events")]
        detail: Option<String>,
    },

    /// Departments with members and manager
    Departments {
        #[arg(long, value_name = "ID", help = "Show a single department in detail")]
        id: Option<String>,
    },

    /// Export a filtered report
    Export {
        #[arg(long, value_enum, default_value = "attendance")]
        report: ReportKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", help = "Output directory (default: export_dir)")]
        dir: Option<PathBuf>,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: AttendanceArgs,

        #[arg(long, value_name = "ADDRESS", help = "Logs report: contract address contains")]
        contract: Option<String>,

        #[arg(long, value_name = "NAME", help = "Logs report: function name contains")]
        function: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, TxStatus};

    #[test]
    fn attendance_flags_become_criteria() {
        let cli = Cli::parse_from([
            "rattendance",
            "attendance",
            "--status",
            "completed",
            "--onchain",
            "offchain",
            "--from",
            "2025-09-01",
            "--search",
            "an",
        ]);
        let Commands::Attendance { filters, stats } = cli.command else {
            panic!("expected attendance");
        };
        assert!(!stats);

        let c = filters.criteria().unwrap();
        assert_eq!(c.status, StatusFilter::Only(AttendanceStatus::Completed));
        assert_eq!(c.on_chain, Presence::Absent);
        assert!(c.dates.start.is_some());
        assert!(c.dates.end.is_none());
    }

    #[test]
    fn bad_tokens_are_rejected() {
        let args = AttendanceArgs {
            on_chain: Some("maybe".into()),
            ..Default::default()
        };
        assert!(args.criteria().is_err());

        let args = LogArgs {
            dates: DateArgs {
                from: Some("2025-09-10".into()),
                to: Some("2025-09-01".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(args.criteria().is_err());
    }

    #[test]
    fn log_status_all_is_unconstrained() {
        let args = LogArgs {
            status: Some("ALL".into()),
            ..Default::default()
        };
        assert_eq!(args.criteria().unwrap().status, StatusFilter::<TxStatus>::All);
    }
}
