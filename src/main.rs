//! rAttendance main entrypoint.

use rattendance::run;
use rattendance::ui::messages::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    println!();
    if let Err(e) = run().await {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
