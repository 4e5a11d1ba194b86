// region:       -- Modules
mod error;
mod utils;

pub use self::error::{Error, Result};

use crate::utils::cli::{icon_res, txt_res, wrap_to_term};
use ai_research_core::{Config, Researcher, RunReport};
use tracing_subscriber::EnvFilter;

// endregion:    -- Modules

const DEFAULT_CONFIG_FILE: &str = "research.toml";
const ENV_CONFIG_FILE: &str = "RESEARCH_CONFIG";

#[tokio::main]
async fn main() {
    // NOTE: A missing .env is fine; the key may already be in the environment.
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(e) = start().await {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

async fn start() -> Result<()> {
    let config_file =
        std::env::var(ENV_CONFIG_FILE).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = Config::load_or_default(&config_file)?;

    let researcher = Researcher::from_env(config)?;
    let report = researcher.run().await?;

    for line in report_lines(&report) {
        println!("{line}");
    }

    if let Some(reply) = report.reply {
        println!("\n{} {}", icon_res(), txt_res(wrap_to_term(&reply)));
    }

    Ok(())
}

/// The identifier lines, in print order.
fn report_lines(report: &RunReport) -> [String; 3] {
    [
        format!("Assistant ID: {}", report.assistant_id),
        format!("Thread ID: {}", report.thread_id),
        format!("Run ID: {}", report.run_id),
    ]
}

fn error_line(err: &Error) -> String {
    format!("Error: {err}")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// region:       -- Tests


// endregion:    -- Tests
