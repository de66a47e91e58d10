use std::{env, io::Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use orchestrator::configs::{DEFAULT_LIMIT, SessionConfig};

/// Overrides the scoring service location.
const BASE_URL_VAR: &str = "PMS_BASE_URL";

/// Plays the scoring challenge: fits a model on the served dataset, submits predictions once a
/// second until the target score is reached and prints the token handed out at the end.
#[derive(Parser, Debug)]
#[command(name = "pms-solver", version, about)]
struct Cli {
    /// Session identifier, a random one is generated when missing
    #[arg(short, long)]
    id: Option<String>,

    /// Score at which to stop predicting
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    limit: f64,
}

impl Cli {
    fn into_config(self) -> SessionConfig {
        let mut config = SessionConfig {
            id: self.id,
            limit: self.limit,
            ..SessionConfig::default()
        };

        if let Ok(url) = env::var(BASE_URL_VAR) {
            config.client.base_url = url;
        }

        config
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}:{}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let config = Cli::parse().into_config();
    let summary = orchestrator::solve(config)
        .inspect_err(|e| error!("run failed: {e}"))
        .context("run failed")?;

    info!(
        "session {} done: score {}, {} predictions, {} retrains",
        summary.session_id, summary.score, summary.iterations, summary.retrains
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_generated_id_and_large_limit() {
        let cli = Cli::try_parse_from(["pms-solver"]).unwrap();
        assert_eq!(cli.id, None);
        assert_eq!(cli.limit, 999_999.0);
    }

    #[test]
    fn short_and_long_flags_are_accepted() {
        let cli = Cli::try_parse_from(["pms-solver", "-i", "abc", "--limit", "0"]).unwrap();
        let config = cli.into_config();
        assert_eq!(config.id.as_deref(), Some("abc"));
        assert_eq!(config.limit, 0.0);
        assert_eq!(config.warmup_rounds, 30);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["pms-solver", "--rounds", "3"]).is_err());
    }
}
