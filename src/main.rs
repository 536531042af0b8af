use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gauge_votes::{
    build_voting_actions, plan_batches, transaction_details, transaction_summary_msg,
    ExpiredGauges, RelayClient, VoteEntry, VotingRequest,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gauge-votes", about = "Batch gauge weight votes into submissions")]
struct Cli {
    /// JSON array of {"gaugeAddress", "weight"} entries
    #[arg(long, global = true, default_value = "votes.json")]
    votes: PathBuf,

    /// JSON array of expired gauge addresses
    #[arg(long, global = true)]
    expired: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the padded batches and their labels
    Plan,
    /// Show the transaction summary and details
    Summary,
    /// Submit every batch, one after another, through a relay
    Submit {
        #[arg(long, env = "GAUGE_VOTES_RELAY")]
        endpoint: String,

        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn load_request(cli: &Cli) -> Result<VotingRequest> {
    let votes: Vec<VoteEntry> = read_json(&cli.votes)?;
    let expired_gauges = match &cli.expired {
        Some(path) => read_json::<Vec<String>>(path)?.into_iter().collect(),
        None => ExpiredGauges::new(),
    };
    Ok(VotingRequest::new(votes, expired_gauges))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let request = load_request(&cli)?;

    match &cli.command {
        Command::Plan => {
            let plans = plan_batches(&request);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plans)?);
                return Ok(());
            }

            println!("{} votes in {} batches\n", request.votes.len(), plans.len());
            for (i, plan) in plans.iter().enumerate() {
                println!(
                    "Batch {} - {}{}",
                    i + 1,
                    plan.label,
                    plan.step_tooltip
                        .as_deref()
                        .map(|t| format!(" ({})", t))
                        .unwrap_or_default()
                );
                for (slot, (gauge, weight)) in plan
                    .batch
                    .gauge_addresses()
                    .iter()
                    .zip(plan.batch.weights().iter())
                    .enumerate()
                {
                    let marker = if plan.batch.is_placeholder(slot) { "  (pad)" } else { "" };
                    println!("  {} {:>24}{}", gauge, weight, marker);
                }
            }
        }
        Command::Summary => {
            let details = transaction_details(&request.votes);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                println!("{}", transaction_summary_msg(&request.votes));
                for (gauge, weight) in details.gauge_addresses.iter().zip(details.votes.iter()) {
                    println!("  {} {}", gauge, weight);
                }
            }
        }
        Command::Submit {
            endpoint,
            timeout_secs,
        } => {
            let relay = RelayClient::with_timeout(endpoint.as_str(), Duration::from_secs(*timeout_secs));
            let actions = build_voting_actions(&request, Arc::new(relay));
            tracing::info!(
                "{} via {} ({} batches)",
                transaction_summary_msg(&request.votes),
                endpoint,
                actions.len()
            );

            for action in actions.iter() {
                let handle = action
                    .execute()
                    .await
                    .with_context(|| format!("Batch {} ({}) failed", action.index() + 1, action.label))?;
                println!("✓ {} [batch {}]: {}", action.label, action.index() + 1, handle.tx_hash);
            }
        }
    }

    Ok(())
}
