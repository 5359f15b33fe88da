use anyhow::{anyhow, Context};
use clap::Parser;
use smartnode_node::service::{drain_outbound, log_sync_events, run_maintenance};
use smartnode_node::{NodeConfig, NodeContext, StaticNetworkSize};
use smartnode_sync::{QueuedNetworkDriver, SystemClock};
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Smartnode daemon
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network to run on (main, test, dev, regtest)
    #[arg(long)]
    network: Option<String>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Path to the log file (optional). If not provided, logs will only go to stdout.
    #[arg(long)]
    log_file: Option<String>,

    /// Peers to sync from
    #[arg(short, long, value_delimiter = ',')]
    peers: Option<Vec<String>>,

    /// Masternode population used for quorum sizing
    #[arg(long)]
    masternode_count: Option<usize>,

    /// Use reduced LLMQ parameters
    #[arg(long)]
    low_llmq_params: bool,

    /// Devnet only: quorum type that signs chain-locks
    #[arg(long)]
    chain_locks_quorum: Option<String>,
}

/// Installs the global subscriber. `log` records from the library crates are
/// forwarded into it.
fn init_tracing(level: &str, log_file: Option<&str>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create log file {}", path))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("setting default subscriber failed: {}", e))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .try_init()
                .map_err(|e| anyhow!("setting default subscriber failed: {}", e))?;
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = args.log_level.clone().unwrap_or_else(|| "info".to_string());
    let _log_guard = init_tracing(&level, args.log_file.as_deref())?;

    let mut cfg = NodeConfig::load_or_default();

    // Override config with CLI arguments if provided
    if let Some(network) = args.network {
        cfg.network = network;
    }
    if let Some(log_level) = args.log_level {
        cfg.log_level = log_level;
    }
    if args.log_file.is_some() {
        cfg.log_file = args.log_file;
    }
    if let Some(peers) = args.peers {
        cfg.seed_peers = peers;
    }
    if let Some(count) = args.masternode_count {
        cfg.masternode_count = count;
    }
    if args.low_llmq_params {
        cfg.low_llmq_params = true;
    }
    if args.chain_locks_quorum.is_some() {
        cfg.chain_locks_quorum = args.chain_locks_quorum;
    }

    info!("Loaded configuration: {:#?}", cfg);

    let chain_params = match cfg.chain_params().and_then(|p| p.validate().map(|_| p)) {
        Ok(params) => params,
        Err(e) => {
            if e.is_fatal() {
                error!("Fatal startup check failed: {}", e);
            } else {
                error!("Invalid configuration: {}", e);
            }
            return Err(e.into());
        }
    };
    info!(
        "Starting {} network, default port {}, chain-locks {}, instant-send {}",
        chain_params.network,
        chain_params.default_port,
        chain_params.chain_locks_quorum,
        chain_params.instant_send_quorum
    );

    let driver = Arc::new(QueuedNetworkDriver::new(cfg.seed_peers.clone()));
    let estimator = Arc::new(StaticNetworkSize::new(cfg.masternode_count, cfg.low_llmq_params));
    let ctx = Arc::new(NodeContext::new(
        chain_params,
        cfg.sync.clone(),
        Arc::new(SystemClock),
        driver.clone(),
        estimator,
    ));

    let (shutdown_sender, _shutdown_receiver) = broadcast::channel(1);

    let tick = Duration::from_secs(u64::try_from(cfg.sync.tick_secs).unwrap_or(1).max(1));
    let handles = vec![
        tokio::spawn(run_maintenance(ctx.clone(), tick, shutdown_sender.subscribe())),
        tokio::spawn(log_sync_events(ctx.sync().subscribe(), shutdown_sender.subscribe())),
        tokio::spawn(drain_outbound(driver, Duration::from_secs(1), shutdown_sender.subscribe())),
    ];

    info!("Node is running. Press Ctrl+C to shut down gracefully.");

    signal::ctrl_c().await.context("Failed to listen for ctrl-c event")?;
    info!("Ctrl+C received, sending shutdown signal.");
    let _ = shutdown_sender.send(());

    for handle in handles {
        if let Err(e) = handle.await {
            error!("Background task ended abnormally: {}", e);
        }
    }

    info!("Final sync status: {}", ctx.sync().sync_status());

    // Store the updated configuration
    match cfg.store() {
        Ok(_) => info!("Configuration updated and stored."),
        Err(e) => error!("Failed to store configuration: {:?}", e),
    };

    Ok(())
}
