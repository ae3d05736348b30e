//! StratLab CLI — support, trade, and export commands.
//!
//! Commands:
//! - `support` — queue tickets and process them with an ordering strategy
//! - `trade` — run one decision cycle per symbol against a paper exchange
//! - `export` — build an exporter bundle for a tier and export it
//!
//! Every command accepts `--config <file.toml>`; flags override the file.
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stratlab_core::components::{
    run_export, DestinationStore, DirectoryStore, ExportJob, ExportTiers, MemoryStore,
};
use stratlab_core::config::StratlabConfig;
use stratlab_core::domain::PriceSeries;
use stratlab_core::trading::{PaperExchange, TradeAction, TradingBot};

#[derive(Parser)]
#[command(
    name = "stratlab",
    about = "StratLab CLI — swap strategies and exporter tiers at runtime"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue support tickets and process them.
    Support {
        /// Ordering strategy: fifo, filo, random.
        #[arg(long)]
        strategy: Option<String>,

        /// Seed for ticket ids and the random ordering.
        #[arg(long)]
        seed: Option<u64>,

        /// Ticket as "customer:issue". Repeatable.
        #[arg(long = "ticket", required = true)]
        tickets: Vec<String>,
    },
    /// Run one trading cycle per symbol against a paper exchange.
    Trade {
        /// Symbols to trade. Defaults to the configured symbols.
        #[arg(long = "symbol")]
        symbols: Vec<String>,

        /// Comma-separated price history loaded for every symbol, oldest first.
        #[arg(long, value_delimiter = ',')]
        prices: Vec<f64>,

        /// Decision strategy: average, min_max.
        #[arg(long)]
        strategy: Option<String>,

        /// Order size per trade.
        #[arg(long)]
        quantity: Option<f64>,

        /// Window size for the average strategy.
        #[arg(long)]
        window: Option<usize>,

        /// Lower band for the min_max strategy.
        #[arg(long)]
        min_price: Option<f64>,

        /// Upper band for the min_max strategy.
        #[arg(long)]
        max_price: Option<f64>,
    },
    /// Build and export a bundle for a quality tier.
    Export {
        /// Quality tier: low, high, master.
        #[arg(long)]
        tier: Option<String>,

        /// Destination folder.
        #[arg(long)]
        folder: Option<PathBuf>,

        /// Keep artifacts in memory instead of writing manifests.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StratlabConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StratlabConfig::default(),
    };

    match cli.command {
        Commands::Support {
            strategy,
            seed,
            tickets,
        } => {
            if let Some(strategy) = strategy {
                config.support.strategy = strategy;
            }
            if seed.is_some() {
                config.support.seed = seed;
            }
            run_support(&config, &tickets)
        }
        Commands::Trade {
            symbols,
            prices,
            strategy,
            quantity,
            window,
            min_price,
            max_price,
        } => {
            if !symbols.is_empty() {
                config.trading.symbols = symbols;
            }
            if let Some(strategy) = strategy {
                config.trading.strategy = strategy;
            }
            if let Some(quantity) = quantity {
                config.trading.quantity = quantity;
            }
            if let Some(window) = window {
                config.trading.params.average.window_size = window;
            }
            if let Some(min_price) = min_price {
                config.trading.params.band.min_price = min_price;
            }
            if let Some(max_price) = max_price {
                config.trading.params.band.max_price = max_price;
            }
            config.validate()?;
            run_trade(&config, &prices)
        }
        Commands::Export {
            tier,
            folder,
            dry_run,
        } => {
            if let Some(tier) = tier {
                config.export.tier = tier;
            }
            if let Some(folder) = folder {
                config.export.folder = folder;
            }
            run_export_cmd(&config, dry_run)
        }
    }
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

fn run_support(config: &StratlabConfig, tickets: &[String]) -> Result<()> {
    let orderings = config.support.orderings();
    let mut desk = config.support.desk();

    for raw in tickets {
        let Some((customer, issue)) = raw.split_once(':') else {
            bail!("ticket must be \"customer:issue\", got {raw:?}");
        };
        desk.submit(customer.trim(), issue.trim());
    }

    let report = desk.process_with(&orderings, &config.support.strategy)?;
    if report.is_empty() {
        println!("There are no tickets to process. Well done!");
        return Ok(());
    }

    for ticket in &report.processed {
        println!("=====================================");
        println!("Processing ticket id: {}.", ticket.id());
        println!("Customer: {}.", ticket.customer());
        println!("Issue: {}.", ticket.issue());
    }
    println!("=====================================");
    Ok(())
}

fn run_trade(config: &StratlabConfig, prices: &[f64]) -> Result<()> {
    let mut exchange = PaperExchange::new();
    if !prices.is_empty() {
        for symbol in &config.trading.symbols {
            exchange.load(PriceSeries::from_prices(symbol.as_str(), prices.iter().copied()));
        }
    }

    let strategy = config
        .trading
        .decisions()?
        .resolve(&config.trading.strategy)?;
    let mut bot = TradingBot::new(exchange, strategy).with_quantity(config.trading.quantity)?;

    let mut failures = 0;
    for (symbol, result) in bot.run_all(&config.trading.symbols) {
        match result {
            Ok(report) => match report.action {
                TradeAction::Buy => println!("Buying {} {symbol}.", report.quantity),
                TradeAction::Sell => println!("Selling {} {symbol}.", report.quantity),
                TradeAction::Hold => println!("No action needed for {symbol}."),
            },
            Err(err) => {
                tracing::error!(%symbol, error = %err, "trade failed");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        tracing::error!(failures, "some symbols could not be traded");
        std::process::exit(1);
    }
    Ok(())
}

fn run_export_cmd(config: &StratlabConfig, dry_run: bool) -> Result<()> {
    let tiers = ExportTiers::new();
    let job = ExportJob {
        video_data: b"placeholder_for_video_data",
        audio_data: b"placeholder_for_audio_data",
        folder: &config.export.folder,
    };

    let mut memory = MemoryStore::default();
    let mut directory = DirectoryStore::new();
    let store: &mut dyn DestinationStore = if dry_run {
        &mut memory
    } else {
        &mut directory
    };

    let report = run_export(&tiers, &config.export.tier, &job, store)?;
    for artifact in [&report.video, &report.audio] {
        println!(
            "Exported {} data in {} format to {}.",
            artifact.kind,
            artifact.codec,
            artifact.folder.display()
        );
    }
    Ok(())
}
