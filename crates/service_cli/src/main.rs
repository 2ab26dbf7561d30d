//! Pricer CLI - Command Line Front End for the Lognormal Pricers
//!
//! # Commands
//!
//! - `pricer fwd` - Forward price
//! - `pricer quanto-fwd` - Quanto-adjusted forward price
//! - `pricer digital` - Cash-or-nothing digital option
//! - `pricer european` - European vanilla option
//! - `pricer knockout-fwd` - Knockout forward
//! - `pricer price-file <file>` - Price a JSON array of instruments
//! - `pricer check` - Show effective configuration and run a self-test
//!
//! # Configuration
//!
//! `--config` names a TOML file (default `pricer.toml`; a missing file means
//! defaults). `PRICER_DEGENERATE_VOL`, `PRICER_ENFORCE_CORRELATION_BOUNDS` and
//! `PRICER_LOG_LEVEL` override it. `RUST_LOG` takes precedence over both
//! `--verbose` and the configured log level.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use pricer_models::analytical::BlackScholesPricer;
use pricer_models::instruments::{Instrument, PayoffType};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// Closed-form Black-Scholes pricers
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version = pricer_models::VERSION, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pricer.toml")]
    config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Market inputs shared by every instrument.
#[derive(Args, Debug, Clone, Copy)]
struct MarketArgs {
    /// Current asset price
    #[arg(long)]
    spot: f64,

    /// Time to expiration in years
    #[arg(long = "time-to-exp", short = 't')]
    time_to_exp: f64,

    /// Continuously-compounded interest rate
    #[arg(long = "int-rate", short = 'r')]
    int_rate: f64,

    /// Continuously-compounded dividend yield
    #[arg(long = "div-yield", short = 'q', default_value_t = 0.0)]
    div_yield: f64,
}

/// Terms of a European option.
#[derive(Args, Debug, Clone, Copy)]
struct OptionArgs {
    /// Payoff type: call, put, 1 or -1
    #[arg(long, allow_hyphen_values = true)]
    payoff: PayoffType,

    /// Strike price
    #[arg(long, short = 'k')]
    strike: f64,

    /// Lognormal volatility
    #[arg(long, visible_alias = "vol")]
    volatility: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Forward price
    Fwd {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Quanto-adjusted forward price
    QuantoFwd {
        #[command(flatten)]
        market: MarketArgs,

        /// Asset volatility
        #[arg(long = "asset-vol")]
        asset_vol: f64,

        /// FX volatility
        #[arg(long = "fx-vol")]
        fx_vol: f64,

        /// Correlation between asset and FX returns
        #[arg(long, allow_hyphen_values = true)]
        corr: f64,
    },

    /// Cash-or-nothing European digital option
    Digital {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        option: OptionArgs,
    },

    /// European vanilla option
    European {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        option: OptionArgs,
    },

    /// Knockout forward
    KnockoutFwd {
        #[command(flatten)]
        market: MarketArgs,

        /// Forward delivery price
        #[arg(long, short = 'k')]
        strike: f64,

        /// Knockout barrier level
        #[arg(long = "ko-level")]
        ko_level: f64,

        /// Time to the knockout observation in years
        #[arg(long = "time-to-ko")]
        time_to_ko: f64,

        /// Lognormal volatility
        #[arg(long, visible_alias = "volatility")]
        vol: f64,
    },

    /// Price a JSON array of instruments
    PriceFile {
        /// Path to the instrument file
        path: PathBuf,
    },

    /// Check configuration and run a normal CDF self-test
    Check,
}

impl Commands {
    /// The instrument a pricing sub-command describes.
    fn instrument(&self) -> Option<Instrument> {
        let instrument = match *self {
            Commands::Fwd { market } => Instrument::Forward {
                spot: market.spot,
                time_to_exp: market.time_to_exp,
                int_rate: market.int_rate,
                div_yield: market.div_yield,
            },
            Commands::QuantoFwd {
                market,
                asset_vol,
                fx_vol,
                corr,
            } => Instrument::QuantoForward {
                spot: market.spot,
                time_to_exp: market.time_to_exp,
                int_rate: market.int_rate,
                div_yield: market.div_yield,
                asset_vol,
                fx_vol,
                corr,
            },
            Commands::Digital { market, option } => Instrument::Digital {
                payoff_type: option.payoff,
                spot: market.spot,
                strike: option.strike,
                time_to_exp: market.time_to_exp,
                int_rate: market.int_rate,
                div_yield: market.div_yield,
                volatility: option.volatility,
            },
            Commands::European { market, option } => Instrument::European {
                payoff_type: option.payoff,
                spot: market.spot,
                strike: option.strike,
                time_to_exp: market.time_to_exp,
                int_rate: market.int_rate,
                div_yield: market.div_yield,
                volatility: option.volatility,
            },
            Commands::KnockoutFwd {
                market,
                strike,
                ko_level,
                time_to_ko,
                vol,
            } => Instrument::KnockoutForward {
                spot: market.spot,
                strike,
                ko_level,
                time_to_exp: market.time_to_exp,
                time_to_ko,
                int_rate: market.int_rate,
                div_yield: market.div_yield,
                vol,
            },
            Commands::PriceFile { .. } | Commands::Check => return None,
        };
        Some(instrument)
    }
}

fn init_tracing(verbose: bool, log_level: &str) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        log_level.to_lowercase()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: &Path) -> Result<CliConfig> {
    Ok(CliConfig::load_with_env_and_validate(path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    init_tracing(cli.verbose, &config.log_level);
    debug!(config = ?config, "Configuration loaded");

    let pricer = BlackScholesPricer::new(config.pricing);

    match &cli.command {
        Commands::PriceFile { path } => commands::price::run_file(path, &pricer, cli.format),
        Commands::Check => commands::check::run(&config, cli.format),
        command => match command.instrument() {
            Some(instrument) => commands::price::run(&instrument, &pricer, cli.format),
            None => Ok(()),
        },
    }
}
