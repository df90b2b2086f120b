use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};
use url::Url;

mod log;

pub(crate) use log::LogLevel;

use self::log::LogStyle;

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug, Parser)]
#[command(name = "pokedex-gateway", version)]
/// GraphQL gateway over the PokéAPI
pub struct Args {
    /// IP address on which the server will listen for incoming connections. Defaults to 127.0.0.1:4000.
    #[arg(short, long, env = "POKEDEX_LISTEN_ADDRESS")]
    pub listen_address: Option<SocketAddr>,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "POKEDEX_CONFIG_PATH", default_value = "./pokedex.toml")]
    pub config: PathBuf,
    /// Base URL of the upstream REST API, e.g. https://pokeapi.co/api/v2
    #[arg(long, env = "API_BASE_URL")]
    pub api_base_url: Option<Url>,
    /// Set the logging level
    #[arg(long = "log", env = "POKEDEX_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "POKEDEX_LOG_STYLE", default_value_t = LogStyle::Text)]
    log_style: LogStyle,
    /// Print the GraphQL schema in SDL and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Args {
    pub fn log_format<S>(&self) -> BoxedLayer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        let layer = tracing_subscriber::fmt::layer();

        match self.log_style {
            // for interactive terminals we provide colored output
            LogStyle::Text if atty::is(atty::Stream::Stdout) => layer.with_ansi(true).boxed(),
            // for server logs, colors are off
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
