#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::sync::Arc;

use clap::crate_version;
use mimalloc::MiMalloc;
use pokeapi_client::HttpPokeApi;
use pokedex_server::{schema, Config, ServerConfig};
use tokio::runtime;
use url::Url;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod args;
mod telemetry;

const THREAD_NAME: &str = "pokedex-gateway";

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();

    // The schema does not depend on the configuration file.
    if args.print_schema {
        print!("{}", export_schema()?);
        return Ok(());
    }

    let config = Config::load(Some(args.config.as_path()))?.unwrap_or_default();

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        telemetry::init(&args)?;

        let crate_version = crate_version!();
        tracing::info!("Pokédex Gateway {crate_version}");

        let config = ServerConfig {
            listen_addr: args.listen_address,
            config,
            api_base_url: args.api_base_url,
        };

        pokedex_server::serve(config).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}

fn export_schema() -> anyhow::Result<String> {
    let api = HttpPokeApi::new(Url::parse(pokeapi_client::DEFAULT_BASE_URL)?)?;

    Ok(schema::sdl(&schema::build(Arc::new(api))))
}
