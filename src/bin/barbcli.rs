use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use bf_dcgis::{Catalog, Config, Submission};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Command,

    #[command(flatten)]
    pub global_opts: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    #[arg(short = 'q', long, global = true, env = "BARB_QUERY_URL")]
    pub query_url: Option<String>,

    #[arg(short = 'c', long, global = true, env = "BARB_CACHE_PATH")]
    pub cache_path: Option<PathBuf>,

    #[arg(short = 'k', long, global = true, env = "GOOGLE_API_KEY")]
    pub maps_api_key: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[clap(name = "list", about = "List all barbershops, refreshing the cache")]
    List,

    #[clap(name = "add", about = "Add a barbershop to the cache")]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        phone: String,

        #[arg(long, help = "Latitude in decimal degrees")]
        latitude: String,

        #[arg(long, help = "Longitude in decimal degrees")]
        longitude: String,

        #[arg(long)]
        ward: Option<String>,

        #[arg(long)]
        zipcode: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = CliArgs::parse();
    let mut config = Config::default();
    if let Some(query_url) = args.global_opts.query_url {
        config.query_url = query_url;
    }
    if let Some(cache_path) = args.global_opts.cache_path {
        config.cache_path = cache_path;
    }
    config.maps_api_key = args.global_opts.maps_api_key;
    if config.maps_api_key.is_none() {
        tracing::warn!("no mapping API key configured, the map view will not render");
    }
    let http = reqwest::Client::builder().gzip(true).brotli(true).build()?;
    let catalog = Catalog::new(http, config);

    match args.subcommand {
        Command::List => {
            let shops = catalog.refresh().await;
            let page = json!({
                "barbershops": shops,
                "maps_api_key": catalog.maps_api_key(),
            });
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Add {
            name,
            address,
            phone,
            latitude,
            longitude,
            ward,
            zipcode,
        } => {
            let mut fields = HashMap::from([
                ("name".to_string(), name),
                ("address".to_string(), address),
                ("phone".to_string(), phone),
                ("latitude".to_string(), latitude),
                ("longitude".to_string(), longitude),
            ]);
            if let Some(ward) = ward {
                fields.insert("ward".to_string(), ward);
            }
            if let Some(zipcode) = zipcode {
                fields.insert("zipcode".to_string(), zipcode);
            }
            let submission = Submission::parse(&fields)?;
            let stored = catalog.add(&submission).await;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
    }

    Ok(())
}
