use anyhow::Result;
use bf_dcgis::fetch;
use bf_dcgis::shops::Feature;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'q', long)]
    query_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let http = reqwest::Client::builder().gzip(true).brotli(true).build()?;
    let features = fetch::get(&http, args.query_url.as_deref()).await?;
    println!("{}", serde_json::to_string::<Vec<Feature>>(&features)?);
    Ok(())
}
