mod extract;
mod imdb;
mod store;

use clap::Parser;
use dotenv::dotenv;
use reqwest::{Client, Proxy};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// A tool to archive IMDb's top rated movies in a local JSON store.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// JSON store file the extracted records are appended to.
    #[clap(short, long, value_parser, default_value = "movies.json")]
    store: PathBuf,

    /// Seconds to pause between detail fetches.
    #[clap(short, long, default_value_t = 5)]
    delay: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let args = Args::parse();

    let proxy = match env::var("PROXY") {
        Ok(proxy_url) => Some(Proxy::https(&proxy_url)?),
        Err(_) => None,
    };

    let mut client_builder = Client::builder().timeout(Duration::from_secs(30));
    if let Some(proxy) = proxy {
        client_builder = client_builder.proxy(proxy);
    }
    let client = client_builder.build()?;

    extract::run(
        &client,
        imdb::API_BASE_URL,
        &args.store,
        Duration::from_secs(args.delay),
    )
    .await?;

    Ok(())
}
