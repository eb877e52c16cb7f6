use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use log::info;
use toptrackd::server::{AppState, make_app};

#[derive(Parser)]
#[command(name = "toptrackd")]
#[command(version, about = "Serve a region's top track, lyrics and artist image", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8099")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    info!("Building upstream clients ...");
    let state = Arc::new(AppState::try_default()?);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("Listening on {}", cli.bind);
    axum::serve(listener, make_app(state)).await?;

    Ok(())
}
