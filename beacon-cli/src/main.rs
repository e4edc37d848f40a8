use anyhow::{Context, Result};
use beacon_server::{AppState, IceCredentialProvider, StaticIceServers, XirsysProvider};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two-party WebRTC signaling relay.
#[derive(Parser)]
#[command(name = "beacon", version)]
struct Args {
    /// Address to bind the HTTP/WebSocket listener to.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    #[arg(short, long, env = "BEACON_PORT", default_value_t = 8080)]
    port: u16,

    /// Directory of static client assets served at the root path.
    #[arg(long, default_value = "public")]
    static_dir: PathBuf,

    /// Xirsys account ident; with the secret and channel set, /iceservers
    /// proxies to Xirsys instead of returning an empty list.
    #[arg(long, env = "XIRSYS_IDENT")]
    xirsys_ident: Option<String>,

    #[arg(long, env = "XIRSYS_SECRET")]
    xirsys_secret: Option<String>,

    #[arg(long, env = "XIRSYS_CHANNEL")]
    xirsys_channel: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let ice: Arc<dyn IceCredentialProvider> =
        match (&args.xirsys_ident, &args.xirsys_secret, &args.xirsys_channel) {
            (Some(ident), Some(secret), Some(channel)) => {
                info!(channel = %channel, "using Xirsys ICE credential provider");
                Arc::new(XirsysProvider::new(
                    ident.clone(),
                    secret.clone(),
                    channel.clone(),
                ))
            }
            _ => {
                info!("no ICE credential provider configured, /iceservers returns []");
                Arc::new(StaticIceServers::default())
            }
        };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = beacon_server::routes(AppState::new(ice))
        .fallback_service(ServeDir::new(&args.static_dir))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("invalid bind address")?;
    info!("signaling server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
