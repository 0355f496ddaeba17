//! Gateway server binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rustaana::{build_router, AppContext, GatewayConfig};

#[derive(Parser, Debug)]
#[command(name = "rustaana-server", about = "Gaana catalog gateway server", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "RUSTAANA_ADDR", default_value = "0.0.0.0:3000")]
    addr: String,

    /// Environment name reported by the health endpoint.
    #[arg(long, env = "RUSTAANA_ENV", default_value = "development")]
    environment: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ctx = AppContext::new(GatewayConfig::default(), args.environment.clone());
    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    tracing::info!(addr = %args.addr, environment = %args.environment, "gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}
