//! VGC Consulting Website
//!
//! Marketing website for VGC Consulting, rendered from CMS content.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vgc_site::SiteConfig;

const DEFAULT_FILTER: &str = "vgc_site=debug,vgc_cms=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt::layer())
        .init();

    tracing::info!("Starting VGC Consulting website server");

    let config = SiteConfig::from_env()?;
    vgc_site::run(config).await?;
    Ok(())
}
