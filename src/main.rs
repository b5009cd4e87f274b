use std::sync::Arc;

use time::OffsetDateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vigil_notify::api::HttpGateway;
use vigil_notify::config::Config;
use vigil_notify::events::LocalEventBus;
use vigil_notify::services::{NavbarSurface, PortalView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_notify=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let bus = LocalEventBus::new(config.event_capacity);
    let gateway: Arc<HttpGateway> = Arc::new(HttpGateway::from_config(&config));

    // Drive the navbar surface once: open the dropdown and print what the
    // portal would render.
    let mut navbar = NavbarSurface::new(gateway, bus.clone());
    navbar.open().await;

    let now = OffsetDateTime::now_utc();
    println!("unread: {}", navbar.badge_label());
    for entry in PortalView::preview(navbar.list()) {
        let marker = if entry.is_read { " " } else { "*" };
        println!("{} {} ({})", marker, entry.summary(), entry.relative_age(now));
    }
    if let Some(total) = PortalView::view_all(navbar.list()) {
        println!("view all {}", total);
    }

    Ok(())
}
