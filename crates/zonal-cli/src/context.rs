use std::time::Duration;

use anyhow::Context;
use zonal_client::ZoneClient;
use zonal_config::ZonalConfig;
use zonal_map::{DemoAugmentation, ViewOptions, ZoneView};

/// Shared state for command handlers.
pub struct AppContext {
    pub client: ZoneClient,
    pub view: ZoneView<ZoneClient>,
}

impl AppContext {
    pub fn init(config: &ZonalConfig) -> anyhow::Result<Self> {
        let client = ZoneClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
        .context("failed to build zones client")?;

        tracing::debug!(
            url = %client.zones_url(),
            remote = config.api.is_remote(),
            demo = config.demo.enabled,
            "zones endpoint configured"
        );

        let view = ZoneView::new(client.clone(), view_options(config));
        Ok(Self { client, view })
    }
}

pub fn view_options(config: &ZonalConfig) -> ViewOptions {
    ViewOptions {
        fallback_center: config.map.fallback_center(),
        demo: config
            .demo
            .enabled
            .then(|| DemoAugmentation::new(config.demo.count, config.demo.seed)),
    }
}
