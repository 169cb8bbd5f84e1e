use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `zonal zones`.
///
/// Unlike `map` and `summary`, a failed fetch is an error here: there is no
/// view to fall back to.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let zones = ctx
        .client
        .fetch_all()
        .await
        .with_context(|| format!("failed to fetch zones from {}", ctx.client.zones_url()))?;

    let zones = match ctx.view.options().demo {
        Some(demo) => demo.augment(zones),
        None => zones,
    };

    output(&zones, flags.format)
}
