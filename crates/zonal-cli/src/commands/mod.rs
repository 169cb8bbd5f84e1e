pub mod dispatch;
pub mod map;
pub mod schema;
pub mod summary;
pub mod zones;

use std::sync::Arc;

use anyhow::Context;
use zonal_core::MapView;

use crate::context::AppContext;

/// Activate the zone view once and return what it rendered.
async fn activate(ctx: &AppContext) -> anyhow::Result<Arc<MapView>> {
    ctx.view
        .activate()
        .await
        .context("zone view was superseded before it rendered")
}
