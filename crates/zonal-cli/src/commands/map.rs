use serde::Serialize;
use zonal_core::{MapView, Overlay, OverlayColor};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `zonal map`.
///
/// A load failure is printed as part of the view, not returned as an error.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = super::activate(ctx).await?;

    match flags.format {
        OutputFormat::Table => {
            println!("{}", status_line(&view));
            output(&overlay_rows(&view.overlays), flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(view.as_ref(), flags.format),
    }
}

/// One table row per overlay; the popup is flattened onto one line.
#[derive(Debug, Serialize)]
struct OverlayRow<'a> {
    lat: f64,
    lon: f64,
    color: OverlayColor,
    popup: &'a str,
}

fn overlay_rows(overlays: &[Overlay]) -> Vec<OverlayRow<'_>> {
    overlays
        .iter()
        .map(|overlay| OverlayRow {
            lat: overlay.center.lat,
            lon: overlay.center.lon,
            color: overlay.fill_color,
            popup: &overlay.popup,
        })
        .collect()
}

fn status_line(view: &MapView) -> String {
    let mut line = format!(
        "status: {}  centre: {:.4}, {:.4}  overlays: {}",
        view.status,
        view.center.lat,
        view.center.lon,
        view.overlays.len()
    );
    if let Some(message) = &view.message {
        line.push_str("  (");
        line.push_str(message);
        line.push(')');
    }
    line
}
