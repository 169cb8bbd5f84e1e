//! Activating a view against a live (mock) zones endpoint.

use std::time::Duration;

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use zonal_client::ZoneClient;
use zonal_core::{CategoryCounts, OverlayColor, REGION_CENTER, ViewStatus};
use zonal_map::{NO_DATA_MESSAGE, OVERLAY_RADIUS_M, ViewOptions, ZoneView};

fn view_for(base: &str) -> ZoneView<ZoneClient> {
    let client = ZoneClient::new(base, Duration::from_secs(2)).expect("client should build");
    ZoneView::new(client, ViewOptions::default())
}

#[tokio::test]
async fn mixed_batch_places_only_valid_zones() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/zones/all");
            then.status(200).json_body(json!({
                "zones": [
                    {
                        "zone_lat": 12.9,
                        "zone_lon": 77.5,
                        "zone_type": "Opportunity Zone",
                        "adjusted_zone_score": 7.2
                    },
                    { "zone_lat": null, "zone_lon": 77.6, "zone_type": "Commercial Zone" }
                ]
            }));
        })
        .await;

    let view = view_for(&server.base_url())
        .activate()
        .await
        .expect("view applied");

    assert_eq!(view.status, ViewStatus::Ready);
    assert_eq!(
        view.summary.by_category,
        CategoryCounts {
            commercial: 1,
            balanced: 0,
            opportunity: 1
        }
    );
    assert_eq!(view.summary.total_zones, 2);
    assert_eq!(view.summary.placeable_zones, 1);

    // The null latitude contributes 0.0 but still counts in the divisor.
    assert!((view.center.lat - 6.45).abs() < 1e-9);
    assert!((view.center.lon - 77.55).abs() < 1e-9);

    assert_eq!(view.overlays.len(), 1);
    let overlay = &view.overlays[0];
    assert_eq!(overlay.fill_color, OverlayColor::Blue);
    assert_eq!(overlay.radius_m, OVERLAY_RADIUS_M);
    assert!(overlay.popup.contains("Score: 7.20"));
    assert!(overlay.popup.contains("Population: —"));
}

#[tokio::test]
async fn network_failure_shows_load_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let zone_view = view_for(&format!("http://127.0.0.1:{port}"));
    let view = zone_view.activate().await.expect("view applied");

    assert_eq!(view.status, ViewStatus::LoadFailed);
    assert!(view.message.is_some());
    assert!(view.overlays.is_empty());
    assert_eq!(view.summary.by_category.total(), 0);
    assert_eq!(view.center, REGION_CENTER);
    assert_eq!(zone_view.current(), Some(view));
}

#[tokio::test]
async fn empty_list_shows_no_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/zones/all");
            then.status(200).json_body(json!({ "zones": [] }));
        })
        .await;

    let view = view_for(&server.base_url())
        .activate()
        .await
        .expect("view applied");

    assert_eq!(view.status, ViewStatus::NoData);
    assert_eq!(view.message.as_deref(), Some(NO_DATA_MESSAGE));
    assert_eq!(view.center, REGION_CENTER);
    assert_eq!(view.summary.by_category, CategoryCounts::default());
    assert!(view.overlays.is_empty());
}

#[tokio::test]
async fn server_error_is_a_load_failure_not_a_panic() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/zones/all");
            then.status(502).body("bad gateway");
        })
        .await;

    let view = view_for(&server.base_url())
        .activate()
        .await
        .expect("view applied");

    assert_eq!(view.status, ViewStatus::LoadFailed);
    assert!(view.message.as_ref().unwrap().contains("502"));
}
