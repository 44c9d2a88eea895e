// Controller integration tests against a wiremock campaign service.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use serde_json::json;
use tokio::sync::watch;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adscope_api::CampaignClient;
use adscope_core::{Controller, FetchState};

async fn setup() -> (MockServer, Controller) {
    let server = MockServer::start().await;
    let base = url::Url::parse(&server.uri()).unwrap();
    let client = CampaignClient::new(base, Duration::from_secs(5)).unwrap();
    (server, Controller::with_client(client))
}

fn campaign_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Campaign {id}"),
        "status": "active",
        "budget": 50000.0,
        "daily_budget": 1500.0,
        "platforms": ["meta", "google"],
        "brand_id": "brand-1",
        "created_at": "2025-01-05T09:30:00Z"
    })
}

/// Await the next terminal state on a fetch subscription.
async fn wait_terminal<T: Clone + Send + Sync + 'static>(
    rx: &mut watch::Receiver<FetchState<T>>,
) -> FetchState<T> {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            {
                let state = rx.borrow_and_update();
                match &*state {
                    FetchState::Idle | FetchState::Loading => {}
                    terminal => return terminal.clone(),
                }
            }
            rx.changed().await.unwrap();
        }
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn refresh_campaigns_lands_in_the_store() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "campaigns": [campaign_json("c1"), campaign_json("c2")]
        })))
        .mount(&server)
        .await;

    let mut rx = ctrl.store().subscribe_campaigns();
    assert!(ctrl.store().campaigns().is_idle());

    ctrl.refresh_campaigns();

    let state = wait_terminal(&mut rx).await;
    let campaigns = state.data().unwrap();
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].id, "c1");
    assert!(ctrl.store().last_refresh().is_some());
}

#[tokio::test]
async fn server_error_reports_the_uniform_message() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut rx = ctrl.store().subscribe_campaigns();
    ctrl.refresh_campaigns();

    let state = wait_terminal(&mut rx).await;
    assert_eq!(state.error(), Some("Failed to fetch campaigns"));
    assert!(ctrl.store().last_refresh().is_none());
}

#[tokio::test]
async fn null_campaign_envelope_becomes_not_found() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "campaign": null })))
        .mount(&server)
        .await;

    let mut rx = ctrl.store().subscribe_campaign();
    ctrl.open_campaign("ghost");

    let state = wait_terminal(&mut rx).await;
    assert!(state.is_not_found());
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn http_404_also_becomes_not_found() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut rx = ctrl.store().subscribe_campaign();
    ctrl.open_campaign("ghost");

    let state = wait_terminal(&mut rx).await;
    assert!(state.is_not_found());
}

#[tokio::test]
async fn aggregate_metrics_load_into_the_store() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insights": {
                "total_campaigns": 8,
                "active_campaigns": 5,
                "paused_campaigns": 2,
                "completed_campaigns": 1,
                "total_impressions": 2_400_000u64,
                "total_clicks": 96000,
                "total_conversions": 4800,
                "total_spend": 98500.0,
                "avg_ctr": 4.0,
                "avg_cpc": 1.03,
                "avg_conversion_rate": 5.0,
                "timestamp": "2025-02-01T12:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let mut rx = ctrl.store().subscribe_aggregate();
    ctrl.refresh_aggregate();

    let state = wait_terminal(&mut rx).await;
    let agg = state.data().unwrap();
    assert_eq!(agg.total_campaigns, 8);
    assert_eq!(agg.total_spend, 98500.0);
}

#[tokio::test]
async fn campaign_insights_load_into_the_selection_slot() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/c1/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insights": {
                "impressions": 1000,
                "clicks": 50,
                "conversions": 5,
                "spend": 100.0,
                "ctr": 5.0,
                "cpc": 2.0,
                "conversion_rate": 10.0,
                "timestamp": "2025-02-01T12:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let mut rx = ctrl.store().subscribe_campaign_insights();
    ctrl.open_campaign_insights("c1");

    let state = wait_terminal(&mut rx).await;
    let insights = state.data().unwrap();
    assert_eq!(insights.clicks, 50);
}

#[tokio::test]
async fn awaitable_fetch_maps_missing_campaign_to_not_found() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "campaign": null })))
        .mount(&server)
        .await;

    let err = ctrl.fetch_campaign("ghost").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Campaign not found: ghost");
}

#[tokio::test]
async fn awaitable_fetch_wraps_transport_failures() {
    let (server, ctrl) = setup().await;
    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = ctrl.fetch_campaigns().await.unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(err.to_string(), "Failed to fetch campaigns");
}
