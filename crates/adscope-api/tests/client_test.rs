#![allow(clippy::unwrap_used)]
// Integration tests for `CampaignClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adscope_api::{CampaignClient, CampaignStatus, Error, Platform};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CampaignClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = CampaignClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn campaign_json(id: &str, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "budget": 5000.0,
        "daily_budget": 250.0,
        "platforms": ["meta", "google"],
        "brand_id": "brand-1",
        "created_at": "2025-01-05T09:30:00Z"
    })
}

// ── Campaign list ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_campaigns() {
    let (server, client) = setup().await;

    let envelope = json!({
        "campaigns": [
            campaign_json("c1", "Spring Launch", "active"),
            campaign_json("c2", "Brand Refresh", "paused"),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let campaigns = client.list_campaigns().await.unwrap();

    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].id, "c1");
    assert_eq!(campaigns[0].status, CampaignStatus::Active);
    assert_eq!(campaigns[0].platforms, vec![Platform::Meta, Platform::Google]);
    assert_eq!(campaigns[1].name, "Brand Refresh");
}

#[tokio::test]
async fn test_list_campaigns_preserves_order_and_unknown_values() {
    let (server, client) = setup().await;

    let envelope = json!({
        "campaigns": [
            campaign_json("c1", "A", "active"),
            campaign_json("c2", "B", "archived"),
            campaign_json("c3", "C", "active"),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let campaigns = client.list_campaigns().await.unwrap();

    let ids: Vec<&str> = campaigns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
    assert_eq!(
        campaigns[1].status,
        CampaignStatus::Other("archived".into())
    );
}

// ── Single campaign ─────────────────────────────────────────────────

#[tokio::test]
async fn test_get_campaign() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "campaign": campaign_json("c1", "Spring Launch", "active")
        })))
        .mount(&server)
        .await;

    let campaign = client.get_campaign("c1").await.unwrap();

    let campaign = campaign.expect("campaign should be present");
    assert_eq!(campaign.name, "Spring Launch");
    assert_eq!(campaign.budget, 5000.0);
    assert_eq!(campaign.brand_id, "brand-1");
}

#[tokio::test]
async fn test_get_campaign_null_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "campaign": null })))
        .mount(&server)
        .await;

    let campaign = client.get_campaign("missing").await.unwrap();

    assert!(campaign.is_none());
}

// ── Insights ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_campaign_insights() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns/c1/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insights": {
                "impressions": 120_000,
                "clicks": 3400,
                "conversions": 85,
                "spend": 4250.0,
                "ctr": 2.83,
                "cpc": 1.25,
                "conversion_rate": 2.5,
                "timestamp": "2025-02-01T12:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let insights = client.campaign_insights("c1").await.unwrap();

    let insights = insights.expect("insights should be present");
    assert_eq!(insights.impressions, 120_000);
    assert_eq!(insights.clicks, 3400);
    assert_eq!(insights.ctr, 2.83);
}

#[tokio::test]
async fn test_campaign_insights_null_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns/c9/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "insights": null })))
        .mount(&server)
        .await;

    let insights = client.campaign_insights("c9").await.unwrap();

    assert!(insights.is_none());
}

#[tokio::test]
async fn test_aggregate_insights() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "insights": {
                "total_campaigns": 12,
                "active_campaigns": 7,
                "paused_campaigns": 3,
                "completed_campaigns": 2,
                "total_impressions": 2_500_000,
                "total_clicks": 64_000,
                "total_conversions": 1800,
                "total_spend": 98_500.0,
                "avg_ctr": 2.56,
                "avg_cpc": 1.54,
                "avg_conversion_rate": 2.81,
                "timestamp": "2025-02-01T12:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let insights = client.aggregate_insights().await.unwrap();

    assert_eq!(insights.total_campaigns, 12);
    assert_eq!(insights.active_campaigns, 7);
    assert_eq!(insights.total_spend, 98_500.0);
    assert_eq!(insights.avg_cpc, 1.54);
}

// ── Error handling ──────────────────────────────────────────────────

#[tokio::test]
async fn test_non_success_status_is_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.list_campaigns().await;

    match result {
        Err(Error::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns/c1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_campaign("c1").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client.list_campaigns().await;

    match result {
        Err(Error::Decode { ref message, .. }) => {
            assert!(
                message.contains("body preview"),
                "expected body preview in message, got: {message}"
            );
        }
        other => panic!("expected Decode error, got: {other:?}"),
    }
}
