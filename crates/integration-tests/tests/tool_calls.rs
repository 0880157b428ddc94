//! End-to-end tool calls against a mock Matomo.

use matomo_chat_core::{SiteId, SiteRef};
use matomo_chat_integration_tests::{TEST_TOKEN, TestContext};
use matomo_chat_server::tools::{CompareArgs, ToolError, ToolExecutor};
use serde_json::json;

// =============================================================================
// Resolution
// =============================================================================

#[tokio::test]
async fn test_galacticaia_this_week_echoes_input() {
    let ctx = TestContext::new().await;
    ctx.mock_report(
        "VisitsSummary.get",
        &["idSite=5", "period=week", "date=today"],
        json!({
            "nb_uniq_visitors": 31,
            "nb_visits": 40,
            "nb_actions": 95,
            "nb_pageviews": 80,
            "avg_time_on_site": 123,
            "bounce_rate": "41%",
            "nb_actions_per_visit": 2.4
        }),
        1,
    )
    .await;

    let result = ToolExecutor::new(&ctx.client)
        .execute(
            "get_visits_summary",
            &json!({"site": "GalacticaIA", "period": "Esta Semana"}),
        )
        .await
        .expect("tool should succeed");

    assert_eq!(
        result,
        json!({
            "site": "GalacticaIA",
            "site_id": 5,
            "period": "Esta Semana",
            "unique_visitors": 31,
            "visits": 40,
            "actions": 95,
            "pageviews": 80,
            "avg_time_on_site": 123,
            "bounce_rate": "41%",
            "actions_per_visit": 2.4
        })
    );
}

#[tokio::test]
async fn test_token_and_format_sent() {
    let ctx = TestContext::new().await;
    ctx.mock_report(
        "VisitsSummary.get",
        &["module=API", "format=JSON", &format!("token_auth={TEST_TOKEN}")],
        json!({}),
        1,
    )
    .await;

    ToolExecutor::new(&ctx.client)
        .execute("get_visits_summary", &json!({}))
        .await
        .expect("tool should succeed");
}

#[tokio::test]
async fn test_spanish_and_english_ranges_match() {
    let ctx = TestContext::new().await;
    ctx.mock_report(
        "UserCountry.getCountry",
        &["period=range", "date=last7"],
        json!([{"label": "Peru", "nb_visits": 3, "nb_actions": 5}]),
        2,
    )
    .await;

    let executor = ToolExecutor::new(&ctx.client);
    let english = executor
        .execute("get_countries", &json!({"period": "last 7 days"}))
        .await
        .expect("tool should succeed");
    let spanish = executor
        .execute("get_countries", &json!({"period": "ÚLTIMOS 7 DÍAS"}))
        .await
        .expect("tool should succeed");

    assert_eq!(english["countries"], spanish["countries"]);
    assert_eq!(spanish["period"], "ÚLTIMOS 7 DÍAS");
}

#[tokio::test]
async fn test_numeric_site_passes_through() {
    let ctx = TestContext::new().await;
    ctx.mock_report("VisitsSummary.get", &["idSite=42&"], json!({}), 1)
        .await;

    let result = ToolExecutor::new(&ctx.client)
        .execute("get_visits_summary", &json!({"site": 42}))
        .await
        .expect("tool should succeed");

    assert_eq!(result["site"], 42);
    assert_eq!(result["site_id"], 42);
}

// =============================================================================
// Shaping
// =============================================================================

#[tokio::test]
async fn test_missing_bounce_rate_is_zero_percent() {
    let ctx = TestContext::new().await;
    ctx.mock_report("VisitsSummary.get", &[], json!({"nb_visits": 7}), 1)
        .await;

    let result = ToolExecutor::new(&ctx.client)
        .execute("get_visits_summary", &json!({"site": "becgi"}))
        .await
        .expect("tool should succeed");

    assert_eq!(result["bounce_rate"], "0%");
    assert_eq!(result["visits"], 7);
    assert_eq!(result["site_id"], 6);
}

#[tokio::test]
async fn test_short_referrer_list_not_padded() {
    let ctx = TestContext::new().await;
    ctx.mock_report(
        "Referrers.getReferrerType",
        &["filter_limit=10"],
        json!([
            {"label": "Direct Entry", "nb_visits": 12, "nb_actions": 20},
            {"label": "Search Engines", "nb_visits": 3, "nb_actions": 4}
        ]),
        1,
    )
    .await;

    let result = ToolExecutor::new(&ctx.client)
        .execute("get_referrers", &json!({"site": "empresa", "period": "mes"}))
        .await
        .expect("tool should succeed");

    assert_eq!(
        result["referrer_types"],
        json!([
            {"type": "Direct Entry", "visits": 12, "actions": 20},
            {"type": "Search Engines", "visits": 3, "actions": 4}
        ])
    );
}

#[tokio::test]
async fn test_record_instead_of_list_is_empty() {
    let ctx = TestContext::new().await;
    ctx.mock_report("Actions.getPageUrls", &[], json!({"unexpected": true}), 1)
        .await;

    let result = ToolExecutor::new(&ctx.client)
        .execute("get_top_pages", &json!({}))
        .await
        .expect("tool should succeed");

    assert_eq!(result["top_pages"], json!([]));
}

#[tokio::test]
async fn test_live_visitors_empty_counters() {
    let ctx = TestContext::new().await;
    ctx.mock_report("Live.getCounters", &["lastMinutes=30"], json!([]), 1)
        .await;

    let result = ToolExecutor::new(&ctx.client)
        .execute("get_live_visitors", &json!({"site": "galactica"}))
        .await
        .expect("tool should succeed");

    assert_eq!(result["visitors"], 0);
    assert_eq!(result["visits"], 0);
    assert_eq!(result["actions"], 0);
    assert_eq!(result["last_minutes"], 30);
}

// =============================================================================
// Comparison and directory
// =============================================================================

#[tokio::test]
async fn test_compare_sites_three_requests_in_order() {
    let ctx = TestContext::new().await;
    for (id, visits) in [(4, 1), (5, 100), (6, 10)] {
        ctx.mock_report(
            "VisitsSummary.get",
            &[&format!("idSite={id}&"), "period=day", "date=today"],
            json!({"nb_visits": visits, "bounce_rate": "10%"}),
            1,
        )
        .await;
    }

    let comparison = ToolExecutor::new(&ctx.client)
        .compare_sites(&CompareArgs {
            period: "today".to_string(),
        })
        .await
        .expect("comparison should succeed");

    let sites: Vec<_> = comparison
        .comparison
        .iter()
        .map(|entry| (entry.site.as_str(), entry.visits))
        .collect();
    assert_eq!(
        sites,
        [("ronaldmego.com", 1_u64), ("galacticaia.com", 100), ("be-cgi.com", 10)]
    );

    let bodies = ctx.received_bodies().await;
    assert_eq!(bodies.len(), 3);
    for (body, id) in bodies.iter().zip(["idSite=4&", "idSite=5&", "idSite=6&"]) {
        assert!(body.contains(id), "{body} should contain {id}");
    }
}

#[tokio::test]
async fn test_list_sites_without_matomo() {
    let ctx = TestContext::new().await;

    let sites = ToolExecutor::list_sites();
    assert_eq!(sites.len(), 3);
    assert_eq!(sites[0].id, SiteId::new(4));
    assert_eq!(
        SiteRef::from(sites[2].aliases[0]).site_id(),
        SiteId::new(6)
    );

    let result = ToolExecutor::new(&ctx.client)
        .execute("list_sites", &json!({}))
        .await
        .expect("tool should succeed");
    assert_eq!(result[1]["aliases"], json!(["galacticaia", "galactica", "empresa"]));

    assert!(ctx.received_bodies().await.is_empty());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_in_band_auth_error_fails_call() {
    let ctx = TestContext::new().await;
    ctx.mock_report(
        "DevicesDetection.getType",
        &[],
        json!({"result": "error", "message": "You can't access this resource as it requires 'view' access"}),
        1,
    )
    .await;

    let err = ToolExecutor::new(&ctx.client)
        .execute("get_devices", &json!({}))
        .await
        .expect_err("tool should fail");

    assert!(matches!(err, ToolError::Upstream(_)));
    assert!(err.to_string().contains("view"));
}
