//! Monitor, downtime and host endpoint tests.

mod common;

use common::*;
use datadog_client::{Downtime, HostMuteSettings, ListMonitorsParams, Monitor, MuteMonitorRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_get_monitor_flexible_thresholds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor/2081"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("monitors/get_monitor.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let monitor = client.get_monitor(2081).await.unwrap();

    assert_eq!(monitor.kind.as_deref(), Some("metric alert"));
    let options = monitor.options.as_ref().unwrap();
    assert_eq!(options.no_data_timeframe, Some(20));
    let thresholds = options.thresholds.as_ref().unwrap();
    assert_eq!(thresholds.critical.as_ref().unwrap().as_i64(), Some(90));
    assert_eq!(thresholds.warning.as_ref().unwrap().as_f64(), Some(80.5));
    assert!(thresholds.ok.is_none());

    let silenced = options.silenced.as_ref().unwrap();
    assert_eq!(silenced.get("host:db-1"), Some(&None));
    assert_eq!(silenced.get("*"), Some(&Some(1550000000)));
}

#[tokio::test]
async fn test_list_monitors_with_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor"))
        .and(query_param("name", "cpu"))
        .and(query_param("monitor_tags", "env:prod,team:core"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("monitors/list_monitors.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ListMonitorsParams {
        name: Some("cpu".to_string()),
        tags: vec!["env:prod".to_string(), "team:core".to_string()],
    };
    let monitors = client.list_monitors(&params).await.unwrap();

    assert_eq!(monitors.len(), 2);
    let agent = &monitors[1];
    assert_eq!(agent.kind.as_deref(), Some("service check"));
    // Sent by the API as the string "2".
    assert_eq!(agent.options.as_ref().unwrap().no_data_timeframe, Some(2));
}

#[tokio::test]
async fn test_list_monitors_without_filters_sends_only_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let monitors = client
        .list_monitors(&ListMonitorsParams::default())
        .await
        .unwrap();
    assert!(monitors.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(keys, ["api_key", "application_key"]);
}

#[tokio::test]
async fn test_create_and_update_monitor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/monitor"))
        .and(body_json(json!({
            "type": "metric alert",
            "name": "CPU high",
            "query": "avg(last_5m):avg:system.cpu.user{*} > 90"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3001,
            "type": "metric alert",
            "name": "CPU high",
            "query": "avg(last_5m):avg:system.cpu.user{*} > 90"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/monitor/3001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3001,
            "type": "metric alert",
            "name": "CPU very high",
            "query": "avg(last_5m):avg:system.cpu.user{*} > 95"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let monitor = Monitor::new(
        "metric alert",
        "CPU high",
        "avg(last_5m):avg:system.cpu.user{*} > 90",
    );
    let mut created = client.create_monitor(&monitor).await.unwrap();
    assert_eq!(created.id, Some(3001));

    created.name = Some("CPU very high".to_string());
    let updated = client.update_monitor(3001, &created).await.unwrap();
    assert_eq!(updated.name.as_deref(), Some("CPU very high"));
}

#[tokio::test]
async fn test_update_monitor_sends_numeric_thresholds() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("monitors/get_monitor.json");

    Mock::given(method("GET"))
        .and(path("/v1/monitor/2081"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/monitor/2081"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let monitor = client.get_monitor(2081).await.unwrap();
    client.update_monitor(2081, &monitor).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let options = &body["options"];
    assert_eq!(options["no_data_timeframe"], json!(20));
    assert_eq!(options["thresholds"]["critical"], json!(90));
    assert_eq!(options["thresholds"]["warning"], json!(80.5));
    assert_eq!(options["thresholds"]["critical_recovery"], json!(85));
}

#[tokio::test]
async fn test_mute_and_unmute_monitor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/monitor/2081/mute"))
        .and(body_json(json!({"scope": "host:db-1", "end": 1700000000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2081,
            "options": {"silenced": {"host:db-1": 1700000000}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/monitor/2081/unmute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2081,
            "options": {"silenced": {}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = MuteMonitorRequest {
        scope: Some("host:db-1".to_string()),
        end: Some(1700000000),
    };
    let muted = client.mute_monitor(2081, &request).await.unwrap();
    let silenced = muted.options.unwrap().silenced.unwrap();
    assert_eq!(silenced.get("host:db-1"), Some(&Some(1700000000)));

    let unmuted = client.unmute_monitor(2081).await.unwrap();
    assert!(unmuted.options.unwrap().silenced.unwrap().is_empty());
}

#[tokio::test]
async fn test_mute_all_returns_downtime() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/monitor/mute_all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9, "active": true, "scope": ["*"], "start": 1412792983
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let downtime = client.mute_all_monitors().await.unwrap();
    assert_eq!(downtime.scope, ["*"]);
    assert_eq!(downtime.active, Some(true));
}

#[tokio::test]
async fn test_downtime_crud() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("downtimes/get_downtime.json");

    Mock::given(method("GET"))
        .and(path("/v1/downtime/1625"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/downtime/1625"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/downtime/1625"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let downtime = client.get_downtime(1625).await.unwrap();

    assert_eq!(downtime.scope, ["env:staging"]);
    assert_eq!(downtime.canceled, None);
    let recurrence = downtime.recurrence.as_ref().unwrap();
    assert_eq!(recurrence.kind.as_deref(), Some("weeks"));
    assert_eq!(
        recurrence.week_days.as_deref(),
        Some(&["Mon".to_string(), "Tue".to_string()][..])
    );

    let updated = client
        .update_downtime(1625, &Downtime {
            message: Some("extended".to_string()),
            ..downtime.clone()
        })
        .await
        .unwrap();
    assert_eq!(updated.id, Some(1625));

    client.delete_downtime(1625).await.unwrap();
}

#[tokio::test]
async fn test_mute_host_sends_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/host/db-1/mute"))
        .and(body_json(json!({"message": "patching", "end": 1700000000, "override": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": "Muted",
            "hostname": "db-1",
            "message": "patching",
            "end": 1700000000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let settings = HostMuteSettings {
        message: Some("patching".to_string()),
        end: Some(1700000000),
        override_existing: Some(true),
    };
    let response = client.mute_host("db-1", &settings).await.unwrap();
    assert_eq!(response.action.as_deref(), Some("Muted"));
    assert_eq!(response.end, Some(1700000000));
}

#[tokio::test]
async fn test_delete_monitor_and_unmute_all() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/monitor/2081"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted_monitor_id": 2081})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/monitor/unmute_all"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.delete_monitor(2081).await.unwrap();
    client.unmute_all_monitors().await.unwrap();
}

#[tokio::test]
async fn test_create_downtime_for_scope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/downtime"))
        .and(body_json(json!({"scope": ["host:db-1"], "end": 1700000000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1700, "active": true, "scope": ["host:db-1"], "end": 1700000000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut downtime = Downtime::for_scope("host:db-1");
    downtime.end = Some(1700000000);

    let client = client_for(&mock_server);
    let created = client.create_downtime(&downtime).await.unwrap();
    assert_eq!(created.id, Some(1700));
    assert_eq!(created.active, Some(true));
}

#[tokio::test]
async fn test_unmute_host() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/host/db-1/unmute"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"action": "Unmuted", "hostname": "db-1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.unmute_host("db-1").await.unwrap();
    assert_eq!(response.action.as_deref(), Some("Unmuted"));
    assert_eq!(response.end, None);
}
