//! Board and screenboard endpoint tests.

mod common;

use common::*;
use datadog_client::models::widgets::{FreeTextDefinition, NoteDefinition, TimeseriesDefinition};
use datadog_client::models::{Presence, TileDef, TileDefRequest, WidgetTitle};
use datadog_client::{Board, BoardWidget, Screenboard, WidgetDefinition, WidgetType};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_get_board_decodes_every_widget_kind() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("boards/get_board.json");

    Mock::given(method("GET"))
        .and(path("/v1/dashboard/qc9-tuk-9kv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let board = client.get_board("qc9-tuk-9kv").await.unwrap();

    assert_eq!(board.title.as_deref(), Some("Service overview"));
    assert_eq!(board.is_read_only.get_ok(), (false, true));
    assert_eq!(board.widgets.len(), WidgetType::ALL.len());

    let kinds: Vec<WidgetType> = board.widgets.iter().map(BoardWidget::kind).collect();
    for kind in WidgetType::ALL {
        assert!(kinds.contains(kind), "missing widget kind {kind:?}");
    }

    let group = board.widgets.last().unwrap();
    assert_eq!(group.kind(), WidgetType::Group);
    assert_eq!(group.children()[1].children()[0].kind(), WidgetType::Iframe);

    // Re-encoding reproduces the same objects; flexible scalars come back as strings.
    let encoded = serde_json::to_value(&board).unwrap();
    assert_eq!(encoded["widgets"][0], fixture["widgets"][0]);
    assert_eq!(encoded["widgets"][1]["title_size"], json!("16"));
    assert_eq!(encoded["widgets"][10]["precision"], json!("3"));
}

/// Compare a wire object with its re-encoding, allowing numbers and booleans
/// held in flexible fields to come back as their string spelling.
fn assert_same_after_normalization(original: &Value, encoded: &Value, at: &str) {
    match (original, encoded) {
        (Value::Object(expected), Value::Object(actual)) => {
            let expected_keys: Vec<&String> = expected.keys().collect();
            let actual_keys: Vec<&String> = actual.keys().collect();
            assert_eq!(actual_keys, expected_keys, "keys differ at {at}");
            for (key, value) in expected {
                assert_same_after_normalization(value, &actual[key], &format!("{at}.{key}"));
            }
        }
        (Value::Array(expected), Value::Array(actual)) => {
            assert_eq!(actual.len(), expected.len(), "length differs at {at}");
            for (index, (value, again)) in expected.iter().zip(actual).enumerate() {
                assert_same_after_normalization(value, again, &format!("{at}[{index}]"));
            }
        }
        (Value::Number(number), Value::String(text)) => {
            assert_eq!(text, &number.to_string(), "number changed at {at}");
        }
        (Value::Bool(flag), Value::String(text)) => {
            assert_eq!(text, &flag.to_string(), "flag changed at {at}");
        }
        _ => assert_eq!(encoded, original, "value differs at {at}"),
    }
}

#[test]
fn test_every_fixture_widget_round_trips() {
    let fixture = load_fixture("boards/get_board.json");
    let widgets = fixture["widgets"].as_array().unwrap();
    let mut seen = Vec::new();

    for (index, wire) in widgets.iter().enumerate() {
        let widget: BoardWidget = serde_json::from_value(wire.clone()).unwrap();
        seen.push(widget.kind());

        let encoded = serde_json::to_value(&widget).unwrap();
        assert_same_after_normalization(wire, &encoded, &format!("widgets[{index}]"));

        let again: BoardWidget = serde_json::from_value(encoded.clone()).unwrap();
        assert_eq!(again, widget, "decode(encode(w)) differs for {}", widget.kind());
        assert_eq!(serde_json::to_value(&again).unwrap(), encoded);
    }

    for kind in WidgetType::ALL {
        assert!(seen.contains(kind), "fixture lacks a {kind} widget");
    }
}

#[tokio::test]
async fn test_create_board_sends_flat_widgets() {
    let mock_server = MockServer::start().await;

    let expected_body = json!({
        "title": "Deploys",
        "layout_type": "ordered",
        "widgets": [
            {
                "type": "timeseries",
                "x": 0, "y": 0, "width": 4, "height": 2,
                "title": true,
                "title_text": "Requests",
                "tile_def": {"requests": [{"q": "sum:requests{*}"}]}
            },
            {"type": "note", "html": "deploy freeze", "tick": false}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/dashboard"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut created = expected_body.clone();
            created["id"] = json!("new-board-id");
            created
        }))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = Board::new("Deploys", "ordered");
    board.widgets.push(
        BoardWidget::new(WidgetDefinition::Timeseries(TimeseriesDefinition {
            title: WidgetTitle::text("Requests"),
            tile_def: Some(TileDef {
                requests: Some(vec![TileDefRequest::metric_query("sum:requests{*}")]),
                ..TileDef::default()
            }),
            ..TimeseriesDefinition::default()
        }))
        .at(0, 0, 4, 2),
    );
    board
        .widgets
        .push(BoardWidget::new(WidgetDefinition::Note(NoteDefinition {
            html: Some("deploy freeze".to_string()),
            tick: Some(false),
            ..NoteDefinition::default()
        })));

    let client = client_for(&mock_server);
    let created = client.create_board(&board).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("new-board-id"));
    assert_eq!(created.widgets, board.widgets);
}

#[tokio::test]
async fn test_empty_board_emits_widgets_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/dashboard/abc-def-ghi"))
        .and(body_json(json!({"title": "Empty", "layout_type": "free", "widgets": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc-def-ghi", "title": "Empty", "layout_type": "free", "widgets": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let updated = client
        .update_board("abc-def-ghi", &Board::new("Empty", "free"))
        .await
        .unwrap();
    assert!(updated.widgets.is_empty());
}

#[tokio::test]
async fn test_list_and_delete_boards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/dashboard"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("boards/list_boards.json")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/dashboard/abc-def-ghi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"deleted_dashboard_id": "abc-def-ghi"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let boards = client.list_boards().await.unwrap();
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[1].is_read_only, Some(true));

    client.delete_board(&boards[1].id).await.unwrap();
}

#[tokio::test]
async fn test_screenboard_flexible_dimensions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/screen/412"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("screenboards/get_screenboard.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let board = client.get_screenboard(412).await.unwrap();

    assert_eq!(board.board_title.as_deref(), Some("Ops wall"));
    assert_eq!(board.height.as_ref().unwrap().as_i64(), Some(768));
    assert_eq!(board.width.as_ref().unwrap().as_str(), "1024");
    assert_eq!(board.widgets[0].kind(), WidgetType::FreeText);

    let encoded = serde_json::to_value(&board).unwrap();
    assert_eq!(encoded["width"], json!("1024"));
}

#[tokio::test]
async fn test_screenboard_share_and_revoke() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screen/share/412"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "board_id": 412,
            "public_url": "https://p.datadoghq.com/sb/abc123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/screen/share/412"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let shared = client.share_screenboard(412).await.unwrap();
    assert_eq!(
        shared.public_url.as_deref(),
        Some("https://p.datadoghq.com/sb/abc123")
    );
    client.revoke_screenboard(412).await.unwrap();
}

#[tokio::test]
async fn test_create_screenboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/screen"))
        .and(body_json(json!({
            "board_title": "Wall",
            "widgets": [{"type": "free_text", "text": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 77,
            "board_title": "Wall",
            "widgets": [{"type": "free_text", "text": "hello"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut board = Screenboard::new("Wall");
    board
        .widgets
        .push(BoardWidget::new(WidgetDefinition::FreeText(FreeTextDefinition {
            text: Some("hello".to_string()),
            ..FreeTextDefinition::default()
        })));

    let client = client_for(&mock_server);
    let created = client.create_screenboard(&board).await.unwrap();
    assert_eq!(created.id, Some(77));
}

#[tokio::test]
async fn test_screenboard_list_update_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/screen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "screenboards": [
                {"id": 412, "title": "Ops wall", "resource": "/api/v1/screen/412"},
                {"id": 413, "title": "NOC"}
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/screen/413"))
        .and(body_json(json!({"board_title": "NOC v2", "widgets": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 413, "board_title": "NOC v2", "widgets": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/screen/413"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let boards = client.list_screenboards().await.unwrap();
    let ids: Vec<i64> = boards.iter().map(|board| board.id).collect();
    assert_eq!(ids, [412, 413]);

    let updated = client
        .update_screenboard(413, &Screenboard::new("NOC v2"))
        .await
        .unwrap();
    assert_eq!(updated.board_title.as_deref(), Some("NOC v2"));

    client.delete_screenboard(413).await.unwrap();
}
