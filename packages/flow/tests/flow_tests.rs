use serde_json::json;
use std::sync::Arc;
use tesseract_common::{ChannelSink, EventSink, InboundEvent, RecordingSink};
use tesseract_flow::{FlowEditor, FlowError, NodeDrag, Point};

const NODES: &str = r#"[
    {"id": "home", "type": "page", "position": {"x": 0, "y": 0}, "data": {"label": "Home", "slug": "home"}},
    {"id": "about", "type": "page", "position": {"x": 200, "y": 0}, "data": {"label": "About", "slug": "about"}},
    {"id": "team", "label": "Team", "slug": "team", "position": {"x": 400, "y": 0}}
]"#;

const EDGES: &str = r#"[
    {"id": "e1", "source": "home", "target": "about"},
    {"source": "about", "target": "team"}
]"#;

fn mounted() -> anyhow::Result<(FlowEditor, Arc<RecordingSink>)> {
    let sink = Arc::new(RecordingSink::new());
    let editor = FlowEditor::mount(Some(NODES), Some(EDGES), Some("acme"), sink.clone())?;
    Ok((editor, sink))
}

#[test]
fn test_mount_from_dataset() -> anyhow::Result<()> {
    let (editor, sink) = mounted()?;

    let stats = editor.stats();
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.connections, 2);
    assert_eq!(editor.edges()[1].id, "edge-about-team");
    assert_eq!(editor.page_url(editor.page("team").unwrap()), "/p/acme/team");
    assert!(sink.events().is_empty());
    Ok(())
}

#[test]
fn test_mount_without_attributes_is_empty() -> anyhow::Result<()> {
    let sink = Arc::new(RecordingSink::new());
    let editor = FlowEditor::mount(None, None, None, sink)?;
    assert!(editor.pages().is_empty());
    assert_eq!(editor.project_slug(), "");
    Ok(())
}

#[test]
fn test_mount_rejects_bad_json() {
    let sink = Arc::new(RecordingSink::new());
    let result = FlowEditor::mount(Some("not json"), None, None, sink);
    assert!(matches!(result, Err(FlowError::MalformedPayload { .. })));
}

#[test]
fn test_update_flow_replaces_graph() -> anyhow::Result<()> {
    let (mut editor, sink) = mounted()?;

    let handled = editor.handle_event(&InboundEvent::new(
        "update_flow",
        json!({
            "nodes": [{"id": "only", "label": "Only", "slug": "only", "position": {"x": 1, "y": 1}}],
            "edges": []
        }),
    ))?;

    assert!(handled);
    assert_eq!(editor.pages().len(), 1);
    assert_eq!(editor.pages()[0].id, "only");
    assert!(editor.edges().is_empty());
    // Server pushes are never echoed back
    assert!(sink.events().is_empty());
    Ok(())
}

#[test]
fn test_malformed_update_keeps_prior_graph() -> anyhow::Result<()> {
    let (mut editor, _) = mounted()?;

    let result = editor.handle_event(&InboundEvent::new(
        "update_flow",
        json!({ "nodes": [{"id": "broken"}], "edges": [] }),
    ));

    assert!(matches!(result, Err(FlowError::MalformedPayload { .. })));
    assert_eq!(editor.pages().len(), 3);
    assert_eq!(editor.edges().len(), 2);
    Ok(())
}

#[test]
fn test_deleting_a_page_drops_its_edges_first() -> anyhow::Result<()> {
    let (mut editor, sink) = mounted()?;

    editor.delete_pages(&["about".to_string()])?;

    assert_eq!(
        sink.names(),
        vec!["delete_edge", "delete_edge", "request_delete_page"]
    );
    let events = sink.events();
    assert_eq!(events[0].payload, json!({ "edge_id": "e1" }));
    assert_eq!(events[1].payload, json!({ "edge_id": "edge-about-team" }));
    assert_eq!(events[2].payload, json!({ "node_id": "about" }));
    assert!(editor.edges().is_empty());
    assert!(editor.page("about").is_none());
    Ok(())
}

#[test]
fn test_delete_unknown_page_changes_nothing() -> anyhow::Result<()> {
    let (mut editor, sink) = mounted()?;

    let result = editor.delete_pages(&["home".to_string(), "ghost".to_string()]);
    assert!(matches!(result, Err(FlowError::PageNotFound(id)) if id == "ghost"));
    assert_eq!(editor.pages().len(), 3);
    assert!(sink.events().is_empty());
    Ok(())
}

#[test]
fn test_connect_requires_both_pages() -> anyhow::Result<()> {
    let (mut editor, sink) = mounted()?;

    assert!(matches!(
        editor.connect("home", "nowhere"),
        Err(FlowError::PageNotFound(_))
    ));

    let edge = editor.connect("team", "home")?;
    assert!(edge.id.starts_with("edge-"));
    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "add_edge");
    assert_eq!(events[0].payload["source"], "team");
    assert_eq!(events[0].payload["target"], "home");
    Ok(())
}

#[test]
fn test_delete_edges() -> anyhow::Result<()> {
    let (mut editor, sink) = mounted()?;

    assert!(matches!(
        editor.delete_edges(&["nope".to_string()]),
        Err(FlowError::EdgeNotFound(_))
    ));

    editor.delete_edges(&["e1".to_string()])?;
    assert_eq!(editor.edges().len(), 1);
    assert_eq!(sink.names(), vec!["delete_edge"]);
    Ok(())
}

#[test]
fn test_intents_flow_through_a_channel() -> anyhow::Result<()> {
    let (sink, mut rx) = ChannelSink::new();
    let mut editor = FlowEditor::new("acme", Arc::new(sink));

    let page = editor.add_page_at(Point::new(120.0, 140.0))?;
    editor.move_page(&page.id, 300.0, 310.0)?;

    let added = rx.try_recv()?;
    assert_eq!(added.name, "add_page");
    assert_eq!(added.payload["position_x"], 120.0);
    assert_eq!(added.payload["slug"], "page-1");

    let moved = rx.try_recv()?;
    assert_eq!(moved.name, "move_page");
    assert_eq!(moved.payload, json!({ "node_id": page.id, "x": 300.0, "y": 310.0 }));
    Ok(())
}

#[test]
fn test_closed_channel_surfaces_as_error() {
    let (sink, rx) = ChannelSink::new();
    drop(rx);
    let mut editor = FlowEditor::new("acme", Arc::new(sink));

    assert!(matches!(
        editor.add_page(),
        Err(FlowError::Common(_))
    ));
}

#[test]
fn test_node_drag_release_pushes_position() -> anyhow::Result<()> {
    let sink = RecordingSink::new();
    let canvas = Point::new(10.0, 10.0);
    let mut drag = NodeDrag::new();

    drag.pointer_down("home", Point::new(30.0, 30.0), Point::new(20.0, 20.0), canvas);
    assert_eq!(drag.dragged_node(), Some("home"));
    drag.pointer_move(Point::new(95.5, 60.9), canvas);

    let intent = drag.pointer_up().expect("a drag was in progress");
    sink.push_event(intent.to_event()?)?;

    let events = sink.events();
    assert_eq!(events[0].name, "update_node_position");
    assert_eq!(events[0].payload, json!({ "id": "home", "x": 75, "y": 40 }));
    Ok(())
}

#[test]
fn test_repeated_ids_are_deleted_once() -> anyhow::Result<()> {
    let (mut editor, sink) = mounted()?;

    editor.delete_pages(&["team".to_string(), "team".to_string()])?;
    assert_eq!(sink.names(), vec!["delete_edge", "request_delete_page"]);

    editor.delete_edges(&["e1".to_string(), "e1".to_string()])?;
    assert_eq!(
        sink.names(),
        vec!["delete_edge", "request_delete_page", "delete_edge"]
    );
    assert!(editor.edges().is_empty());
    assert_eq!(editor.pages().len(), 2);
    Ok(())
}
