//! Outbound flow-editor intents.
//!
//! Each intent is pushed to the view layer as a named event whose payload is
//! the variant's fields.

use serde::Serialize;
use tesseract_common::{CommonResult, OutboundEvent};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlowIntent {
    AddPage {
        node_id: String,
        name: String,
        slug: String,
        position_x: f64,
        position_y: f64,
    },
    RequestDeletePage {
        node_id: String,
    },
    MovePage {
        node_id: String,
        x: f64,
        y: f64,
    },
    AddEdge {
        id: String,
        source: String,
        target: String,
    },
    DeleteEdge {
        edge_id: String,
    },
    /// Emitted by the free-form node canvas, coordinates in whole pixels
    UpdateNodePosition {
        id: String,
        x: i64,
        y: i64,
    },
}

impl FlowIntent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowIntent::AddPage { .. } => "add_page",
            FlowIntent::RequestDeletePage { .. } => "request_delete_page",
            FlowIntent::MovePage { .. } => "move_page",
            FlowIntent::AddEdge { .. } => "add_edge",
            FlowIntent::DeleteEdge { .. } => "delete_edge",
            FlowIntent::UpdateNodePosition { .. } => "update_node_position",
        }
    }

    pub fn to_event(&self) -> CommonResult<OutboundEvent> {
        OutboundEvent::from_payload(self.name(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_payload_is_flat() {
        let event = FlowIntent::MovePage {
            node_id: "node-1".to_string(),
            x: 5.0,
            y: 6.5,
        }
        .to_event()
        .unwrap();

        assert_eq!(event.name, "move_page");
        assert_eq!(event.payload, json!({ "node_id": "node-1", "x": 5.0, "y": 6.5 }));
    }

    #[test]
    fn test_delete_edge_payload() {
        let event = FlowIntent::DeleteEdge {
            edge_id: "edge-1".to_string(),
        }
        .to_event()
        .unwrap();
        assert_eq!(event.name, "delete_edge");
        assert_eq!(event.payload, json!({ "edge_id": "edge-1" }));
    }
}
