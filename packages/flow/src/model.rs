//! Page graph model shared with the node-graph view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A page node on the flow canvas
///
/// Accepts both the flat server shape (`{id, label, slug, position}`) and the
/// node-graph shape (`{id, type, position, data: {label, slug}}`); always
/// serializes in the node-graph shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PagePayload", into = "GraphPage")]
pub struct Page {
    pub id: String,
    pub label: String,
    pub slug: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub label: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphPage {
    id: String,
    #[serde(rename = "type", default = "page_type")]
    node_type: String,
    position: Point,
    data: PageData,
}

fn page_type() -> String {
    "page".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PagePayload {
    Graph(GraphPage),
    Flat {
        id: String,
        label: String,
        slug: String,
        position: Point,
    },
}

impl From<PagePayload> for Page {
    fn from(payload: PagePayload) -> Self {
        match payload {
            PagePayload::Graph(g) => Page {
                id: g.id,
                label: g.data.label,
                slug: g.data.slug,
                position: g.position,
            },
            PagePayload::Flat {
                id,
                label,
                slug,
                position,
            } => Page {
                id,
                label,
                slug,
                position,
            },
        }
    }
}

impl From<Page> for GraphPage {
    fn from(page: Page) -> Self {
        GraphPage {
            id: page.id,
            node_type: page_type(),
            position: page.position,
            data: PageData {
                label: page.label,
                slug: page.slug,
            },
        }
    }
}

/// A transition between two pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Missing ids are derived from the endpoints
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub(crate) fn fill_id(&mut self) {
        if self.id.is_empty() {
            self.id = format!("edge-{}-{}", self.source, self.target);
        }
    }

    pub fn touches(&self, page_id: &str) -> bool {
        self.source == page_id || self.target == page_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_from_graph_shape() {
        let page: Page = serde_json::from_value(json!({
            "id": "p1",
            "type": "page",
            "position": { "x": 10.0, "y": 20.0 },
            "data": { "label": "Home", "slug": "home" }
        }))
        .unwrap();

        assert_eq!(page.label, "Home");
        assert_eq!(page.position, Point::new(10.0, 20.0));
    }

    #[test]
    fn test_page_from_flat_shape() {
        let page: Page = serde_json::from_value(json!({
            "id": "p1",
            "label": "About",
            "slug": "about",
            "position": { "x": 1, "y": 2 }
        }))
        .unwrap();

        assert_eq!(page.slug, "about");
    }

    #[test]
    fn test_page_missing_slug_is_rejected() {
        let result: Result<Page, _> = serde_json::from_value(json!({
            "id": "p1",
            "label": "About",
            "position": { "x": 1, "y": 2 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_page_serializes_in_graph_shape() {
        let page = Page {
            id: "p1".to_string(),
            label: "Home".to_string(),
            slug: "home".to_string(),
            position: Point::new(0.0, 0.0),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["type"], "page");
        assert_eq!(json["data"]["slug"], "home");
    }
}
