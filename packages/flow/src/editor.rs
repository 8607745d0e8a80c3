//! # Flow Editor
//!
//! Local state of the page graph. The server owns the real graph: user
//! actions are applied locally for immediate feedback and forwarded as
//! intents, and `update_flow` pushes replace the local copy wholesale.

use crate::errors::FlowError;
use crate::intents::FlowIntent;
use crate::model::{Edge, Page, Point};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use tesseract_common::{timestamp_id, EventSink, InboundEvent};

pub const UPDATE_FLOW_EVENT: &str = "update_flow";

/// Project slug used in page links when none is configured
pub const FALLBACK_PROJECT_SLUG: &str = "project";

/// Payload of `update_flow`, also the initial mount data
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FlowUpdate {
    pub nodes: Vec<Page>,
    pub edges: Vec<Edge>,
}

/// Page and connection counts for the info panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStats {
    pub pages: usize,
    pub connections: usize,
}

pub struct FlowEditor {
    project_slug: String,
    pages: Vec<Page>,
    edges: Vec<Edge>,
    sink: Arc<dyn EventSink>,
}

impl std::fmt::Debug for FlowEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowEditor")
            .field("project_slug", &self.project_slug)
            .field("pages", &self.pages)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}

impl FlowEditor {
    pub fn new(project_slug: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            project_slug: project_slug.into(),
            pages: Vec::new(),
            edges: Vec::new(),
            sink,
        }
    }

    /// Build the editor from the mount attributes (`nodes`, `edges` JSON
    /// strings and the project slug); absent lists mean empty
    pub fn mount(
        nodes_json: Option<&str>,
        edges_json: Option<&str>,
        project_slug: Option<&str>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, FlowError> {
        let nodes: Vec<Page> = parse_attr("nodes", nodes_json)?;
        let edges: Vec<Edge> = parse_attr("edges", edges_json)?;

        let mut editor = Self::new(project_slug.unwrap_or_default(), sink);
        editor.replace(FlowUpdate { nodes, edges });
        Ok(editor)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    pub fn stats(&self) -> FlowStats {
        FlowStats {
            pages: self.pages.len(),
            connections: self.edges.len(),
        }
    }

    /// Public URL of a page, `/p/<project>/<slug>`
    pub fn page_url(&self, page: &Page) -> String {
        let project = if self.project_slug.is_empty() {
            FALLBACK_PROJECT_SLUG
        } else {
            &self.project_slug
        };
        format!("/p/{}/{}", project, page.slug)
    }

    /// Handle an event pushed by the server
    ///
    /// Malformed payloads are rejected whole and the current graph is kept.
    pub fn handle_event(&mut self, event: &InboundEvent) -> Result<bool, FlowError> {
        if event.name != UPDATE_FLOW_EVENT {
            tracing::debug!("flow editor ignoring event {}", event.name);
            return Ok(false);
        }

        let update: FlowUpdate = serde_json::from_value(event.payload.clone()).map_err(|source| {
            tracing::warn!("Rejected {} payload: {}", event.name, source);
            FlowError::MalformedPayload {
                event: event.name.clone(),
                source,
            }
        })?;

        self.replace(update);
        Ok(true)
    }

    fn replace(&mut self, update: FlowUpdate) {
        self.pages = update.nodes;
        self.edges = update.edges;
        for edge in &mut self.edges {
            edge.fill_id();
        }
    }

    /// Add a page at a random spot near the top-left of the canvas
    pub fn add_page(&mut self) -> Result<Page, FlowError> {
        let position = Point::new(
            100.0 + rand::random::<f64>() * 200.0,
            100.0 + rand::random::<f64>() * 200.0,
        );
        self.add_page_at(position)
    }

    /// Add `Page <n+1>` / `page-<n+1>` at `position`
    pub fn add_page_at(&mut self, position: Point) -> Result<Page, FlowError> {
        let number = self.pages.len() + 1;
        let page = Page {
            id: self.fresh_id("node", |id| self.page(id).is_some()),
            label: format!("Page {}", number),
            slug: format!("page-{}", number),
            position,
        };

        self.pages.push(page.clone());
        self.emit(FlowIntent::AddPage {
            node_id: page.id.clone(),
            name: page.label.clone(),
            slug: page.slug.clone(),
            position_x: position.x,
            position_y: position.y,
        })?;
        Ok(page)
    }

    /// A page was dropped at a new position
    pub fn move_page(&mut self, id: &str, x: f64, y: f64) -> Result<(), FlowError> {
        let page = self
            .pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| FlowError::PageNotFound(id.to_string()))?;
        page.position = Point::new(x, y);

        self.emit(FlowIntent::MovePage {
            node_id: id.to_string(),
            x,
            y,
        })
    }

    /// Delete pages along with every edge attached to them
    pub fn delete_pages(&mut self, ids: &[String]) -> Result<(), FlowError> {
        if let Some(missing) = ids.iter().find(|id| self.page(id).is_none()) {
            return Err(FlowError::PageNotFound(missing.clone()));
        }
        let ids = unique(ids);

        let dangling: Vec<String> = self
            .edges
            .iter()
            .filter(|e| ids.iter().any(|id| e.touches(id)))
            .map(|e| e.id.clone())
            .collect();
        if !dangling.is_empty() {
            self.delete_edges(&dangling)?;
        }

        self.pages.retain(|p| !ids.contains(&p.id));
        for id in &ids {
            self.emit(FlowIntent::RequestDeletePage {
                node_id: id.clone(),
            })?;
        }
        Ok(())
    }

    /// Connect two pages
    pub fn connect(&mut self, source: &str, target: &str) -> Result<Edge, FlowError> {
        for end in [source, target] {
            if self.page(end).is_none() {
                return Err(FlowError::PageNotFound(end.to_string()));
            }
        }

        let edge = Edge {
            id: self.fresh_id("edge", |id| self.edges.iter().any(|e| e.id == id)),
            source: source.to_string(),
            target: target.to_string(),
        };
        self.edges.push(edge.clone());

        self.emit(FlowIntent::AddEdge {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
        })?;
        Ok(edge)
    }

    pub fn delete_edges(&mut self, ids: &[String]) -> Result<(), FlowError> {
        if let Some(missing) = ids.iter().find(|id| !self.edges.iter().any(|e| &e.id == *id)) {
            return Err(FlowError::EdgeNotFound(missing.clone()));
        }
        let ids = unique(ids);

        self.edges.retain(|e| !ids.contains(&e.id));
        for id in &ids {
            self.emit(FlowIntent::DeleteEdge {
                edge_id: id.clone(),
            })?;
        }
        Ok(())
    }

    pub(crate) fn emit(&self, intent: FlowIntent) -> Result<(), FlowError> {
        tracing::debug!("flow intent {}", intent.name());
        self.sink.push_event(intent.to_event()?)?;
        Ok(())
    }

    // Millisecond ids can repeat when two items are created in the same tick
    fn fresh_id(&self, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        let base = timestamp_id(prefix);
        let mut id = base.clone();
        let mut n = 1;
        while taken(&id) {
            id = format!("{}-{}", base, n);
            n += 1;
        }
        id
    }
}

/// Drop repeated ids, keeping first occurrences in order
fn unique(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter().filter(|id| seen.insert(id.as_str())).cloned().collect()
}

fn parse_attr<T: serde::de::DeserializeOwned>(
    name: &str,
    json: Option<&str>,
) -> Result<Vec<T>, FlowError> {
    match json {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw).map_err(|source| FlowError::MalformedPayload {
            event: name.to_string(),
            source,
        }),
    }
}
