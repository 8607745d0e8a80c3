//! Free-form dragging of page nodes on the node canvas.
//!
//! Positions are relative to the canvas origin, keep the grab offset, and
//! never go negative. Releasing the pointer reports the final position in
//! whole pixels.

use crate::intents::FlowIntent;
use crate::model::Point;

#[derive(Debug, Clone, PartialEq)]
struct Grab {
    node_id: String,
    offset: Point,
    position: Point,
}

#[derive(Debug, Default)]
pub struct NodeDrag {
    grab: Option<Grab>,
}

impl NodeDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed on a node whose box starts at `node_origin`
    ///
    /// All coordinates are client coordinates.
    pub fn pointer_down(
        &mut self,
        node_id: impl Into<String>,
        pointer: Point,
        node_origin: Point,
        canvas_origin: Point,
    ) {
        self.grab = Some(Grab {
            node_id: node_id.into(),
            offset: Point::new(pointer.x - node_origin.x, pointer.y - node_origin.y),
            position: clamp(Point::new(
                node_origin.x - canvas_origin.x,
                node_origin.y - canvas_origin.y,
            )),
        });
    }

    /// Pointer moved; returns the node's new position while dragging
    pub fn pointer_move(&mut self, pointer: Point, canvas_origin: Point) -> Option<Point> {
        let grab = self.grab.as_mut()?;
        grab.position = clamp(Point::new(
            pointer.x - canvas_origin.x - grab.offset.x,
            pointer.y - canvas_origin.y - grab.offset.y,
        ));
        Some(grab.position)
    }

    /// Pointer released; yields the position update to push
    pub fn pointer_up(&mut self) -> Option<FlowIntent> {
        let grab = self.grab.take()?;
        Some(FlowIntent::UpdateNodePosition {
            id: grab.node_id,
            x: grab.position.x.trunc() as i64,
            y: grab.position.y.trunc() as i64,
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    pub fn dragged_node(&self) -> Option<&str> {
        self.grab.as_ref().map(|g| g.node_id.as_str())
    }
}

fn clamp(p: Point) -> Point {
    Point::new(p.x.max(0.0), p.y.max(0.0))
}
