use serde_json::json;
use tesseract_canvas::{
    can_place, Canvas, CanvasError, CanvasOptions, DropEffect, DropOutcome, DropTarget,
    ElementKind, Resolution, TargetKind,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: CanvasError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Drag-and-drop layout canvas driven by DOM drag events
#[wasm_bindgen]
pub struct CanvasBuilder {
    canvas: Canvas,
}

#[wasm_bindgen]
impl CanvasBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new(nearest_ancestor: bool, id_prefix: Option<String>) -> CanvasBuilder {
        let mut options = CanvasOptions::default();
        if nearest_ancestor {
            options.resolution = Resolution::NearestAncestor;
        }
        if let Some(prefix) = id_prefix {
            options.id_prefix = prefix;
        }
        CanvasBuilder {
            canvas: Canvas::with_options(options),
        }
    }

    /// Palette item picked up; `kind` is its `data-type`
    #[wasm_bindgen(js_name = dragStartPalette)]
    pub fn drag_start_palette(&mut self, kind: &str) -> Result<(), JsValue> {
        self.canvas
            .drag_start_palette(ElementKind::parse(kind))
            .map_err(to_js)
    }

    /// Existing canvas element picked up
    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, id: &str) -> Result<(), JsValue> {
        self.canvas.drag_start_node(id).map_err(to_js)
    }

    /// Returns the `dropEffect` to show: "copy", "move" or "none"
    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&mut self, target: &str) -> String {
        let effect = match self.canvas.drag_over(&DropTarget::from(target)) {
            DropEffect::Copy => "copy",
            DropEffect::Move => "move",
            DropEffect::None => "none",
        };
        effect.to_string()
    }

    #[wasm_bindgen(js_name = dragLeave)]
    pub fn drag_leave(&mut self, target: &str) {
        self.canvas.drag_leave(&DropTarget::from(target));
    }

    /// Returns a JSON description of the outcome
    pub fn drop(&mut self, target: &str) -> Result<String, JsValue> {
        let outcome = self
            .canvas
            .drop(&DropTarget::from(target))
            .map_err(to_js)?;
        Ok(describe(&outcome).to_string())
    }

    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self) {
        self.canvas.drag_end();
    }

    pub fn delete(&mut self, id: &str) -> Result<(), JsValue> {
        self.canvas.delete(id).map(|_| ()).map_err(to_js)
    }

    /// Container currently showing the drop-allowed highlight
    pub fn highlighted(&self) -> Option<String> {
        self.canvas.highlighted().map(|t| t.as_id().to_string())
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self, id: &str) -> bool {
        self.canvas.is_dragging(id)
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.canvas.to_json().map_err(to_js)
    }

    pub fn outline(&self) -> String {
        self.canvas.tree().outline()
    }
}

fn describe(outcome: &DropOutcome) -> serde_json::Value {
    match outcome {
        DropOutcome::Created { id, parent } => {
            json!({ "status": "created", "id": id, "parent": parent.as_id() })
        }
        DropOutcome::Moved { id, parent } => {
            json!({ "status": "moved", "id": id, "parent": parent.as_id() })
        }
        DropOutcome::Rejected(rejection) => {
            json!({ "status": "rejected", "reason": rejection.to_string() })
        }
        DropOutcome::Ignored => json!({ "status": "ignored" }),
    }
}

/// Whether a `dragged` element may be dropped straight into a `target`
/// container ("canvas", "row", "col", "div" or "leaf")
#[wasm_bindgen(js_name = canPlace)]
pub fn can_place_js(dragged: &str, target: &str) -> bool {
    TargetKind::ALL
        .iter()
        .find(|kind| kind.to_string() == target)
        .map(|kind| can_place(&ElementKind::parse(dragged), *kind))
        .unwrap_or(false)
}
