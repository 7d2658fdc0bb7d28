//! Canvas session: element CRUD, selection, and the drag state machine.
//!
//! # Responsibility
//! - Apply element add/duplicate/delete/update operations.
//! - Drive the Idle/Dragging pointer protocol for one element at a time.
//!
//! # Invariants
//! - At most one element drags at a time; drag state is owned by the
//!   session, not by elements.
//! - Dragged positions clamp each axis to a minimum of 0; there is no
//!   upper clamp.
//! - Pointer-up always returns to Idle, wherever the pointer is.

use crate::model::element::{
    EditorElement, ElementId, ElementKind, ElementPatch, TextAlign,
};
use crate::model::resume::Resume;

/// Offset applied to duplicated elements on both axes.
const DUPLICATE_OFFSET: f64 = 20.0;

/// Drag interaction state.
///
/// `Dragging` records where inside the element the pointer grabbed it, so
/// moves keep the grab point under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { offset_x: f64, offset_y: f64 },
}

/// One what-you-see-is-what-you-get layout surface.
pub struct CanvasSession {
    elements: Vec<EditorElement>,
    selected: Option<ElementId>,
    drag: DragState,
}

impl CanvasSession {
    /// Creates an empty canvas with nothing selected.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            drag: DragState::Idle,
        }
    }

    /// Seeds the initial text elements from the current resume.
    ///
    /// A one-shot projection: later resume edits do not flow into the
    /// canvas, and canvas edits never write back.
    pub fn seeded_from(resume: &Resume) -> Self {
        let mut session = Self::new();
        let full_name = if resume.personal_info.full_name.is_empty() {
            "Your Name"
        } else {
            resume.personal_info.full_name.as_str()
        };

        session.add(
            ElementKind::Text,
            ElementPatch {
                content: Some(full_name.to_string()),
                x: Some(50.0),
                y: Some(50.0),
                width: Some(300.0),
                height: Some(40.0),
                font_size: Some(32.0),
                font_family: Some("Inter".to_string()),
                font_weight: Some("bold".to_string()),
                color: Some("#1f2937".to_string()),
                text_align: Some(TextAlign::Left),
                ..ElementPatch::default()
            },
        );
        session.add(
            ElementKind::Text,
            ElementPatch {
                content: Some("Professional Summary".to_string()),
                x: Some(50.0),
                y: Some(120.0),
                width: Some(200.0),
                height: Some(24.0),
                font_size: Some(18.0),
                font_family: Some("Inter".to_string()),
                font_weight: Some("600".to_string()),
                color: Some("#374151".to_string()),
                text_align: Some(TextAlign::Left),
                ..ElementPatch::default()
            },
        );
        session.set_selected(None);
        session
    }

    pub fn elements(&self) -> &[EditorElement] {
        &self.elements
    }

    /// Elements currently rendered, honoring the visibility toggle.
    pub fn visible_elements(&self) -> impl Iterator<Item = &EditorElement> {
        self.elements.iter().filter(|element| element.is_visible)
    }

    pub fn element(&self, id: ElementId) -> Option<&EditorElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Appends a new element and selects it.
    pub fn add(&mut self, kind: ElementKind, attrs: ElementPatch) -> ElementId {
        let mut element = EditorElement::new(kind);
        element.apply(&attrs);
        let id = element.id;
        self.elements.push(element);
        self.selected = Some(id);
        id
    }

    /// Clones an element's full attribute set under a new ID, offset by a
    /// fixed delta, and selects the clone. Unknown IDs are ignored.
    pub fn duplicate(&mut self, id: ElementId) -> Option<ElementId> {
        let source = self.element(id)?.clone();
        let mut clone = source;
        clone.id = uuid::Uuid::new_v4();
        clone.x += DUPLICATE_OFFSET;
        clone.y += DUPLICATE_OFFSET;
        let clone_id = clone.id;
        self.elements.push(clone);
        self.selected = Some(clone_id);
        Some(clone_id)
    }

    /// Removes an element; clears selection when it was selected.
    pub fn delete(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|element| element.id != id);
        if self.elements.len() == before {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Merges partial attributes into the matching element; no-op when the
    /// ID is unknown.
    pub fn update(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        match self.elements.iter_mut().find(|element| element.id == id) {
            Some(element) => {
                element.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn set_selected(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    /// Pointer-down over an element body: record the grab offset, select
    /// the element, enter Dragging. Returns false for unknown IDs.
    pub fn pointer_down(&mut self, id: ElementId, pointer_x: f64, pointer_y: f64) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };

        self.drag = DragState::Dragging {
            offset_x: pointer_x - element.x,
            offset_y: pointer_y - element.y,
        };
        self.selected = Some(id);
        true
    }

    /// Pointer-move while Dragging: reposition the selected element so the
    /// grab point follows the pointer, clamping each axis at 0.
    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64) -> bool {
        let DragState::Dragging { offset_x, offset_y } = self.drag else {
            return false;
        };
        let Some(id) = self.selected else {
            return false;
        };

        let new_x = (pointer_x - offset_x).max(0.0);
        let new_y = (pointer_y - offset_y).max(0.0);
        match self.elements.iter_mut().find(|element| element.id == id) {
            Some(element) => {
                element.x = new_x;
                element.y = new_y;
                true
            }
            None => false,
        }
    }

    /// Pointer-up anywhere: back to Idle. Selection is retained.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasSession, DragState};
    use crate::model::element::{ElementKind, ElementPatch};

    fn element_at(x: f64, y: f64) -> ElementPatch {
        ElementPatch {
            x: Some(x),
            y: Some(y),
            ..ElementPatch::default()
        }
    }

    #[test]
    fn add_selects_the_new_element() {
        let mut canvas = CanvasSession::new();
        let id = canvas.add(ElementKind::Text, ElementPatch::default());
        assert_eq!(canvas.selected(), Some(id));
    }

    #[test]
    fn duplicate_offsets_position_by_twenty() {
        let mut canvas = CanvasSession::new();
        let id = canvas.add(ElementKind::Text, element_at(100.0, 80.0));
        let clone_id = canvas.duplicate(id).expect("source exists");

        let clone = canvas.element(clone_id).expect("clone exists");
        assert_eq!((clone.x, clone.y), (120.0, 100.0));
        assert_ne!(clone_id, id);
        assert_eq!(canvas.selected(), Some(clone_id));
    }

    #[test]
    fn drag_clamps_each_axis_at_zero_independently() {
        let mut canvas = CanvasSession::new();
        let id = canvas.add(ElementKind::Shape, element_at(10.0, 10.0));

        assert!(canvas.pointer_down(id, 15.0, 15.0));
        assert!(canvas.pointer_move(2.0, 400.0));

        let element = canvas.element(id).expect("element exists");
        assert_eq!(element.x, 0.0);
        assert_eq!(element.y, 395.0);
    }

    #[test]
    fn pointer_up_returns_to_idle_and_keeps_selection() {
        let mut canvas = CanvasSession::new();
        let id = canvas.add(ElementKind::Text, element_at(0.0, 0.0));

        canvas.pointer_down(id, 5.0, 5.0);
        assert!(matches!(canvas.drag_state(), DragState::Dragging { .. }));

        canvas.pointer_up();
        assert_eq!(canvas.drag_state(), DragState::Idle);
        assert_eq!(canvas.selected(), Some(id));
    }

    #[test]
    fn move_without_active_drag_changes_nothing() {
        let mut canvas = CanvasSession::new();
        let id = canvas.add(ElementKind::Text, element_at(30.0, 30.0));

        assert!(!canvas.pointer_move(200.0, 200.0));
        let element = canvas.element(id).expect("element exists");
        assert_eq!((element.x, element.y), (30.0, 30.0));
    }
}
