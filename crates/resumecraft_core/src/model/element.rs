//! Free-form canvas element model.
//!
//! # Responsibility
//! - Define the positionable, styleable element shape used by the canvas.
//! - Provide partial-update merge semantics for element attributes.
//!
//! # Invariants
//! - Elements are independent of resume data after seeding.
//! - `is_visible` controls render presence only; it is not deletion.
//! - Position coordinates never go below zero through drag updates.

use uuid::Uuid;

/// Stable identifier for one canvas element.
pub type ElementId = Uuid;

/// Element category on the canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Image,
    Shape,
}

/// Horizontal text alignment for text elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One positioned, styled object on the free-form canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub text_align: Option<TextAlign>,
    pub is_locked: bool,
    pub is_visible: bool,
}

impl EditorElement {
    /// Creates an element with a generated ID and neutral geometry.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: String::new(),
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 30.0,
            font_size: None,
            font_family: None,
            font_weight: None,
            color: None,
            background_color: None,
            rotation: None,
            opacity: None,
            text_align: None,
            is_locked: false,
            is_visible: true,
        }
    }

    /// Merges a partial attribute patch into this element.
    ///
    /// Absent patch fields leave the current value untouched.
    pub fn apply(&mut self, patch: &ElementPatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = Some(font_size);
        }
        if let Some(font_family) = &patch.font_family {
            self.font_family = Some(font_family.clone());
        }
        if let Some(font_weight) = &patch.font_weight {
            self.font_weight = Some(font_weight.clone());
        }
        if let Some(color) = &patch.color {
            self.color = Some(color.clone());
        }
        if let Some(background_color) = &patch.background_color {
            self.background_color = Some(background_color.clone());
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = Some(rotation);
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = Some(opacity);
        }
        if let Some(text_align) = patch.text_align {
            self.text_align = Some(text_align);
        }
        if let Some(is_locked) = patch.is_locked {
            self.is_locked = is_locked;
        }
        if let Some(is_visible) = patch.is_visible {
            self.is_visible = is_visible;
        }
    }
}

/// Partial attribute set for element creation and updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub content: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub text_align: Option<TextAlign>,
    pub is_locked: Option<bool>,
    pub is_visible: Option<bool>,
}
