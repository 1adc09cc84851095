//! Document model: placed canvas objects and the in-memory store.
//!
//! This module defines what is on the canvas (`CanvasObject`, `Shape`) and the
//! store that owns every live object (`ObjectStore`). The store is a plain
//! vector kept in z-order: index 0 is drawn first and loses hit-test ties,
//! the last index is drawn on top and wins them. The renderer and the hit
//! tester both read that order through [`ObjectStore::z_ordered`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::viewport::Point;

/// Unique identifier for a canvas object, assigned by the store.
pub type ObjectId = u64;

/// A CSS color string. Opaque to everything except the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub String);

impl Color {
    /// A fully saturated HSL color at the given hue in degrees.
    #[must_use]
    pub fn hsl(hue: f64) -> Self {
        Self(format!("hsl({hue}, 100%, 60%)"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-kind geometry and style of a canvas object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned rectangle anchored at its top-left corner.
    Rectangle { width: f64, height: f64, color: Color },
}

impl Shape {
    /// Bounding box size as `(width, height)` in world units.
    #[must_use]
    pub fn size(&self) -> Point {
        match self {
            Self::Rectangle { width, height, .. } => Point::new(*width, *height),
        }
    }
}

/// A placed object as stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasObject {
    /// Unique identifier for this object.
    pub id: ObjectId,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: u64,
    /// Top-left corner in world coordinates. Always on a grid line.
    pub location: Point,
    /// Geometry and style.
    pub shape: Shape,
    /// Whether the pointer is currently inside the object. Recomputed on every move.
    pub is_hovered: bool,
}

/// In-memory store of canvas objects. Stacking follows `z_index`.
#[derive(Debug, Default)]
pub struct ObjectStore {
    objects: Vec<CanvasObject>,
    next_id: ObjectId,
}

impl ObjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object on top of everything else and return its index.
    pub fn add(&mut self, shape: Shape, location: Point) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let z_index = self.objects.iter().map(|o| o.z_index.saturating_add(1)).max().unwrap_or_default();
        self.objects.push(CanvasObject { id, z_index, location, shape, is_hovered: false });
        self.objects.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CanvasObject> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CanvasObject> {
        self.objects.get_mut(index)
    }

    /// Index of the object with the given id, if present.
    #[must_use]
    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// Objects with their store indices, sorted bottom first by `z_index`.
    ///
    /// This is the single draw and hit-test order: render walks it forward,
    /// the hit tester walks it backward. Equal `z_index` values fall back to
    /// insertion order, so the later object is on top.
    pub fn z_ordered(&self) -> impl DoubleEndedIterator<Item = (usize, &CanvasObject)> {
        let mut ordered: Vec<_> = self.objects.iter().enumerate().collect();
        ordered.sort_by_key(|(i, o)| (o.z_index, *i));
        ordered.into_iter()
    }

    /// Visit every object mutably in insertion order, with its index.
    ///
    /// The closure cannot add or reorder objects, so indices held by an
    /// in-progress drag stay valid.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, &mut CanvasObject),
    {
        for (i, obj) in self.objects.iter_mut().enumerate() {
            f(i, obj);
        }
    }

    /// Number of objects currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
