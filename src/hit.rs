//! Hit-testing against canvas objects.
//!
//! Containment is strict: a point exactly on an object's edge is outside it.
//! When objects overlap, the one highest in z-order wins.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{CanvasObject, ObjectStore, Shape};
use crate::viewport::Point;

/// Whether `world_pt` lies strictly inside `obj`.
#[must_use]
pub fn point_in_object(world_pt: Point, obj: &CanvasObject) -> bool {
    match &obj.shape {
        Shape::Rectangle { width, height, .. } => {
            let loc = obj.location;
            loc.x < world_pt.x && world_pt.x < loc.x + width && loc.y < world_pt.y && world_pt.y < loc.y + height
        }
    }
}

/// Index of the topmost object under `world_pt`, if any.
#[must_use]
pub fn top_hit_at(world_pt: Point, doc: &ObjectStore) -> Option<usize> {
    doc.z_ordered()
        .rev()
        .find(|(_, obj)| point_in_object(world_pt, obj))
        .map(|(i, _)| i)
}

/// Recompute `is_hovered` for every object. Returns `true` if any flag changed.
pub fn update_hover(world_pt: Point, doc: &mut ObjectStore) -> bool {
    let mut changed = false;
    doc.for_each_mut(|_, obj| {
        let hovered = point_in_object(world_pt, obj);
        if hovered != obj.is_hovered {
            obj.is_hovered = hovered;
            changed = true;
        }
    });
    changed
}
