#![allow(clippy::float_cmp)]

use super::*;

fn rect(w: f64, h: f64) -> Shape {
    Shape::Rectangle { width: w, height: h, color: Color("#D94B4B".into()) }
}

// =============================================================
// Color / Shape
// =============================================================

#[test]
fn color_hsl_format() {
    assert_eq!(Color::hsl(300.0).as_str(), "hsl(300, 100%, 60%)");
    assert_eq!(Color::hsl(412.5).as_str(), "hsl(412.5, 100%, 60%)");
}

#[test]
fn shape_size_reports_rectangle_dimensions() {
    assert_eq!(rect(100.0, 50.0).size(), Point::new(100.0, 50.0));
}

#[test]
fn shape_serializes_with_kind_tag() {
    let json = serde_json::to_value(rect(10.0, 20.0)).unwrap_or_default();
    assert_eq!(json["kind"], "rectangle");
    assert_eq!(json["width"], 10.0);
    assert_eq!(json["color"], "#D94B4B");
}

// =============================================================
// ObjectStore
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ObjectStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.get(0).is_none());
}

#[test]
fn add_returns_sequential_indices() {
    let mut store = ObjectStore::new();
    assert_eq!(store.add(rect(1.0, 1.0), Point::new(0.0, 0.0)), 0);
    assert_eq!(store.add(rect(1.0, 1.0), Point::new(0.0, 0.0)), 1);
    assert_eq!(store.add(rect(1.0, 1.0), Point::new(0.0, 0.0)), 2);
    assert_eq!(store.len(), 3);
}

#[test]
fn add_assigns_unique_ids_and_increasing_z() {
    let mut store = ObjectStore::new();
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    let a = store.get(0).map(|o| (o.id, o.z_index));
    let b = store.get(1).map(|o| (o.id, o.z_index));
    assert_ne!(a.map(|x| x.0), b.map(|x| x.0));
    assert!(a.map(|x| x.1) < b.map(|x| x.1));
}

#[test]
fn add_starts_unhovered_at_given_location() {
    let mut store = ObjectStore::new();
    let i = store.add(rect(100.0, 50.0), Point::new(150.0, -50.0));
    let obj = store.get(i).map(Clone::clone);
    assert_eq!(obj.as_ref().map(|o| o.location), Some(Point::new(150.0, -50.0)));
    assert_eq!(obj.map(|o| o.is_hovered), Some(false));
}

#[test]
fn index_of_finds_added_object() {
    let mut store = ObjectStore::new();
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    let i = store.add(rect(2.0, 2.0), Point::new(0.0, 0.0));
    let id = store.get(i).map(|o| o.id);
    assert_eq!(id.and_then(|id| store.index_of(id)), Some(1));
    assert_eq!(store.index_of(999), None);
}

#[test]
fn z_ordered_walks_bottom_first() {
    let mut store = ObjectStore::new();
    for i in 0..4 {
        store.add(rect(1.0, 1.0), Point::new(f64::from(i), 0.0));
    }
    let indices: Vec<usize> = store.z_ordered().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    let z: Vec<u64> = store.z_ordered().map(|(_, o)| o.z_index).collect();
    assert!(z.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn z_ordered_reverses_for_topmost_first() {
    let mut store = ObjectStore::new();
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    let first_from_top = store.z_ordered().next_back().map(|(i, _)| i);
    assert_eq!(first_from_top, Some(1));
}

#[test]
fn z_ordered_follows_z_index_not_insertion() {
    let mut store = ObjectStore::new();
    for _ in 0..3 {
        store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    }
    if let Some(obj) = store.get_mut(0) {
        obj.z_index = 99;
    }
    let indices: Vec<usize> = store.z_ordered().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![1, 2, 0]);
}

#[test]
fn add_after_raise_lands_on_top() {
    let mut store = ObjectStore::new();
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    if let Some(obj) = store.get_mut(0) {
        obj.z_index = 99;
    }
    let i = store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    assert_eq!(store.get(i).map(|o| o.z_index), Some(100));
    assert_eq!(store.z_ordered().next_back().map(|(i, _)| i), Some(2));
}

#[test]
fn for_each_mut_visits_in_order_with_indices() {
    let mut store = ObjectStore::new();
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    let mut seen = Vec::new();
    store.for_each_mut(|i, obj| {
        seen.push(i);
        obj.is_hovered = i == 1;
    });
    assert_eq!(seen, vec![0, 1]);
    assert_eq!(store.get(0).map(|o| o.is_hovered), Some(false));
    assert_eq!(store.get(1).map(|o| o.is_hovered), Some(true));
}

#[test]
fn get_mut_updates_location_in_place() {
    let mut store = ObjectStore::new();
    let i = store.add(rect(1.0, 1.0), Point::new(0.0, 0.0));
    if let Some(obj) = store.get_mut(i) {
        obj.location = Point::new(50.0, 100.0);
    }
    assert_eq!(store.get(i).map(|o| o.location), Some(Point::new(50.0, 100.0)));
}
