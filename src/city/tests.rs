// vim: set ai et ts=4 sw=4 sts=4:
//! City suite: grounding and support rules, cross-floor queries, bounds
//! arithmetic, and delegation of intra-floor rejections.

use std::collections::HashSet;

use super::*;
use crate::rect::Rect;
use crate::region::RegionError;

fn label_set(labels: &[&'static str]) -> HashSet<&'static str> {
    labels.iter().cloned().collect()
}

// owners of every unit cell on every floor plus bounds of every probed
// label; the observable state used by the atomicity checks
fn snapshot(city: &City<&'static str>, labels: &[&'static str])
    -> (Vec<HashSet<&'static str>>, Vec<Option<BuildingBounds>>)
{
    let g = city.grid_size();
    let mut cells = Vec::new();
    for floor in 0..g {
        for x in 0..g {
            for y in 0..g {
                cells.push(city.floor_owners(floor, Rect::new(x, y, x + 1, y + 1)));
            }
        }
    }
    let bounds = labels.iter().map(|label| city.bounds(label)).collect();
    (cells, bounds)
}

#[test]
fn test_fresh_city_owns_nothing() {
    let city: City<&'static str> = City::new(3);
    assert_eq!(city.grid_size(), 3);
    assert!(city.owners(Rect::new(0, 0, 3, 3)).is_empty());
    assert_eq!(city.bounds(&"A"), None);
}

#[test]
fn test_zero_grid_city_is_inert() {
    let mut city: City<&'static str> = City::new(0);
    assert!(city.owners(Rect::new(0, 0, 0, 0)).is_empty());
    assert_eq!(city.expand("A", 0, Rect::new(0, 0, 1, 1)),
               Err(CityError::FloorOutOfBounds(0, 0)));
    assert_eq!(city.bounds(&"A"), None);
}

#[test]
fn test_ground_floor_then_supported_upper_floor() {
    let mut city = City::new(3);
    assert_eq!(city.expand("A", 0, Rect::new(0, 0, 1, 1)), Ok(()));
    assert_eq!(city.expand("A", 1, Rect::new(0, 0, 1, 1)), Ok(()));
    assert_eq!(city.bounds(&"A"),
               Some(BuildingBounds { footprint: Rect::new(0, 0, 1, 1), height: 2 }));
}

#[test]
fn test_unsupported_upper_floor_rejected() {
    let mut city = City::new(3);
    let before = snapshot(&city, &["A"]);
    assert_eq!(city.expand("A", 1, Rect::new(2, 2, 3, 3)),
               Err(CityError::Ungrounded(Rect::new(2, 2, 3, 3), 1)));
    assert!(city.owners(Rect::new(0, 0, 3, 3)).is_empty());
    assert_eq!(city.bounds(&"A"), None);
    assert_eq!(snapshot(&city, &["A"]), before);
}

#[test]
fn test_floor_out_of_range_rejected() {
    let mut city = City::new(3);
    assert_eq!(city.expand("A", 3, Rect::new(0, 0, 1, 1)),
               Err(CityError::FloorOutOfBounds(3, 3)));
    assert!(city.owners(Rect::new(0, 0, 3, 3)).is_empty());
}

#[test]
fn test_upper_floor_must_rest_on_own_label() {
    let mut city = City::new(4);
    city.expand("A", 0, Rect::new(0, 0, 2, 2)).expect("ground");
    city.expand("B", 0, Rect::new(2, 2, 4, 4)).expect("other ground");
    // above B's cells, not above A's
    assert_eq!(city.expand("A", 1, Rect::new(2, 2, 4, 4)),
               Err(CityError::Ungrounded(Rect::new(2, 2, 4, 4), 1)));
    assert_eq!(city.expand("A", 1, Rect::new(0, 0, 2, 2)), Ok(()));
}

#[test]
fn test_presence_on_target_floor_permits_overhang() {
    let mut city = City::new(4);
    city.expand("A", 0, Rect::new(0, 0, 2, 1)).expect("ground");
    // no support below, no presence on floor 1 yet
    assert_eq!(city.expand("A", 1, Rect::new(2, 0, 3, 1)),
               Err(CityError::Ungrounded(Rect::new(2, 0, 3, 1), 1)));
    city.expand("A", 1, Rect::new(0, 0, 2, 1)).expect("supported segment");
    // same rectangle again: the label now lives on floor 1, and the new
    // cells connect to that segment, so the overhang is allowed
    assert_eq!(city.expand("A", 1, Rect::new(2, 0, 3, 1)), Ok(()));
    assert_eq!(city.bounds(&"A"),
               Some(BuildingBounds { footprint: Rect::new(0, 0, 3, 1), height: 2 }));
}

#[test]
fn test_intra_floor_rejections_delegate() {
    let mut city = City::new(4);
    city.expand("A", 0, Rect::new(0, 0, 2, 2)).expect("ground");
    let before = snapshot(&city, &["A", "B"]);
    assert_eq!(city.expand("B", 0, Rect::new(1, 1, 3, 3)),
               Err(CityError::Region(RegionError::LabelIntersection(Rect::new(1, 1, 3, 3)))));
    assert_eq!(city.expand("A", 0, Rect::new(3, 3, 4, 4)),
               Err(CityError::Region(RegionError::Discontiguous(Rect::new(3, 3, 4, 4)))));
    assert_eq!(city.expand("A", 0, Rect::new(0, 0, 0, 2)),
               Err(CityError::Region(RegionError::ZeroArea(Rect::new(0, 0, 0, 2)))));
    assert_eq!(city.expand("A", 0, Rect::new(0, 0, 5, 5)),
               Err(CityError::Region(RegionError::OutOfBounds(Rect::new(0, 0, 5, 5), 4))));
    assert_eq!(snapshot(&city, &["A", "B"]), before);
}

#[test]
fn test_unsupported_zero_area_reports_ungrounded() {
    // above ground the support check runs first, so a zero-area rectangle
    // with no footprint below surfaces as ungrounded
    let mut city = City::new(3);
    assert_eq!(city.expand("A", 1, Rect::new(1, 1, 1, 2)),
               Err(CityError::Ungrounded(Rect::new(1, 1, 1, 2), 1)));
    let mut grounded = City::new(3);
    assert_eq!(grounded.expand("A", 0, Rect::new(1, 1, 1, 2)),
               Err(CityError::Region(RegionError::ZeroArea(Rect::new(1, 1, 1, 2)))));
}

#[test]
fn test_owners_project_across_floors() {
    let mut city = City::new(4);
    city.expand("A", 0, Rect::new(0, 0, 1, 1)).expect("ground");
    city.expand("A", 1, Rect::new(0, 0, 1, 1)).expect("floor 1");
    city.expand("A", 2, Rect::new(0, 0, 1, 1)).expect("floor 2");
    city.expand("B", 0, Rect::new(2, 2, 3, 3)).expect("other ground");
    assert_eq!(city.owners(Rect::new(0, 0, 4, 4)), label_set(&["A", "B"]));
    assert_eq!(city.owners(Rect::new(0, 0, 1, 1)), label_set(&["A"]));
    assert_eq!(city.owners(Rect::new(2, 2, 3, 3)), label_set(&["B"]));
    assert_eq!(city.owners(Rect::new(3, 0, 4, 1)), label_set(&[]));
    assert_eq!(city.owners(Rect::new(1, 1, 1, 1)), label_set(&[]));
}

#[test]
fn test_floor_owners_are_per_floor() {
    let mut city = City::new(3);
    city.expand("A", 0, Rect::new(0, 0, 2, 2)).expect("ground");
    city.expand("A", 1, Rect::new(0, 0, 1, 1)).expect("floor 1");
    assert_eq!(city.floor_owners(0, Rect::new(0, 0, 3, 3)), label_set(&["A"]));
    assert_eq!(city.floor_owners(1, Rect::new(1, 1, 2, 2)), label_set(&[]));
    assert_eq!(city.floor_owners(2, Rect::new(0, 0, 3, 3)), label_set(&[]));
    assert_eq!(city.floor_owners(9, Rect::new(0, 0, 3, 3)), label_set(&[]));
}

#[test]
fn test_bounds_hull_and_height() {
    let mut city = City::new(5);
    city.expand("A", 0, Rect::new(0, 0, 3, 3)).expect("ground");
    city.expand("A", 1, Rect::new(0, 0, 1, 1)).expect("floor 1");
    city.expand("A", 2, Rect::new(0, 0, 1, 1)).expect("floor 2");
    let bounds = city.bounds(&"A").expect("building exists");
    assert_eq!(bounds.footprint, Rect::new(0, 0, 3, 3));
    assert_eq!(bounds.height, 3);
    // a second building does not disturb the first's bounds
    city.expand("B", 0, Rect::new(4, 4, 5, 5)).expect("other ground");
    assert_eq!(city.bounds(&"A").expect("still there").height, 3);
    assert_eq!(city.bounds(&"B"),
               Some(BuildingBounds { footprint: Rect::new(4, 4, 5, 5), height: 1 }));
}

#[test]
fn test_growing_a_floor_widens_the_footprint() {
    let mut city = City::new(4);
    city.expand("A", 0, Rect::new(1, 1, 2, 2)).expect("ground");
    city.expand("A", 1, Rect::new(1, 1, 2, 2)).expect("floor 1");
    city.expand("A", 1, Rect::new(2, 1, 4, 2)).expect("grow floor 1");
    let bounds = city.bounds(&"A").expect("building exists");
    assert_eq!(bounds.footprint, Rect::new(1, 1, 4, 2));
    assert_eq!(bounds.height, 2);
}

#[test]
fn test_display_lists_floors() {
    let mut city = City::new(2);
    city.expand("A", 0, Rect::new(0, 0, 1, 1)).expect("ground");
    let dump = city.to_string();
    assert!(dump.contains("Floor 0:"), "{:?}", dump);
    assert!(dump.contains("Floor 1:"), "{:?}", dump);
    assert_eq!(dump, city.to_string());
}
