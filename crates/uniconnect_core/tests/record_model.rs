use uniconnect_core::model::feed::FeedItem;
use uniconnect_core::model::placement::{Placement, PlacementKind};
use uniconnect_core::seed;

#[test]
fn placement_serialization_uses_expected_wire_fields() {
    let placement = seed::placements().remove(1);
    let json = serde_json::to_value(&placement).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["company"], "Microsoft");
    assert_eq!(json["type"], "fulltime");
    assert_eq!(json["applied"], false);

    let decoded: Placement = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.kind, PlacementKind::FullTime);
    assert_eq!(decoded, placement);
}

#[test]
fn feed_item_serializes_kind_and_priority_in_snake_case() {
    let item = seed::feed_items().remove(0);
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["type"], "assignment");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["subtitle"], "Calculus Problem Set 3");

    let decoded: FeedItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn seed_ids_are_sequential_from_one() {
    let ids: Vec<u32> = seed::notices().iter().map(|notice| notice.id).collect();
    assert_eq!(ids, (1..=6).collect::<Vec<u32>>());
    let ids: Vec<u32> = seed::clubs().iter().map(|club| club.id).collect();
    assert_eq!(ids, (1..=6).collect::<Vec<u32>>());
}
