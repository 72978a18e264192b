use chrono::TimeDelta;
use hyttetur::prelude::*;
use hyttetur::shared::utc;

fn leg(id: &str, from: &str, to: &str, day: u32, hour: u32) -> Trip {
    let start = utc(2024, 9, day, hour, 0).unwrap();
    Trip::new(id, from, to, start, start + TimeDelta::hours(2))
}

fn ids(group: &RoundTripGroup) -> Vec<&str> {
    group.legs().iter().map(|leg| &*leg.id).collect()
}

#[test]
fn every_trip_lands_in_exactly_one_group() {
    let trips = vec![
        leg("6", "Oslo", "Gol", 9, 10),
        leg("1", "Oslo", "Ullsåk", 1, 10),
        leg("4", "Oslo", "Nes", 5, 8),
        leg("2", "Ullsåk", "Hemsedal", 2, 10),
        leg("8", "Gol", "Bergen", 11, 10),
        leg("3", "Hemsedal", "Oslo", 3, 10),
        leg("5", "Nes", "Oslo", 5, 17),
        leg("7", "Oslo", "Ullsåk", 10, 10),
    ];
    let groups = group(trips);
    let flattened: Vec<&str> = groups.iter().flat_map(ids).collect();
    assert_eq!(flattened, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    assert_eq!(groups.len(), 4);
    assert_eq!(ids(&groups[0]), ["1", "2", "3"]);
    assert_eq!(ids(&groups[1]), ["4", "5"]);
    assert_eq!(ids(&groups[2]), ["6"]);
    assert_eq!(ids(&groups[3]), ["7", "8"]);
}

#[test]
fn stray_return_leg_opens_its_own_group() {
    let groups = group(vec![
        leg("1", "Ullsåk", "Oslo", 1, 10),
        leg("2", "Oslo", "Ullsåk", 2, 10),
    ]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].origin(), "Ullsåk");
    assert!(groups[0].is_closed());
}

#[test]
fn groups_are_not_reordered_internally() {
    let groups = group(vec![
        leg("1", "Oslo", "Gol", 1, 10),
        leg("3", "Hemsedal", "Ullsåk", 1, 14),
        leg("2", "Gol", "Hemsedal", 1, 12),
    ]);
    assert_eq!(ids(&groups[0]), ["1", "2", "3"]);
}

#[test]
fn group_origin_is_not_tied_to_home() {
    let groups = group(vec![
        leg("1", "Bergen", "Gol", 1, 10),
        leg("2", "Gol", "Bergen", 1, 14),
        leg("3", "Bergen", "Voss", 2, 10),
    ]);
    assert_eq!(groups.len(), 2);
    assert_eq!(ids(&groups[0]), ["1", "2"]);
    assert_eq!(ids(&groups[1]), ["3"]);
}
