use broadside::{generate_fleet, Orientation, BB, NUM_SHIPS, SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fleet_matches_ship_table(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = generate_fleet(&mut rng).unwrap();
        prop_assert_eq!(fleet.len(), NUM_SHIPS);
        for (ship, spec) in fleet.iter().zip(SHIPS.iter()) {
            prop_assert_eq!(ship.class(), spec.class());
            prop_assert_eq!(ship.length(), spec.length());
            prop_assert_eq!(ship.cells().count(), spec.length());
        }
    }

    #[test]
    fn fleet_lies_on_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for ship in generate_fleet(&mut rng).unwrap() {
            prop_assert!(ship.cells().all(|c| c.in_bounds()));
            match ship.orientation() {
                Orientation::Horizontal => {
                    prop_assert_eq!(ship.start().row, ship.end().row);
                }
                Orientation::Vertical => {
                    prop_assert_eq!(ship.start().col, ship.end().col);
                }
            }
        }
    }

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = generate_fleet(&mut rng).unwrap();
        for (i, a) in fleet.iter().enumerate() {
            for b in fleet.iter().skip(i + 1) {
                let overlap = a.exclusion_zone().unwrap() & b.footprint().unwrap();
                prop_assert!(overlap.is_empty(), "{:?} touches {:?}", a, b);
            }
        }
    }
}

#[test]
fn test_fleet_is_reproducible_from_seed() {
    let a = generate_fleet(&mut SmallRng::seed_from_u64(99)).unwrap();
    let b = generate_fleet(&mut SmallRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fleet_cell_count() {
    let fleet = generate_fleet(&mut SmallRng::seed_from_u64(5)).unwrap();
    let mut map = BB::new();
    for ship in &fleet {
        map |= ship.footprint().unwrap();
    }
    assert_eq!(map.count_ones(), broadside::TOTAL_SHIP_CELLS);
}
