use broadside::{
    generate_fleet, play_game, Engine, EngineError, ExternalCoord, Player, ShipClass, TargetFleet,
    BOARD_HEIGHT, BOARD_WIDTH, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_engine_sinks_generated_fleet() {
    let mut fleet_rng = SmallRng::seed_from_u64(123);
    let mut engine = Engine::from_seed(456);
    for _ in 0..10 {
        let layout = generate_fleet(&mut fleet_rng).unwrap();
        let mut target = TargetFleet::new(layout).unwrap();
        let summary = play_game(&mut engine, &mut target).unwrap();
        assert_eq!(summary.hits, TOTAL_SHIP_CELLS);
        assert!(summary.shots <= BOARD_WIDTH * BOARD_HEIGHT);
        assert!(target.all_sunk());
    }
}

#[test]
fn test_play_game_through_trait_object() {
    let mut engine = Engine::from_seed(9);
    let player: &mut dyn Player = &mut engine;
    assert_eq!(player.name(), "broadside");
    let layout = generate_fleet(&mut SmallRng::seed_from_u64(10)).unwrap();
    let mut target = TargetFleet::new(layout).unwrap();
    let summary = play_game(player, &mut target).unwrap();
    assert_eq!(summary.hits, TOTAL_SHIP_CELLS);
}

#[test]
fn test_target_fleet_answers_shots() {
    let layout = generate_fleet(&mut SmallRng::seed_from_u64(31)).unwrap();
    let mut target = TargetFleet::new(layout).unwrap();
    assert_eq!(target.ships_remaining(), NUM_SHIPS);

    let boat = target
        .ships()
        .iter()
        .find(|s| s.class() == ShipClass::PatrolBoat)
        .copied()
        .unwrap();
    for cell in boat.cells() {
        assert!(!target.is_sunk(ShipClass::PatrolBoat));
        assert!(target.fire(cell.to_external().unwrap()).unwrap());
    }
    assert!(target.is_sunk(ShipClass::PatrolBoat));
    assert_eq!(target.ships_remaining(), NUM_SHIPS - 1);

    let again = boat.start_external().unwrap();
    assert!(matches!(target.fire(again), Err(EngineError::DuplicateShot { .. })));
    assert_eq!(
        target.fire(ExternalCoord::new('A', 11)),
        Err(EngineError::InvalidCoordinate)
    );
}

#[test]
fn test_ship_positions_starts_new_game() {
    let mut engine = Engine::from_seed(12);
    engine.select_target().unwrap();
    engine.record_shot_result(false).unwrap();
    let fleet = Player::ship_positions(&mut engine).unwrap();
    assert_eq!(fleet.len(), NUM_SHIPS);
    assert_eq!(engine.shots_fired(), 0);
    assert!(engine.opponent_shot(ExternalCoord::new('C', 4)).is_ok());
}
