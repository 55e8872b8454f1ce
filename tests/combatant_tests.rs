use gridfleet::{AttackResult, BoardError, Combatant, Coordinate, TileState};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_players_attack_enemy_board() {
    let mut player1 = Combatant::new("player1");
    let mut player2 = Combatant::new("player2");
    player2
        .board_mut()
        .place_vessel_str("cruiser", "B1", "vertical")
        .unwrap();

    assert_eq!(player1.attack_str(&mut player2, "B1"), Ok(AttackResult::Hit));
    assert_eq!(player1.attack_str(&mut player2, "G7"), Ok(AttackResult::Miss));
    assert_eq!(player1.shots_fired(), 2);
    // the attacker's own board is untouched
    assert!(Coordinate::all().all(|c| player1.board().tile_state(c) == TileState::Hidden));
}

#[test]
fn test_invalid_coordinate_propagates() {
    let mut player1 = Combatant::new("player1");
    let mut player2 = Combatant::new("player2");
    assert_eq!(
        player1.attack_str(&mut player2, "K2"),
        Err(BoardError::InvalidCoordinate)
    );
    assert_eq!(player1.shots_fired(), 0);
}

#[test]
fn test_random_targets_cover_grid() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..5000 {
        let c = Combatant::random_target(&mut rng);
        assert!(c.row() < 10 && c.col() < 10);
        seen.insert(c);
    }
    assert_eq!(seen.len(), 100, "every cell reachable, including row J and column 10");
}

#[test]
fn test_attack_random_marks_tile() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut player1 = Combatant::new("player1");
    let mut player2 = Combatant::new("player2");
    let target = player1.attack_random(&mut player2, &mut rng);
    assert_eq!(player2.board().tile_state(target), TileState::Miss);
}

#[test]
fn test_has_lost() {
    let mut player1 = Combatant::new("player1");
    let mut player2 = Combatant::new("player2");
    player2
        .board_mut()
        .place_vessel_str("destroyer", "A1", "horizontal")
        .unwrap();
    assert!(!player2.has_lost());
    player1.attack_str(&mut player2, "A1").unwrap();
    assert!(!player2.has_lost());
    player1.attack_str(&mut player2, "A2").unwrap();
    assert!(player2.has_lost());
}
