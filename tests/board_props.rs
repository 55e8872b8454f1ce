use gridfleet::{
    AttackResult, Board, BoardError, Combatant, Coordinate, Orientation, TileState, VesselKind,
    BOARD_SIZE, STANDARD_FLEET,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn kind() -> impl Strategy<Value = VesselKind> {
    prop::sample::select(VesselKind::ALL.to_vec())
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(r, c)| Coordinate::new(r, c).unwrap())
}

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng, &STANDARD_FLEET).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_covers_length_cells_or_overflows(
        kind in kind(),
        origin in coordinate(),
        orientation in orientation(),
    ) {
        let mut board = Board::new();
        let far = match orientation {
            Orientation::Horizontal => origin.col(),
            Orientation::Vertical => origin.row(),
        } + kind.length() - 1;
        match board.place_vessel(kind, origin, orientation) {
            Ok(id) => {
                prop_assert!(far < BOARD_SIZE);
                let placed = board.vessel(id).unwrap();
                prop_assert_eq!(placed.cells().len(), kind.length());
                prop_assert_eq!(placed.cells()[0], origin);
            }
            Err(e) => {
                prop_assert!(far >= BOARD_SIZE);
                prop_assert_eq!(e, BoardError::OutOfBounds);
                prop_assert_eq!(board.vessel_count(), 0);
            }
        }
    }

    #[test]
    fn failed_placement_leaves_board_unchanged(
        seed in any::<u64>(),
        kind in kind(),
        origin in coordinate(),
        orientation in orientation(),
    ) {
        let mut board = random_board(seed);
        let before: Vec<Option<_>> = Coordinate::all()
            .map(|c| board.vessel_at(c).map(|v| v.id()))
            .collect();
        if board.place_vessel(kind, origin, orientation).is_err() {
            let after: Vec<Option<_>> = Coordinate::all()
                .map(|c| board.vessel_at(c).map(|v| v.id()))
                .collect();
            prop_assert_eq!(before, after);
            prop_assert_eq!(board.vessel_count(), STANDARD_FLEET.len());
        } else {
            prop_assert_eq!(board.vessel_count(), STANDARD_FLEET.len() + 1);
        }
    }

    #[test]
    fn attack_idempotent(seed in any::<u64>(), target in coordinate()) {
        let mut board = random_board(seed);
        let first = board.receive_attack(target);
        let damage: Vec<usize> = board.vessels().iter().map(|v| v.vessel().hits_taken()).collect();
        let second = board.receive_attack(target);
        prop_assert_eq!(first, second);
        let after: Vec<usize> = board.vessels().iter().map(|v| v.vessel().hits_taken()).collect();
        prop_assert_eq!(damage, after);
        let expected = if first == AttackResult::Hit { TileState::Hit } else { TileState::Miss };
        prop_assert_eq!(board.tile_state(target), expected);
    }

    #[test]
    fn sunk_iff_every_cell_hit(seed in any::<u64>(), shots in prop::collection::vec(coordinate(), 0..120)) {
        let mut board = random_board(seed);
        for s in &shots {
            board.receive_attack(*s);
        }
        let every_cell_hit = board
            .vessels()
            .iter()
            .all(|v| v.cells().iter().all(|c| board.tile_state(*c) == TileState::Hit));
        prop_assert_eq!(board.all_vessels_sunk(), every_cell_hit);
    }

    #[test]
    fn random_attack_resolves_its_target(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut attacker = Combatant::new("a");
        let mut defender = Combatant::with_board("d", random_board(seed));
        for _ in 0..20 {
            let target = attacker.attack_random(&mut defender, &mut rng);
            prop_assert_ne!(defender.board().tile_state(target), TileState::Hidden);
        }
    }
}
