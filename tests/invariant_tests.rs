//! Property tests for the engine's invariants under arbitrary command streams.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use knapsack_duel::{
    ConfigError, Difficulty, Engine, GameConfig, GameMode, Item, Player, PolicyProfile,
};

#[derive(Clone, Debug)]
enum Command {
    Pick { index: usize, fraction: f64 },
    Skip,
    Ai,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0usize..30, -0.5f64..1.5)
            .prop_map(|(index, fraction)| Command::Pick { index, fraction }),
        1 => Just(Command::Skip),
        3 => Just(Command::Ai),
    ]
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard)
    ]
}

fn profile() -> impl Strategy<Value = PolicyProfile> {
    prop_oneof![Just(PolicyProfile::Live), Just(PolicyProfile::Advisor)]
}

/// Whole capacities mixed with fractional ones.
fn capacity() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => (1u32..40).prop_map(f64::from),
        1 => (1u32..40, 0.05f64..0.95).prop_map(|(whole, part)| f64::from(whole) + part),
    ]
}

fn apply(engine: &mut Engine, command: &Command) {
    match *command {
        Command::Pick { index, fraction } => {
            let _ = engine.human_pick_fraction(index, fraction);
        }
        Command::Skip => engine.skip_turn(),
        Command::Ai => {
            engine.ai_make_move();
        }
    }
}

/// Weight taken into bags plus weight left in the pool, per item name.
fn weight_accounting(engine: &Engine) -> FxHashMap<String, u32> {
    let mut totals = FxHashMap::default();
    for fragment in engine.players().iter().flat_map(Player::bag) {
        *totals.entry(fragment.name.clone()).or_insert(0) += fragment.weight;
    }
    for item in engine.available_items() {
        *totals.entry(item.name().to_string()).or_insert(0) += item.weight();
    }
    totals
}

fn check_invariants(
    engine: &Engine,
    originals: &FxHashMap<String, u32>,
) -> Result<(), TestCaseError> {
    for player in engine.players() {
        prop_assert!(
            player.current_weight() <= player.bag_limit(),
            "{} over capacity",
            player.name()
        );
    }
    for item in engine.available_items() {
        prop_assert!(!item.is_depleted(), "depleted item left in pool");
        prop_assert_eq!(item.is_depleted(), item.weight() == 0);
        prop_assert!(item.value() >= 0.0);
        prop_assert!((item.value() - f64::from(item.weight()) * item.unit_value()).abs() < 1e-6);
    }

    let accounted = weight_accounting(engine);
    for (name, original) in originals {
        prop_assert_eq!(accounted.get(name).copied().unwrap_or(0), *original, "item {}", name);
    }

    let all_full = engine.players().iter().all(Player::is_full);
    let expected_over = all_full || engine.available_items().is_empty();
    if engine.turn_number() > 1 {
        prop_assert_eq!(engine.is_game_over(), expected_over);
    }
    prop_assert!(engine.current_player_id().index() < engine.player_count());
    Ok(())
}

proptest! {
    #[test]
    fn prop_engine_invariants(
        seed in any::<u64>(),
        capacity in capacity(),
        players in 1usize..5,
        single in any::<bool>(),
        difficulty in difficulty(),
        profile in profile(),
        commands in prop::collection::vec(command(), 0..80),
    ) {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_bag_capacity(capacity)
            .with_policy_profile(profile);
        if capacity.fract() != 0.0 {
            let rejected = Engine::new(config).err();
            prop_assert_eq!(rejected, Some(ConfigError::InvalidCapacity(capacity)));
            return Ok(());
        }
        let mut engine = Engine::new(config).unwrap();
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        let mode = if single { GameMode::SingleOpponent } else { GameMode::Multiplayer };
        engine.initialize_game(&names[..], mode, difficulty).unwrap();

        let originals: FxHashMap<String, u32> = engine
            .available_items()
            .iter()
            .map(|item| (item.name().to_string(), item.original_weight()))
            .collect();

        let mut was_over = false;
        for command in &commands {
            apply(&mut engine, command);
            check_invariants(&engine, &originals)?;
            if was_over {
                prop_assert!(engine.is_game_over(), "game over must be sticky");
            }
            was_over = engine.is_game_over();
        }
    }

    #[test]
    fn prop_full_game_terminates(
        seed in any::<u64>(),
        capacity in 1u32..40,
        players in 2usize..5,
        difficulty in difficulty(),
    ) {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_bag_capacity(f64::from(capacity));
        let mut engine = Engine::new(config).unwrap();
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        engine.initialize_game(&names[..], GameMode::SingleOpponent, difficulty).unwrap();

        let mut turns = 0;
        while !engine.is_game_over() && turns < 2_000 {
            if engine.is_ai_turn() {
                engine.ai_make_move();
            } else if engine.human_pick_fraction(0, 1.0).is_err() {
                engine.skip_turn();
            }
            turns += 1;
        }

        prop_assert!(engine.is_game_over(), "stuck after {} turns", turns);
        prop_assert!(engine.winner().is_some());
    }

    #[test]
    fn prop_capacity_holds_for_fractional_limits(
        limit in 0.5f64..30.0,
        requests in prop::collection::vec((1u32..12, 0.01f64..2.0), 1..40),
    ) {
        let mut player = Player::new("P", limit);
        for (weight, fraction) in requests {
            let mut item = Item::new("X", weight, f64::from(weight) * 2.0);
            let before = item.weight();
            match player.add_item_fraction(&mut item, fraction) {
                Ok(pickup) => prop_assert_eq!(pickup.fragment.weight + item.weight(), before),
                Err(_) => prop_assert_eq!(item.weight(), before),
            }
            prop_assert!(player.current_weight() <= player.bag_limit());
        }
    }

    #[test]
    fn prop_available_fraction_formula(
        limit in 0.0f64..20.0,
        filled in 0u32..20,
        weight in 0u32..15,
    ) {
        let mut player = Player::new("P", limit);
        if filled > 0 {
            let mut filler = Item::new("F", filled, 1.0);
            let _ = player.add_item_fraction(&mut filler, 1.0);
        }
        let item = Item::new("X", weight, 5.0);
        let space = player.bag_limit() - player.current_weight();
        let fraction = player.available_fraction(&item);

        if space <= 0.001 || f64::from(weight) <= 0.001 {
            prop_assert_eq!(fraction, 0.0);
        } else {
            prop_assert_eq!(fraction, (space / f64::from(weight)).min(1.0));
        }
    }

    #[test]
    fn prop_skip_cycles(players in 1usize..8) {
        let mut engine = Engine::new(GameConfig::default()).unwrap();
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        engine.initialize_game(&names[..], GameMode::Multiplayer, Difficulty::Easy).unwrap();

        let start = engine.current_player_id();
        let mut seen = Vec::new();
        for _ in 0..players {
            seen.push(engine.current_player_id().index());
            engine.skip_turn();
        }
        prop_assert_eq!(engine.current_player_id(), start);
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..players).collect::<Vec<_>>());
    }
}

#[test]
fn test_full_game_reaches_game_over() {
    for difficulty in Difficulty::ALL {
        let mut engine = Engine::new(GameConfig::default().with_seed(8)).unwrap();
        engine
            .initialize_game(&["Human", "AI"], GameMode::SingleOpponent, difficulty)
            .unwrap();

        let mut turns = 0;
        while !engine.is_game_over() && turns < 500 {
            if engine.is_ai_turn() {
                engine.ai_make_move();
            } else if engine.human_pick_fraction(0, 1.0).is_err() {
                engine.skip_turn();
            }
            turns += 1;
        }

        assert!(engine.is_game_over(), "{difficulty} game did not finish");
        assert!(engine.winner().is_some());
    }
}
