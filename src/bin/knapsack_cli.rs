//! Terminal driver for knapsack-duel.
//!
//! Plays one game on stdin/stdout. AI seats move on their own; a human whose
//! bag is full is skipped automatically.
//!
//! Usage:
//!   knapsack-cli [--seed N] [--difficulty easy|medium|hard] [--multiplayer]
//!                [--players N] [--config game.json] [--auto] [--json]
//!
//! Prompt commands:
//!   take <index> [fraction]   take a fraction (default 1.0) of an item
//!   skip                      pass the turn
//!   state                     reprint the table
//!   difficulty <level>        change the AI difficulty
//!   quit                      leave the game
//!
//! `--auto` seats the configured AI tier in every chair and plays to the end.
//! Set `RUST_LOG=debug` to see every move the engine commits.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use knapsack_duel::{Difficulty, Engine, GameConfig, GameMode, GameSnapshot, TierPolicy};
use knapsack_duel::{Decision, DecisionPolicy, GameRng};

struct Options {
    config: GameConfig,
    difficulty: Difficulty,
    mode: GameMode,
    players: usize,
    auto: bool,
    json: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        config: GameConfig::default(),
        difficulty: Difficulty::Medium,
        mode: GameMode::SingleOpponent,
        players: 2,
        auto: false,
        json: false,
    };
    let mut seed = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{name} needs a value"));
        match arg.as_str() {
            "--seed" => {
                let raw = value("--seed")?;
                seed = Some(raw.parse::<u64>().map_err(|e| format!("bad seed '{raw}': {e}"))?);
            }
            "--difficulty" => {
                options.difficulty = value("--difficulty")?.parse().map_err(|e| format!("{e}"))?;
            }
            "--players" => {
                let raw = value("--players")?;
                options.players = raw
                    .parse()
                    .map_err(|e| format!("bad player count '{raw}': {e}"))?;
            }
            "--config" => {
                let path = value("--config")?;
                let text = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
                options.config = serde_json::from_str(&text).map_err(|e| format!("{path}: {e}"))?;
            }
            "--multiplayer" => options.mode = GameMode::Multiplayer,
            "--auto" => options.auto = true,
            "--json" => options.json = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    // An explicit --seed wins over the config file; otherwise each run differs
    // unless the config pins one.
    if let Some(seed) = seed {
        options.config.seed = seed;
    } else if options.config == GameConfig::default() {
        options.config.seed = rand::random();
    }
    Ok(options)
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match Engine::new(options.config.clone()) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let names = seat_names(&options);
    if let Err(err) = engine.initialize_game(&names[..], options.mode, options.difficulty) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    log::info!("seed {}", options.config.seed);

    let finished = if options.auto {
        play_auto(&mut engine, &options);
        engine.is_game_over()
    } else {
        play_interactive(&mut engine)
    };

    let snapshot = engine.game_state();
    if options.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("error: {err}"),
        }
    } else if finished {
        print_result(&snapshot);
    }
    ExitCode::SUCCESS
}

const IDLE_ROUNDS: usize = 10;

fn seat_names(options: &Options) -> Vec<String> {
    if options.auto {
        return (1..=options.players.max(1))
            .map(|i| format!("AI {i} ({})", options.difficulty))
            .collect();
    }
    match (options.mode, options.players) {
        (GameMode::SingleOpponent, 2) => {
            vec!["Player".to_string(), format!("AI ({})", options.difficulty)]
        }
        (_, count) => (1..=count).map(|i| format!("Player {i}")).collect(),
    }
}

/// Every seat is driven by the configured tier. The engine only runs
/// policies for its own AI seats, so the driver asks the policy directly and
/// submits the choice as a regular pick.
///
/// Stops early after `IDLE_ROUNDS` full rounds in which nobody took anything,
/// which the Advisor thresholds can cause.
fn play_auto(engine: &mut Engine, options: &Options) {
    let policy = TierPolicy::for_tier(options.difficulty, options.config.policy_profile);
    // The engine's first fork draws the pool; the driver takes the next one.
    let mut root = GameRng::new(options.config.seed);
    let _pool = root.fork();
    let mut rng = root.fork();
    let mut idle_turns = 0;

    while !engine.is_game_over() {
        let picked = if engine.is_ai_turn() {
            engine.ai_make_move().is_some()
        } else {
            let Some(player) = engine.current_player() else { break };
            let decision = policy.decide(engine.available_items(), player, &mut rng);
            let picked = match decision {
                Decision::Take { index, fraction } => {
                    engine.human_pick_fraction(index, fraction).is_ok()
                }
                Decision::NoMove => false,
            };
            if !picked {
                engine.skip_turn();
            }
            picked
        };

        idle_turns = if picked { 0 } else { idle_turns + 1 };
        if idle_turns >= engine.player_count() * IDLE_ROUNDS {
            log::warn!("no seat can move; stopping self-play");
            break;
        }
    }
}

/// Returns `false` if the player quit before the game ended.
fn play_interactive(engine: &mut Engine) -> bool {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print_table(&engine.game_state());

    while !engine.is_game_over() {
        if engine.is_ai_turn() {
            let name = current_name(engine);
            match engine.ai_make_move() {
                Some(outcome) => println!("{name}: {outcome}"),
                None => println!("{name} passes"),
            }
            continue;
        }

        if engine.current_player().is_some_and(|p| p.is_full()) {
            println!("{}'s bag is full, skipping", current_name(engine));
            engine.skip_turn();
            continue;
        }

        print!("{}> ", current_name(engine));
        // Prompt only; a failed flush just delays it.
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else { return false };
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["take", index, rest @ ..] => {
                let fraction = rest.first().map_or(Ok(1.0), |f| f.parse::<f64>());
                match (index.parse::<usize>(), fraction) {
                    (Ok(index), Ok(fraction)) => match engine.human_pick_fraction(index, fraction) {
                        Ok(outcome) => println!("{outcome}"),
                        Err(err) => println!("rejected: {err}"),
                    },
                    _ => println!("usage: take <index> [fraction]"),
                }
            }
            ["skip"] => engine.skip_turn(),
            ["state"] => print_table(&engine.game_state()),
            ["difficulty", level] => match level.parse::<Difficulty>() {
                Ok(level) => engine.set_ai_difficulty(level),
                Err(err) => println!("{err}"),
            },
            ["quit"] => return false,
            [] => {}
            _ => println!(
                "commands: take <index> [fraction], skip, state, difficulty <level>, quit"
            ),
        }
    }
    true
}

fn current_name(engine: &Engine) -> String {
    engine
        .current_player()
        .map(|p| p.name().to_string())
        .unwrap_or_default()
}

fn print_table(snapshot: &GameSnapshot) {
    println!("\n  #  {:<10} {:>6} {:>8} {:>6}", "item", "weight", "value", "ratio");
    for (i, item) in snapshot.available_items.iter().enumerate() {
        println!(
            "{:>3}  {:<10} {:>3}/{:<2} {:>8.1} {:>6.2}",
            i, item.name, item.weight, item.original_weight, item.value, item.ratio
        );
    }
    println!();
    for (i, player) in snapshot.players.iter().enumerate() {
        let marker = if i == snapshot.current_player { '*' } else { ' ' };
        println!(
            "{marker} {:<16} weight {:>5.1}/{:<5} value {:>6.1}  ({} fragments)",
            player.name,
            player.weight,
            player.bag_limit,
            player.value,
            player.bag.len()
        );
    }
    println!();
}

fn print_result(snapshot: &GameSnapshot) {
    print_table(snapshot);
    match &snapshot.winner {
        Some(name) => println!("{name} wins!"),
        None => println!("It's a draw."),
    }
}
