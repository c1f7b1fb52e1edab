use std::io::Write;
use std::{io, time};

use board_game_traits::Color;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pointflip::evaluation::{self, EvaluationMode};
use pointflip::play_match;
use pointflip::position::{self, Position, Square};
use pointflip::search::{self, Engine, NoMovePolicy, SearchSettings};

fn main() {
    println!("play <rows> <cols> <depth>: Play against the engine through the command line");
    println!("selfplay <rows> <cols> <depth>: Watch the engine play against itself");
    println!("analyze <depth>: Find the best move in a position, provided as two layouts");
    println!(
        "match <rows> <cols> <openings> <depth1> <depth2>: Play two search depths against each other"
    );
    loop {
        let mut input = String::new();
        let bytes_read = io::stdin().read_line(&mut input).unwrap();
        if bytes_read == 0 {
            break;
        }
        let words = input.split_whitespace().collect::<Vec<_>>();
        if words.is_empty() {
            continue;
        }
        let arg = |i: usize, default: usize| -> usize {
            words
                .get(i)
                .map(|word| word.parse().unwrap())
                .unwrap_or(default)
        };
        match words[0] {
            "play" => {
                let start_position = random_start_position(arg(1, 8), arg(2, 8));
                let settings = SearchSettings::default().depth(arg(3, 4) as u16);
                play_human(start_position, &settings);
            }
            "selfplay" => {
                let start_position = random_start_position(arg(1, 8), arg(2, 8));
                let settings = SearchSettings::default().depth(arg(3, 4) as u16);
                selfplay(&start_position, &settings);
            }
            "analyze" => analyze_position(arg(1, search::DEFAULT_DEPTH as usize) as u16),
            "match" => {
                let start_positions: Vec<Position> = (0..arg(3, 10))
                    .map(|_| random_start_position(arg(1, 8), arg(2, 8)))
                    .collect();
                let first = SearchSettings::default().depth(arg(4, 2) as u16);
                let second = SearchSettings::default().depth(arg(5, 1) as u16);
                let start_time = time::Instant::now();
                let score = play_match::play_match(&start_positions, &first, &second);
                println!(
                    "Depth {} vs depth {}: +{}-{}={} in {:.1}s",
                    first.search_depth(),
                    second.search_depth(),
                    score.wins,
                    score.losses,
                    score.draws,
                    start_time.elapsed().as_secs_f32()
                );
            }
            s => println!("Unknown command {}", s),
        }
    }
}

fn random_start_position(rows: usize, cols: usize) -> Position {
    let mut rng = SmallRng::seed_from_u64(rand::thread_rng().gen());
    let layout = position::start_layout(rows, cols, &mut rng);
    Position::from_starting_layout(&layout).unwrap()
}

fn read_layout(prompt: &str) -> String {
    println!("{}", prompt);
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn analyze_position(depth: u16) {
    let engine = Engine::initialize(&read_layout("Enter starting layout")).unwrap();
    let current = read_layout("Enter current layout, with the engine's pieces as O");
    let scores: Vec<i32> = read_layout("Enter both scores, the engine's first")
        .split_whitespace()
        .map(|score| score.parse().unwrap())
        .collect();
    let position = engine
        .read_position(
            &current,
            scores.first().copied().unwrap_or_default(),
            scores.get(1).copied().unwrap_or_default(),
        )
        .unwrap();
    println!("{:?}", position);

    for mode in [EvaluationMode::ValueWeighted, EvaluationMode::UnitWeighted] {
        println!("Static eval ({:?}): {}", mode, evaluation::evaluate(&position, mode));
    }

    for policy in [NoMovePolicy::Evaluate, NoMovePolicy::Pass] {
        let settings = SearchSettings::default().depth(depth).no_move_policy(policy);
        for d in 0..=depth {
            let start_time = time::Instant::now();
            let (best_move, stats) =
                search::best_move_with_stats(&position, &settings.depth(d));
            match best_move {
                Some((mv, value)) => println!(
                    "{:?} depth {}: {} with value {}, {} nodes, {} cutoffs, {:.2}s",
                    policy,
                    d,
                    mv,
                    value,
                    stats.nodes,
                    stats.cutoffs,
                    start_time.elapsed().as_secs_f32()
                ),
                None => {
                    println!("No legal moves");
                    return;
                }
            }
        }
    }
}

fn selfplay(start_position: &Position, settings: &SearchSettings) {
    println!("Start position:\n{:?}", start_position);
    let game = play_match::play_game(start_position, settings, settings);
    for (ply, (color, mv)) in game.moves.iter().enumerate() {
        let mv_string = mv.map_or("pass".to_string(), |square| square.to_string());
        if ply % 2 == 0 {
            print!("{}. {:>5} ", ply / 2 + 1, mv_string);
        } else {
            println!("{:>5}", mv_string);
        }
        debug_assert_eq!(*color == Color::White, ply % 2 == 0);
    }
    println!();
    println!("Final position:\n{:?}", game.final_position);
    println!("{:?}", game.game_result);
}

/// The human plays black, and enters moves as "row col"
fn play_human(mut position: Position, settings: &SearchSettings) {
    let mut side_to_move = Color::White;
    let mut passes_in_a_row = 0;
    let mut legal_moves = vec![];

    while passes_in_a_row < 2 {
        println!("Position:\n{:?}", position);
        legal_moves.clear();
        position.generate_moves(side_to_move, &mut legal_moves);
        if legal_moves.is_empty() {
            println!("{} has no legal moves and passes", side_to_move);
            passes_in_a_row += 1;
            side_to_move = !side_to_move;
            continue;
        }
        passes_in_a_row = 0;

        let mv = match side_to_move {
            Color::White => {
                let (mv, value) = search::best_move(&position, settings).unwrap();
                println!("Computer played {} with value {}", mv, value);
                mv
            }
            Color::Black => read_human_move(&legal_moves),
        };
        position.do_move(mv, side_to_move);
        side_to_move = !side_to_move;
    }
    println!("Final position:\n{:?}", position);
    println!("{:?}", play_match::game_result(&position));
}

fn read_human_move(legal_moves: &[Square]) -> Square {
    print!("Type your move as \"row col\": ");
    io::stdout().flush().unwrap();
    let reader = io::stdin();
    let mut input = String::new();
    // Loop until user enters a valid move
    loop {
        input.clear();
        reader.read_line(&mut input).expect("Failed to read line");
        match Square::parse_square(input.trim()) {
            Ok(square) if legal_moves.contains(&square) => return square,
            Ok(square) => {
                println!("Move {} is illegal! Legal moves: {:?}", square, legal_moves);
                println!("Try again: ");
            }
            Err(error) => println!("{}, try again.", error),
        }
    }
}
