//! Answer a single move request: read the starting layout and the current layout from
//! files, and print the engine's move as "row col", or "-1 -1" if it has no legal moves.

use std::io::Result;
use std::{fs, io};

use clap::{Arg, ArgAction, Command};
use log::{debug, info};

use pointflip::evaluation::EvaluationMode;
use pointflip::position::Point;
use pointflip::search::{Engine, NoMovePolicy, SearchSettings, DEFAULT_DEPTH};

fn invalid_layout(err: pgn_traits::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err.to_string())
}

pub fn main() -> Result<()> {
    let mut app = Command::new("Pointflip move picker")
        .version("0.1")
        .arg(
            Arg::new("initial")
                .short('i')
                .long("initial")
                .env("INITIAL_LAYOUT")
                .value_name("FILE")
                .help("File with the game's starting layout, which fixes the point value of every square")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("current")
                .short('c')
                .long("current")
                .env("CURRENT_LAYOUT")
                .value_name("FILE")
                .help("File with the current layout, with the engine's pieces as O and the opponent's as o")
                .required(true)
                .num_args(1),
        )
        .arg(
            Arg::new("ourScore")
                .long("our-score")
                .env("OUR_SCORE")
                .help("The engine's current score")
                .num_args(1)
                .default_value("0")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("theirScore")
                .long("their-score")
                .env("THEIR_SCORE")
                .help("The opponent's current score")
                .num_args(1)
                .default_value("0")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .env("DEPTH")
                .help("Number of plies searched below each candidate move")
                .num_args(1)
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("evalMode")
                .long("eval-mode")
                .env("EVAL_MODE")
                .help("Weigh each piece by its square's point value, or count every piece as 1")
                .num_args(1)
                .value_parser(["value", "unit"])
                .default_value("value"),
        )
        .arg(
            Arg::new("noMove")
                .long("no-move")
                .env("NO_MOVE")
                .help("What the search does when the side to move has no legal moves: evaluate the position, or pass to the other side")
                .num_args(1)
                .value_parser(["evaluate", "pass"])
                .default_value("evaluate"),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("LOGFILE")
                .value_name("pointflip.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .arg(
            Arg::new("logLevel")
                .long("log-level")
                .env("LOG_LEVEL")
                .help("Level of log messages written to stderr")
                .num_args(1)
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("warn"),
        );

    if cfg!(all(feature = "serde", feature = "serde_json")) {
        app = app.arg(
            Arg::new("json")
                .long("json")
                .env("JSON")
                .help("Print the move as a JSON object")
                .action(ArgAction::SetTrue)
                .num_args(0),
        );
    }
    let matches = app.get_matches();

    let stderr_level = match matches.get_one::<String>("logLevel").unwrap().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        s => panic!("logLevel cannot be {}", s),
    };

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(fern::Dispatch::new().level(stderr_level).chain(io::stderr()))
            .apply()
            .unwrap()
    } else {
        log_dispatcher
            .level(stderr_level)
            .chain(io::stderr())
            .apply()
            .unwrap()
    }

    let evaluation_mode = match matches.get_one::<String>("evalMode").unwrap().as_str() {
        "value" => EvaluationMode::ValueWeighted,
        "unit" => EvaluationMode::UnitWeighted,
        s => panic!("evalMode cannot be {}", s),
    };
    let no_move_policy = match matches.get_one::<String>("noMove").unwrap().as_str() {
        "evaluate" => NoMovePolicy::Evaluate,
        "pass" => NoMovePolicy::Pass,
        s => panic!("noMove cannot be {}", s),
    };
    let settings = SearchSettings::default()
        .depth(
            matches
                .get_one::<u16>("depth")
                .copied()
                .unwrap_or(DEFAULT_DEPTH),
        )
        .evaluation_mode(evaluation_mode)
        .no_move_policy(no_move_policy);
    debug!("Search settings: {:?}", settings);

    let initial_layout = fs::read_to_string(matches.get_one::<String>("initial").unwrap())?;
    let current_layout = fs::read_to_string(matches.get_one::<String>("current").unwrap())?;
    let our_score = *matches.get_one::<i32>("ourScore").unwrap();
    let their_score = *matches.get_one::<i32>("theirScore").unwrap();

    let engine = Engine::initialize(&initial_layout)
        .map_err(invalid_layout)?
        .with_settings(settings);
    let position = engine
        .read_position(&current_layout, our_score, their_score)
        .map_err(invalid_layout)?;
    debug!("Current position:\n{:?}", position);

    let point: Point = engine.place(&position);
    info!("Placing at {}", point);

    let json = cfg!(all(feature = "serde", feature = "serde_json")) && matches.get_flag("json");
    print_point(point, json)
}

#[cfg(all(feature = "serde", feature = "serde_json"))]
fn print_point(point: Point, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&point)?);
    } else {
        println!("{}", point);
    }
    Ok(())
}

#[cfg(not(all(feature = "serde", feature = "serde_json")))]
fn print_point(point: Point, _json: bool) -> Result<()> {
    println!("{}", point);
    Ok(())
}
