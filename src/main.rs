use std::env;
use std::path::PathBuf;

use chrono::Local;
use statcast_vra::core::chart::{DEFAULT_IMAGE_SIZE, export_file_name, render_png};
use statcast_vra::core::dataset::{DEFAULT_DATA_PATH, PitchTable};
use statcast_vra::core::logging::init_logging;
use statcast_vra::core::pipeline::PlayerView;
use tracing::{error, warn};

#[derive(Clone, Debug, PartialEq)]
enum Command {
    Help,
    ListPlayers {
        data: PathBuf,
    },
    Report {
        data: PathBuf,
        player: String,
        output: Option<PathBuf>,
    },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        return Ok(Command::Help);
    }

    let mut data = PathBuf::from(DEFAULT_DATA_PATH);
    let mut positional = Vec::new();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--data" {
            let value = iter
                .next()
                .ok_or_else(|| "Expected a path after --data.".to_string())?;
            data = PathBuf::from(value);
        } else if arg.starts_with("--") {
            return Err(format!("Unknown option '{arg}'."));
        } else {
            positional.push(arg.clone());
        }
    }

    match positional.as_slice() {
        [] => Ok(Command::ListPlayers { data }),
        [player] => Ok(Command::Report {
            data,
            player: player.clone(),
            output: None,
        }),
        [player, output] => Ok(Command::Report {
            data,
            player: player.clone(),
            output: Some(PathBuf::from(output)),
        }),
        _ => Err("Expected at most 2 arguments: <player> [output.png].".to_string()),
    }
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [--data <csv>]");
    println!("  {program} [--data <csv>] <player> [output.png]");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} \"Cole, Gerrit\"");
    println!("  {program} --data 2024mlbvradata.csv \"Cole, Gerrit\" cole.png");
}

fn list_players(table: &PitchTable) {
    for name in table.player_names() {
        println!("{name}");
    }
}

fn format_mean(mean: Option<f64>) -> String {
    mean.map_or_else(|| "n/a".to_string(), |value| format!("{value:.2}"))
}

fn report(table: &PitchTable, player: &str, output: Option<PathBuf>) -> Result<(), String> {
    let view = PlayerView::build(table, player);
    if view.stats.selected == 0 {
        warn!(player, "no rows for player");
    }

    println!("\n{}", view.title());
    println!(
        "Pitches: {} selected | {} missing inputs | {} undefined angles | {} plotted",
        view.stats.selected,
        view.stats.missing_inputs,
        view.stats.undefined_angles,
        view.stats.plotted
    );
    for row in view.summary() {
        println!(
            "  {:<16} n={:<4} VAA {:>7} deg | VRA {:>6.2} deg | HRA {:>6.2} deg",
            row.name,
            row.count,
            format_mean(row.mean_vaa),
            row.mean_vra,
            row.mean_hra
        );
    }

    let path = output.unwrap_or_else(|| {
        PathBuf::from(export_file_name(player, &Local::now().naive_local()))
    });
    render_png(&view, &path, DEFAULT_IMAGE_SIZE).map_err(|e| e.to_string())?;
    println!("\nChart written to {}", path.display());

    Ok(())
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    match parse_args(&args)? {
        Command::Help => {
            print_usage(&args[0]);
            Ok(())
        }
        Command::ListPlayers { data } => {
            let table = PitchTable::load(&data).map_err(|e| e.to_string())?;
            list_players(&table);
            Ok(())
        }
        Command::Report {
            data,
            player,
            output,
        } => {
            let table = PitchTable::load(&data).map_err(|e| e.to_string())?;
            report(&table, &player, output)
        }
    }
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
