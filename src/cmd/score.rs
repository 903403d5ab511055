use crate::reports;
use clap::Args;
use floorforge::affinity::{self, Score};
use floorforge::config::OutputFormat;
use floorforge::error::{FfResult, FloorForgeError};
use floorforge::grid::Grid;
use floorforge::stations;
use serde::Serialize;
use std::str::FromStr;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(long, default_value_t = 8)]
    pub width: usize,
    #[arg(long, default_value_t = 4)]
    pub height: usize,

    #[arg(short = 's', long)]
    pub stations: Option<String>,

    #[arg(short = 'f', long)]
    pub file: Option<String>,

    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Serialize)]
struct ScoreDump<'a> {
    score: Score,
    grid: &'a Grid,
}

pub fn run(args: ScoreArgs) -> FfResult<()> {
    let format = OutputFormat::from_str(&args.format)
        .map_err(|_| FloorForgeError::Config(format!("Unknown output format '{}'", args.format)))?;

    let stations = match (&args.stations, &args.file) {
        (Some(list), _) => stations::parse_stations(list)?,
        (None, Some(path)) => stations::load_stations_csv(path)?,
        (None, None) => {
            return Err(FloorForgeError::Config(
                "Provide a layout via --stations or --file".to_string(),
            ))
        }
    };

    let grid = Grid::from_stations(args.width, args.height, &stations)?;
    let score = affinity::score(&grid);

    match format {
        OutputFormat::Table => {
            reports::print_grid("Floor", &grid);
            println!("Affinity: {}", score);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ScoreDump { score, grid: &grid })?
            );
        }
    }
    Ok(())
}
