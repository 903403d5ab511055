use crate::error::{FfResult, FloorForgeError};
use crate::grid::StationId;
use fastrand::Rng;
use std::path::Path;

/// Draws a random station list: each cell is left empty with
/// `hole_percent`/100 probability, otherwise it gets a uniform identifier
/// in `1..=max_station_id`.
pub fn random_stations(
    len: usize,
    hole_percent: u32,
    max_station_id: StationId,
    rng: &mut Rng,
) -> Vec<StationId> {
    (0..len)
        .map(|_| {
            if rng.u32(0..100) < hole_percent {
                0
            } else {
                rng.u16(1..=max_station_id)
            }
        })
        .collect()
}

/// Parses a comma-separated station list like "1,5,0,3". Blank entries are
/// skipped so trailing commas are harmless.
pub fn parse_stations(s: &str) -> FfResult<Vec<StationId>> {
    let mut stations = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id: StationId = part.parse().map_err(|_| {
            FloorForgeError::Validation(format!(
                "Station id '{}' is not a non-negative integer",
                part
            ))
        })?;
        stations.push(id);
    }
    if stations.is_empty() {
        return Err(FloorForgeError::Validation(
            "Station list contains no values".to_string(),
        ));
    }
    Ok(stations)
}

/// Reads a station list from a headerless CSV file. Records are
/// concatenated row-major, so one long line and one line per floor row both
/// work.
pub fn load_stations_csv<P: AsRef<Path>>(path: P) -> FfResult<Vec<StationId>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut stations = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        for field in record.iter() {
            if field.is_empty() {
                continue;
            }
            let id: StationId = field.parse().map_err(|_| {
                FloorForgeError::Validation(format!(
                    "Station id '{}' on line {} is not a non-negative integer",
                    field,
                    line + 1
                ))
            })?;
            stations.push(id);
        }
    }
    if stations.is_empty() {
        return Err(FloorForgeError::Validation(
            "Station file contains no values".to_string(),
        ));
    }
    Ok(stations)
}
