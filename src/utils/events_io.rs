// Loading contest event files and exporting daily results

use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::models::Profit;

/// Loads a contest day file: one whitespace-separated integer row per line,
/// first line the day count, then one event row per day. Blank lines and
/// lines starting with `#` are skipped; unparseable fields become 0 so a
/// damaged file still yields a sequence the solver can absorb.
pub fn load_contest_days<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i64>>, io::Error> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut days = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row: Vec<i64> = trimmed
            .split_whitespace()
            .map(|field| field.parse::<i64>().unwrap_or(0))
            .collect();
        days.push(row);
    }

    Ok(days)
}

/// Serializable report of one contest run
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DailyProfitReport {
    pub daily_profit: Vec<Profit>,
}

/// Writes the per-day optima as pretty JSON
pub fn write_daily_profits<P: AsRef<Path>>(path: P, daily_profit: &[Profit]) -> io::Result<()> {
    let report = DailyProfitReport {
        daily_profit: daily_profit.to_vec(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)
}

/// Reads back a per-day profit report
pub fn read_daily_profits<P: AsRef<Path>>(path: P) -> io::Result<Vec<Profit>> {
    let json = fs::read_to_string(path)?;
    let report: DailyProfitReport = serde_json::from_str(&json)?;
    Ok(report.daily_profit)
}
