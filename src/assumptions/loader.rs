//! CSV-based cost schedule loader
//!
//! Loads the cost-rule table from data/assumptions/cost_schedule.csv as an
//! alternative to the built-in constants. Columns:
//! `category,first_month,last_month,amount,kind`.

use super::category::CostCategory;
use super::schedule::{CostKind, CostRule, CostSchedule, MonthSpan, ScheduleError};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

const SCHEDULE_FILE: &str = "cost_schedule.csv";
const SCHEDULE_FIELDS: usize = 5;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected 5 fields, got {got}")]
    FieldCount { row: usize, got: usize },

    #[error("row {row}: unknown cost category '{value}'")]
    UnknownCategory { row: usize, value: String },

    #[error("row {row}: unknown cost kind '{value}'")]
    UnknownKind { row: usize, value: String },

    #[error("row {row}: invalid {field} '{value}'")]
    BadNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Load and validate the cost schedule from a directory
pub fn load_cost_schedule(dir: &Path) -> Result<CostSchedule, LoadError> {
    let path = dir.join(SCHEDULE_FILE);
    let file = File::open(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rules = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 2; // 1-based, after the header line
        let record = result?;
        if record.len() != SCHEDULE_FIELDS {
            return Err(LoadError::FieldCount {
                row,
                got: record.len(),
            });
        }

        let category = CostCategory::parse(&record[0]).ok_or_else(|| LoadError::UnknownCategory {
            row,
            value: record[0].to_string(),
        })?;
        let first = parse_number::<u32>(&record[1], row, "first_month")?;
        let last = parse_number::<u32>(&record[2], row, "last_month")?;
        let amount = parse_number::<f64>(&record[3], row, "amount")?;
        let kind = CostKind::parse(&record[4]).ok_or_else(|| LoadError::UnknownKind {
            row,
            value: record[4].to_string(),
        })?;

        rules.push(CostRule::new(category, MonthSpan::new(first, last), amount, kind));
    }

    let schedule = CostSchedule::new(rules);
    schedule.validate()?;
    log::info!(
        "loaded {} cost rules from {}",
        schedule.rules().len(),
        path.display()
    );
    Ok(schedule)
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    row: usize,
    field: &'static str,
) -> Result<T, LoadError> {
    value.trim().parse().map_err(|_| LoadError::BadNumber {
        row,
        field,
        value: value.to_string(),
    })
}
