//! Business-plan assumptions: cost schedule and itemized budget tables

mod breakdown;
mod category;
mod schedule;
pub mod loader;

pub use breakdown::{capex_items, equipment_items, items_total, opex_items, EventBudget, LineItem};
pub use category::{CategoryAmounts, CostCategory};
pub use loader::LoadError;
pub use schedule::{CostKind, CostRule, CostSchedule, MonthSpan, ScheduleError, PLAN_MONTHS};

use std::path::Path;

/// Container for all projection assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub schedule: CostSchedule,
    pub event_budget: EventBudget,
}

impl Assumptions {
    /// Built-in assumptions for the streaming-platform launch plan
    pub fn business_plan() -> Self {
        Self {
            schedule: CostSchedule::business_plan(),
            event_budget: EventBudget::standard(),
        }
    }

    /// Load the cost schedule from CSV files in the default location
    /// (data/assumptions/)
    pub fn from_csv() -> Result<Self, LoadError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load the cost schedule from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            schedule: loader::load_cost_schedule(path)?,
            event_budget: EventBudget::standard(),
        })
    }
}
