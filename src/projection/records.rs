//! Projection output records and the derived plan summary

use crate::assumptions::CategoryAmounts;
use serde::{Deserialize, Serialize};

/// One month of projected costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCostRecord {
    /// Plan month, 1-indexed
    pub month: u32,

    /// Display label, e.g. "Aug (M1)"
    pub label: String,

    /// Cost incurred this month, per category
    pub costs: CategoryAmounts,

    /// Sum of this month's category costs
    pub monthly_total: f64,

    /// Running per-category totals through this month
    pub cumulative: CategoryAmounts,

    /// Running aggregate total through this month
    pub cumulative_total: f64,
}

/// Complete projection output: twelve ordered monthly records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub records: Vec<MonthlyCostRecord>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: MonthlyCostRecord) {
        self.records.push(record);
    }

    /// Total projected first-year cost (last record's cumulative total)
    pub fn first_year_total(&self) -> f64 {
        self.records
            .last()
            .map(|r| r.cumulative_total)
            .unwrap_or(0.0)
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Headline aggregates for the plan, derived from the schedule,
/// the event budget, and the projected sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// One-time setup cost across the year (CAPEX)
    pub total_one_time_setup: f64,

    /// Recurring monthly cost at steady state (OPEX)
    pub steady_state_monthly: f64,

    /// Itemized live-event budget total
    pub event_budget_total: f64,

    /// Cumulative total of the twelfth record
    pub first_year_total: f64,
}
