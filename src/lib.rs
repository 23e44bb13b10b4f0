//! Launch Budget - First-year cost projection system for a streaming-platform business plan
//!
//! This library provides:
//! - A declarative cost-rule schedule (CAPEX, OPEX, one-time event costs)
//! - A deterministic month-by-month cost projection over the first plan year
//! - Itemized CAPEX/OPEX/equipment/event budget tables behind the headline figures
//! - Fixed-locale (BRL) currency formatting for report output

pub mod assumptions;
pub mod calendar;
pub mod format;
pub mod projection;

// Re-export commonly used types
pub use assumptions::{Assumptions, CategoryAmounts, CostCategory, CostRule, CostSchedule};
pub use calendar::PlanCalendar;
pub use projection::{CostProjector, MonthlyCostRecord, PlanSummary, ProjectionResult};
