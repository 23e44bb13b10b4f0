//! Monthly cost projection: engine, state, and output records

mod engine;
mod records;
mod state;

pub use engine::CostProjector;
pub use records::{MonthlyCostRecord, PlanSummary, ProjectionResult};
pub use state::ProjectionState;
