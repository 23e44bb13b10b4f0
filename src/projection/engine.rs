//! Core projection engine for monthly cost accumulation
//!
//! A single forward pass over plan months 1..=12: each month, every rule
//! in the schedule is asked for its contribution, contributions are
//! accumulated per category, and running totals are carried forward.
//! Pure computation over the embedded constants; no inputs, no failure
//! modes.

use super::records::{MonthlyCostRecord, PlanSummary, ProjectionResult};
use super::state::ProjectionState;
use crate::assumptions::{Assumptions, CategoryAmounts, PLAN_MONTHS};
use crate::calendar::PlanCalendar;

/// Main cost projection engine
pub struct CostProjector {
    assumptions: Assumptions,
    calendar: PlanCalendar,
}

impl CostProjector {
    /// Create a projector over the given assumptions, with the default
    /// plan calendar
    pub fn new(assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            calendar: PlanCalendar::business_plan(),
        }
    }

    /// Create a projector with an explicit plan calendar
    pub fn with_calendar(assumptions: Assumptions, calendar: PlanCalendar) -> Self {
        Self {
            assumptions,
            calendar,
        }
    }

    /// Run the twelve-month projection
    ///
    /// Deterministic: repeated calls yield identical sequences.
    pub fn project(&self) -> ProjectionResult {
        let mut result = ProjectionResult::new();
        let mut state = ProjectionState::new();

        for _month in 1..=PLAN_MONTHS {
            state.advance_month();
            let record = self.calculate_month(&mut state);
            result.add_record(record);
        }

        result
    }

    /// Compute one month's costs and fold them into the running totals
    fn calculate_month(&self, state: &mut ProjectionState) -> MonthlyCostRecord {
        let mut costs = CategoryAmounts::zero();
        for rule in self.assumptions.schedule.rules() {
            let amount = rule.contribution(state.month);
            if amount > 0.0 {
                costs.add(rule.category, amount);
            }
        }

        let monthly_total = costs.total();
        state.absorb(&costs, monthly_total);

        MonthlyCostRecord {
            month: state.month,
            label: self.calendar.label(state.month),
            costs,
            monthly_total,
            cumulative: state.cumulative.clone(),
            cumulative_total: state.cumulative_total,
        }
    }

    /// Reference to the underlying assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Headline aggregates for the plan
    pub fn summarize(&self, result: &ProjectionResult) -> PlanSummary {
        PlanSummary {
            total_one_time_setup: self.assumptions.schedule.total_one_time_setup(),
            steady_state_monthly: self.assumptions.schedule.steady_state_monthly(),
            event_budget_total: self.assumptions.event_budget.total(),
            first_year_total: result.first_year_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::CostCategory;
    use approx::assert_relative_eq;

    fn projector() -> CostProjector {
        CostProjector::new(Assumptions::business_plan())
    }

    #[test]
    fn test_projection_produces_twelve_ordered_records() {
        let result = projector().project();

        assert_eq!(result.records.len(), 12);
        for (i, record) in result.records.iter().enumerate() {
            assert_eq!(record.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_monthly_total_matches_category_sum() {
        let result = projector().project();

        for record in &result.records {
            assert_relative_eq!(record.monthly_total, record.costs.total());
        }
    }

    #[test]
    fn test_cumulative_recurrences() {
        let result = projector().project();

        let mut running_total = 0.0;
        let mut running = CategoryAmounts::zero();
        for record in &result.records {
            running_total += record.monthly_total;
            assert_relative_eq!(record.cumulative_total, running_total);

            for (category, amount) in record.costs.iter() {
                running.add(category, amount);
            }
            for (category, amount) in record.cumulative.iter() {
                assert_relative_eq!(amount, running.get(category));
            }
        }
    }

    #[test]
    fn test_all_amounts_non_negative() {
        let result = projector().project();

        for record in &result.records {
            assert!(record.monthly_total >= 0.0);
            assert!(record.cumulative_total >= 0.0);
            for (_, amount) in record.costs.iter() {
                assert!(amount >= 0.0);
            }
        }
    }

    #[test]
    fn test_known_months() {
        let result = projector().project();

        // Months 1-2: platform build only, 75k each
        assert_relative_eq!(result.records[0].monthly_total, 75_000.0);
        assert_relative_eq!(result.records[0].costs.get(CostCategory::Platform), 75_000.0);
        assert_relative_eq!(result.records[1].monthly_total, 75_000.0);

        // Months 3-4: equipment 87.5k each, plus legal 12k in month 4
        assert_relative_eq!(result.records[2].costs.get(CostCategory::Equipment), 87_500.0);
        assert_relative_eq!(result.records[3].costs.get(CostCategory::Equipment), 87_500.0);
        assert_relative_eq!(result.records[3].costs.get(CostCategory::Legal), 12_000.0);
        assert_relative_eq!(result.records[3].monthly_total, 99_500.0);

        // Month 5: recurring operation starts
        assert_relative_eq!(result.records[4].monthly_total, 38_000.0);
        assert_relative_eq!(result.records[4].costs.get(CostCategory::Team), 24_000.0);

        // Month 7: recurring 38k + launch marketing 30k + event 148,980
        let feb = &result.records[6];
        assert_relative_eq!(feb.monthly_total, 216_980.0);
        assert_relative_eq!(feb.costs.get(CostCategory::Marketing), 35_000.0);
        assert_relative_eq!(feb.costs.get(CostCategory::Event), 148_980.0);

        // Month 8: back to the recurring baseline
        assert_relative_eq!(result.records[7].monthly_total, 38_000.0);
    }

    #[test]
    fn test_first_year_total_reconciles() {
        let result = projector().project();

        // One-time: 150k + 175k + 12k + 30k + 148,980 = 515,980
        // Recurring: 38k over months 5-12 = 304,000
        assert_relative_eq!(result.first_year_total(), 819_980.0);

        let replayed: f64 = result.records.iter().map(|r| r.monthly_total).sum();
        assert_relative_eq!(result.first_year_total(), replayed);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let projector = projector();
        assert_eq!(projector.project(), projector.project());
    }

    #[test]
    fn test_summary_aggregates() {
        let projector = projector();
        let summary = projector.summarize(&projector.project());

        assert_relative_eq!(summary.total_one_time_setup, 367_000.0);
        assert_relative_eq!(summary.steady_state_monthly, 38_000.0);
        assert_relative_eq!(summary.event_budget_total, 145_200.0);
        assert_relative_eq!(summary.first_year_total, 819_980.0);
    }
}
