//! Running accumulator state for the monthly cost projection

use crate::assumptions::CategoryAmounts;

/// State carried forward month to month during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current plan month (1-indexed; 0 before the first advance)
    pub month: u32,

    /// Running per-category totals through the current month
    pub cumulative: CategoryAmounts,

    /// Running aggregate total through the current month
    pub cumulative_total: f64,
}

impl ProjectionState {
    /// State before month 1: all cumulative totals at zero
    pub fn new() -> Self {
        Self {
            month: 0,
            cumulative: CategoryAmounts::zero(),
            cumulative_total: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Fold one month's costs into the running totals
    pub fn absorb(&mut self, costs: &CategoryAmounts, monthly_total: f64) {
        for (category, amount) in costs.iter() {
            self.cumulative.add(category, amount);
        }
        self.cumulative_total += monthly_total;
    }
}

impl Default for ProjectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::CostCategory;
    use approx::assert_relative_eq;

    #[test]
    fn test_absorb_accumulates() {
        let mut state = ProjectionState::new();
        let mut costs = CategoryAmounts::zero();
        costs.add(CostCategory::Platform, 75_000.0);

        state.advance_month();
        state.absorb(&costs, costs.total());
        state.advance_month();
        state.absorb(&costs, costs.total());

        assert_eq!(state.month, 2);
        assert_relative_eq!(state.cumulative.get(CostCategory::Platform), 150_000.0);
        assert_relative_eq!(state.cumulative_total, 150_000.0);
    }
}
