//! Declarative cost-rule table driving the monthly projection
//!
//! The business plan's cost timing lives here as data, not control flow:
//! each rule names a category, the plan months it covers, an amount, and
//! whether that amount is one-time (split evenly across the covered
//! months) or recurring (charged in full every covered month).

use super::category::CostCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of months in the projection horizon
pub const PLAN_MONTHS: u32 = 12;

/// Whether a rule's amount is a one-time total or a per-month charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostKind {
    /// Total amount, split evenly across the rule's month span
    OneTime,
    /// Per-month amount, charged in every month of the span
    Recurring,
}

impl CostKind {
    /// Parse a kind name as found in schedule CSV files
    pub fn parse(s: &str) -> Option<CostKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one_time" | "one-time" | "onetime" => Some(CostKind::OneTime),
            "recurring" => Some(CostKind::Recurring),
            _ => None,
        }
    }
}

/// Inclusive 1-based range of plan months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSpan {
    first: u32,
    last: u32,
}

impl MonthSpan {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Span covering a single month
    pub fn only(month: u32) -> Self {
        Self::new(month, month)
    }

    /// Span from a month through the end of the plan year
    pub fn onward(month: u32) -> Self {
        Self::new(month, PLAN_MONTHS)
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn contains(&self, month: u32) -> bool {
        month >= self.first && month <= self.last
    }

    /// Number of months covered
    pub fn months(&self) -> u32 {
        self.last - self.first + 1
    }

    fn in_plan(&self) -> bool {
        self.first >= 1 && self.first <= self.last && self.last <= PLAN_MONTHS
    }
}

/// One entry of the cost schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRule {
    pub category: CostCategory,
    pub span: MonthSpan,
    pub amount: f64,
    pub kind: CostKind,
}

impl CostRule {
    pub fn new(category: CostCategory, span: MonthSpan, amount: f64, kind: CostKind) -> Self {
        Self {
            category,
            span,
            amount,
            kind,
        }
    }

    /// Amount this rule contributes in a given plan month
    ///
    /// Zero outside the span; inside it, one-time amounts are split
    /// evenly across the span and recurring amounts apply in full.
    pub fn contribution(&self, month: u32) -> f64 {
        if !self.span.contains(month) {
            return 0.0;
        }
        match self.kind {
            CostKind::OneTime => self.amount / self.span.months() as f64,
            CostKind::Recurring => self.amount,
        }
    }
}

/// Schedule validation failures (only reachable via loaded schedules;
/// the built-in plan always passes)
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("rule {index} ({category:?}) has negative amount {amount}")]
    NegativeAmount {
        index: usize,
        category: CostCategory,
        amount: f64,
    },

    #[error("rule {index} ({category:?}) has month span {first}..={last} outside 1..=12")]
    InvalidSpan {
        index: usize,
        category: CostCategory,
        first: u32,
        last: u32,
    },
}

/// Ordered table of cost rules for one business plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSchedule {
    rules: Vec<CostRule>,
}

impl CostSchedule {
    pub fn new(rules: Vec<CostRule>) -> Self {
        Self { rules }
    }

    /// Built-in schedule for the streaming-platform launch plan
    ///
    /// Plan month 1 is August; the live event and launch campaign land in
    /// month 7 (February, carnival season).
    pub fn business_plan() -> Self {
        use CostCategory::*;
        use CostKind::*;

        Self::new(vec![
            // CAPEX: platform build, 50% in each of months 1-2
            CostRule::new(Platform, MonthSpan::new(1, 2), 150_000.0, OneTime),
            // CAPEX: production/transmission equipment, 50% in each of months 3-4
            CostRule::new(Equipment, MonthSpan::new(3, 4), 175_000.0, OneTime),
            // CAPEX: legal and administrative setup
            CostRule::new(Legal, MonthSpan::only(4), 12_000.0, OneTime),
            // OPEX: full monthly operation starts in month 5
            CostRule::new(Team, MonthSpan::onward(5), 24_000.0, Recurring),
            CostRule::new(Infrastructure, MonthSpan::onward(5), 6_000.0, Recurring),
            CostRule::new(Marketing, MonthSpan::onward(5), 5_000.0, Recurring),
            CostRule::new(Admin, MonthSpan::onward(5), 3_000.0, Recurring),
            // CAPEX: launch marketing campaign in the event month
            CostRule::new(Marketing, MonthSpan::only(7), 30_000.0, OneTime),
            // Variable: live-event production budget
            CostRule::new(Event, MonthSpan::only(7), 148_980.0, OneTime),
        ])
    }

    pub fn rules(&self) -> &[CostRule] {
        &self.rules
    }

    /// Total one-time setup cost (CAPEX): one-time rules excluding the event
    pub fn total_one_time_setup(&self) -> f64 {
        self.rules
            .iter()
            .filter(|r| r.kind == CostKind::OneTime && r.category != CostCategory::Event)
            .map(|r| r.amount)
            .sum()
    }

    /// Steady-state recurring cost per month (OPEX) once all recurring
    /// rules are active
    pub fn steady_state_monthly(&self) -> f64 {
        self.rules
            .iter()
            .filter(|r| r.kind == CostKind::Recurring)
            .map(|r| r.amount)
            .sum()
    }

    /// Check every rule for non-negative amounts and in-plan spans
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.amount < 0.0 {
                return Err(ScheduleError::NegativeAmount {
                    index,
                    category: rule.category,
                    amount: rule.amount,
                });
            }
            if !rule.span.in_plan() {
                return Err(ScheduleError::InvalidSpan {
                    index,
                    category: rule.category,
                    first: rule.span.first(),
                    last: rule.span.last(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_time_split_across_span() {
        let rule = CostRule::new(
            CostCategory::Platform,
            MonthSpan::new(1, 2),
            150_000.0,
            CostKind::OneTime,
        );

        assert_relative_eq!(rule.contribution(1), 75_000.0);
        assert_relative_eq!(rule.contribution(2), 75_000.0);
        assert_eq!(rule.contribution(3), 0.0);
    }

    #[test]
    fn test_recurring_applies_per_month() {
        let rule = CostRule::new(
            CostCategory::Team,
            MonthSpan::onward(5),
            24_000.0,
            CostKind::Recurring,
        );

        assert_eq!(rule.contribution(4), 0.0);
        for m in 5..=12 {
            assert_relative_eq!(rule.contribution(m), 24_000.0);
        }
    }

    #[test]
    fn test_business_plan_totals() {
        let schedule = CostSchedule::business_plan();

        // CAPEX: 150k platform + 175k equipment + 12k legal + 30k launch marketing
        assert_relative_eq!(schedule.total_one_time_setup(), 367_000.0);
        // OPEX: 24k team + 6k infra + 5k marketing + 3k admin
        assert_relative_eq!(schedule.steady_state_monthly(), 38_000.0);
    }

    #[test]
    fn test_business_plan_validates() {
        assert!(CostSchedule::business_plan().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let schedule = CostSchedule::new(vec![CostRule::new(
            CostCategory::Admin,
            MonthSpan::only(1),
            -1.0,
            CostKind::Recurring,
        )]);
        assert!(matches!(
            schedule.validate(),
            Err(ScheduleError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_plan_span() {
        let schedule = CostSchedule::new(vec![CostRule::new(
            CostCategory::Admin,
            MonthSpan::new(5, 13),
            1.0,
            CostKind::Recurring,
        )]);
        assert!(matches!(
            schedule.validate(),
            Err(ScheduleError::InvalidSpan { .. })
        ));
    }
}
