//! Plan-month to calendar-month mapping
//!
//! Plan months are 1-indexed; the business plan starts in August, so plan
//! month 1 is August and month 12 is the following July.

use chrono::Month;

/// Maps 1-based plan months onto calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanCalendar {
    start: Month,
}

impl PlanCalendar {
    pub fn starting(start: Month) -> Self {
        Self { start }
    }

    /// Calendar for the streaming-platform launch plan (starts in August)
    pub fn business_plan() -> Self {
        Self::starting(Month::August)
    }

    /// Calendar month for a plan month, wrapping across the year boundary
    pub fn month(&self, plan_month: u32) -> Month {
        let mut month = self.start;
        for _ in 1..plan_month {
            month = month.succ();
        }
        month
    }

    /// Display label for a plan month, e.g. "Aug (M1)"
    pub fn label(&self, plan_month: u32) -> String {
        format!("{} (M{})", &self.month(plan_month).name()[..3], plan_month)
    }
}

impl Default for PlanCalendar {
    fn default() -> Self {
        Self::business_plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_wrap_across_year_boundary() {
        let calendar = PlanCalendar::business_plan();
        assert_eq!(calendar.month(1), Month::August);
        assert_eq!(calendar.month(5), Month::December);
        assert_eq!(calendar.month(6), Month::January);
        assert_eq!(calendar.month(12), Month::July);
    }

    #[test]
    fn test_labels() {
        let calendar = PlanCalendar::business_plan();
        assert_eq!(calendar.label(1), "Aug (M1)");
        assert_eq!(calendar.label(7), "Feb (M7)");
        assert_eq!(calendar.label(12), "Jul (M12)");
    }
}
