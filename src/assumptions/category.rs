//! Fixed cost category set and per-category amount maps

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cost categories tracked by the projection
///
/// The set is closed: every rule in the schedule and every column of the
/// monthly output is keyed by one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    /// Platform development (web + mobile apps, streaming/payment integration)
    Platform,
    /// Production and transmission equipment
    Equipment,
    /// Legal and administrative setup
    Legal,
    /// Fixed core team salaries
    Team,
    /// Digital infrastructure (hosting, CDN, software licenses)
    Infrastructure,
    /// Marketing (ongoing campaigns plus the one-time launch push)
    Marketing,
    /// Accounting, fees, general administrative expenses
    Admin,
    /// One-time live-event production
    Event,
}

impl CostCategory {
    /// All categories in display order
    pub const ALL: [CostCategory; 8] = [
        CostCategory::Platform,
        CostCategory::Equipment,
        CostCategory::Legal,
        CostCategory::Team,
        CostCategory::Infrastructure,
        CostCategory::Marketing,
        CostCategory::Admin,
        CostCategory::Event,
    ];

    /// Human-readable label for report headers
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Platform => "Platform",
            CostCategory::Equipment => "Equipment",
            CostCategory::Legal => "Legal",
            CostCategory::Team => "Team",
            CostCategory::Infrastructure => "Infra",
            CostCategory::Marketing => "Marketing",
            CostCategory::Admin => "Admin",
            CostCategory::Event => "Event",
        }
    }

    /// Parse a category name as found in schedule CSV files
    pub fn parse(s: &str) -> Option<CostCategory> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform" => Some(CostCategory::Platform),
            "equipment" => Some(CostCategory::Equipment),
            "legal" => Some(CostCategory::Legal),
            "team" => Some(CostCategory::Team),
            "infrastructure" | "infra" => Some(CostCategory::Infrastructure),
            "marketing" => Some(CostCategory::Marketing),
            "admin" => Some(CostCategory::Admin),
            "event" => Some(CostCategory::Event),
            _ => None,
        }
    }
}

/// Amounts keyed by the full category set
///
/// Every category is always present (initialized to zero), so the
/// accumulation loop stays uniform and adding a category never touches
/// the aggregation logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryAmounts(BTreeMap<CostCategory, f64>);

impl CategoryAmounts {
    /// All categories at zero
    pub fn zero() -> Self {
        Self(CostCategory::ALL.iter().map(|&c| (c, 0.0)).collect())
    }

    /// Amount for a category
    pub fn get(&self, category: CostCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// Add to a category's amount
    pub fn add(&mut self, category: CostCategory, amount: f64) {
        *self.0.entry(category).or_insert(0.0) += amount;
    }

    /// Sum across all categories
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Iterate (category, amount) in category order
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        self.0.iter().map(|(&c, &v)| (c, v))
    }
}

impl Default for CategoryAmounts {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_covers_all_categories() {
        let amounts = CategoryAmounts::zero();
        assert_eq!(amounts.iter().count(), CostCategory::ALL.len());
        for c in CostCategory::ALL {
            assert_eq!(amounts.get(c), 0.0);
        }
    }

    #[test]
    fn test_add_and_total() {
        let mut amounts = CategoryAmounts::zero();
        amounts.add(CostCategory::Platform, 75_000.0);
        amounts.add(CostCategory::Team, 24_000.0);
        amounts.add(CostCategory::Team, 1_000.0);

        assert_relative_eq!(amounts.get(CostCategory::Team), 25_000.0);
        assert_relative_eq!(amounts.total(), 100_000.0);
    }

    #[test]
    fn test_parse_category_names() {
        assert_eq!(CostCategory::parse("platform"), Some(CostCategory::Platform));
        assert_eq!(CostCategory::parse(" Infra "), Some(CostCategory::Infrastructure));
        assert_eq!(CostCategory::parse("EVENT"), Some(CostCategory::Event));
        assert_eq!(CostCategory::parse("payroll"), None);
    }
}
