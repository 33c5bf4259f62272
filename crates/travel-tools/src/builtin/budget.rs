//! Trip budget estimate

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::schema::property;
use crate::tool::parse_params;
use crate::{Result, Tool, ToolError, ToolSchema};

/// Per-person daily costs in USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCosts {
    pub accommodation: u64,
    pub food: u64,
    pub activities: u64,
    pub transport: u64,
    pub miscellaneous: u64,
}

impl DailyCosts {
    const BUDGET: Self = Self {
        accommodation: 25,
        food: 15,
        activities: 10,
        transport: 5,
        miscellaneous: 5,
    };

    const LUXURY: Self = Self {
        accommodation: 400,
        food: 200,
        activities: 300,
        transport: 100,
        miscellaneous: 150,
    };

    /// Daily costs for a travel style; only `budget` gets the low tier
    pub fn for_style(style: &str) -> Self {
        if style == "budget" {
            Self::BUDGET
        } else {
            Self::LUXURY
        }
    }

    pub fn total(&self) -> u64 {
        self.accommodation + self.food + self.activities + self.transport + self.miscellaneous
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub per_person_per_day: u64,
    pub per_person_total: u64,
    pub total_for_group: u64,
}

/// Budget breakdown for a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripBudget {
    pub destination: String,
    pub style: String,
    pub travelers: u32,
    pub duration: u32,
    pub daily_breakdown: DailyCosts,
    pub totals: BudgetTotals,
}

#[derive(Debug, Clone, Deserialize)]
struct BudgetParams {
    destination: String,
    duration: u32,
    travelers: u32,
    style: String,
}

/// Estimate the cost of a trip
///
/// Returns `None` when a total does not fit in a `u64`.
pub fn calculate_budget(destination: &str, duration: u32, travelers: u32, style: &str) -> Option<TripBudget> {
    let daily_breakdown = DailyCosts::for_style(style);
    let per_person_per_day = daily_breakdown.total();
    let per_person_total = per_person_per_day.checked_mul(u64::from(duration))?;
    let total_for_group = per_person_total.checked_mul(u64::from(travelers))?;

    Some(TripBudget {
        destination: destination.to_string(),
        style: style.to_string(),
        travelers,
        duration,
        daily_breakdown,
        totals: BudgetTotals {
            per_person_per_day,
            per_person_total,
            total_for_group,
        },
    })
}

/// `calculate_budget` tool
pub struct BudgetTool;

#[async_trait]
impl Tool for BudgetTool {
    fn name(&self) -> &str {
        "calculate_budget"
    }

    fn description(&self) -> &str {
        "Calculate a per-day and total travel budget breakdown"
    }

    fn parameters_schema(&self) -> ToolSchema {
        ToolSchema::new()
            .with_description("Parameters for a budget estimate")
            .with_properties(json!({
                "destination": property("string", "Destination name"),
                "duration": property("integer", "Trip length in days"),
                "travelers": property("integer", "Number of travelers"),
                "style": {
                    "type": "string",
                    "description": "Travel style",
                    "enum": ["budget", "luxury"],
                },
            }))
            .with_required(&["destination", "duration", "travelers", "style"])
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let params: BudgetParams = parse_params(params)?;
        if params.travelers == 0 {
            return Err(ToolError::invalid_params("travelers must be at least 1"));
        }

        let budget = calculate_budget(&params.destination, params.duration, params.travelers, &params.style)
            .ok_or_else(|| ToolError::invalid_params("budget total overflows"))?;
        Ok(serde_json::to_value(budget)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luxury_group_totals() {
        let budget = calculate_budget("Paris", 3, 2, "luxury").unwrap();

        assert_eq!(budget.totals.per_person_per_day, 1150);
        assert_eq!(budget.totals.per_person_total, 3450);
        assert_eq!(budget.totals.total_for_group, 6900);
    }

    #[test]
    fn test_budget_style() {
        let budget = calculate_budget("Hanoi", 10, 1, "budget").unwrap();

        assert_eq!(budget.daily_breakdown.accommodation, 25);
        assert_eq!(budget.totals.per_person_per_day, 60);
        assert_eq!(budget.totals.total_for_group, 600);
    }

    #[test]
    fn test_other_styles_use_upper_tier() {
        assert_eq!(DailyCosts::for_style("mid-range"), DailyCosts::for_style("luxury"));
    }

    #[tokio::test]
    async fn test_execute() {
        let value = BudgetTool
            .execute(json!({"destination": "Paris", "duration": 3, "travelers": 2, "style": "luxury"}))
            .await
            .unwrap();

        assert_eq!(value["totals"]["total_for_group"], 6900);
        assert_eq!(value["daily_breakdown"]["food"], 200);
    }

    #[tokio::test]
    async fn test_execute_rejects_zero_travelers() {
        let result = BudgetTool
            .execute(json!({"destination": "Paris", "duration": 3, "travelers": 0, "style": "budget"}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidParameters(_))));
    }

    #[test]
    fn test_overflowing_totals() {
        let budget = calculate_budget("Hanoi", u32::MAX, 1, "luxury").unwrap();
        assert_eq!(budget.totals.total_for_group, 1150 * u64::from(u32::MAX));
        assert!(calculate_budget("Hanoi", u32::MAX, u32::MAX, "luxury").is_none());
    }

    #[tokio::test]
    async fn test_execute_with_huge_trip_does_not_panic() {
        let result = BudgetTool
            .execute(json!({"destination": "X", "duration": u32::MAX, "travelers": u32::MAX, "style": "luxury"}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidParameters(_))));
    }
}
