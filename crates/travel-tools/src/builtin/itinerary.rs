//! Day-by-day itinerary template

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::schema::property;
use crate::tool::parse_params;
use crate::{Result, Tool, ToolSchema};

/// Longest itinerary produced, in days
pub const MAX_ITINERARY_DAYS: u32 = 7;

const BUDGET_ACTIVITIES: [&str; 5] = ["Free walking tours", "Museums", "Markets", "Parks", "Street food"];
const LUXURY_ACTIVITIES: [&str; 5] = [
    "Private tours",
    "Fine dining",
    "Spa treatments",
    "Luxury shopping",
    "Private transport",
];

/// One day of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// Month and day, e.g. "March 15"
    pub date: String,
    pub morning_activity: String,
    pub afternoon_activity: String,
    pub evening_activity: String,
    pub estimated_daily_cost: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: String,
    pub duration: u32,
    pub budget: String,
    pub travelers: u32,
    /// Keyed `day_1`, `day_2`, ...
    pub days: BTreeMap<String, ItineraryDay>,
}

#[derive(Debug, Clone, Deserialize)]
struct ItineraryParams {
    destination: String,
    duration: u32,
    budget: String,
    travelers: u32,
}

/// Build an itinerary starting on `start`
pub fn create_itinerary(destination: &str, duration: u32, budget: &str, travelers: u32, start: NaiveDate) -> Itinerary {
    let luxury = budget == "luxury";
    let (activities, daily_cost) = if luxury {
        (&LUXURY_ACTIVITIES, 60)
    } else {
        (&BUDGET_ACTIVITIES, 10)
    };

    let days = (1..=duration.min(MAX_ITINERARY_DAYS))
        .map(|day| {
            let activity = activities[(day as usize - 1) % activities.len()].to_string();
            let date = start + Duration::days(i64::from(day) - 1);

            (
                format!("day_{}", day),
                ItineraryDay {
                    date: date.format("%B %d").to_string(),
                    morning_activity: activity.clone(),
                    afternoon_activity: activity.clone(),
                    evening_activity: activity,
                    estimated_daily_cost: daily_cost,
                },
            )
        })
        .collect();

    Itinerary {
        destination: destination.to_string(),
        duration,
        budget: budget.to_string(),
        travelers,
        days,
    }
}

/// `create_itinerary` tool; plans start today
pub struct ItineraryTool;

#[async_trait]
impl Tool for ItineraryTool {
    fn name(&self) -> &str {
        "create_itinerary"
    }

    fn description(&self) -> &str {
        "Create a day-by-day travel itinerary (up to 7 days)"
    }

    fn parameters_schema(&self) -> ToolSchema {
        ToolSchema::new()
            .with_description("Parameters for an itinerary")
            .with_properties(json!({
                "destination": property("string", "Destination name"),
                "duration": property("integer", "Trip length in days"),
                "budget": property("string", "Budget level (luxury or anything else)"),
                "travelers": property("integer", "Number of travelers"),
            }))
            .with_required(&["destination", "duration", "budget", "travelers"])
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let params: ItineraryParams = parse_params(params)?;
        let today = Local::now().date_naive();

        let itinerary = create_itinerary(
            &params.destination,
            params.duration,
            &params.budget,
            params.travelers,
            today,
        );
        Ok(serde_json::to_value(itinerary)?)
    }
}
