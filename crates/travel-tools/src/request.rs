//! Caller-facing search requests
//!
//! These are the argument records the agent framework sends. Provider-shaped
//! payloads are built from them by each adapter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::policy::BudgetPreference;
use crate::{Result, ToolError};

/// Night count used when the stay dates cannot be parsed
pub const DEFAULT_NIGHTS: i64 = 3;

const ISO_DATE: &str = "%Y-%m-%d";

/// Hotel search arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSearchRequest {
    /// Destination city or area
    pub destination: String,
    /// Check-in date (YYYY-MM-DD)
    pub checkin_date: String,
    /// Check-out date (YYYY-MM-DD)
    pub checkout_date: String,
    /// Number of guests
    #[serde(default = "default_hotel_travelers")]
    pub travelers: u32,
    /// budget / mid-range / luxury
    #[serde(default = "default_budget_preference")]
    pub budget_preference: String,
}

/// Flight search arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSearchRequest {
    /// Origin airport code or city
    pub origin: String,
    /// Destination airport code or city
    pub destination: String,
    /// Outbound date (YYYY-MM-DD)
    pub departure_date: String,
    /// Return date (YYYY-MM-DD); one-way when absent
    #[serde(default)]
    pub return_date: Option<String>,
    /// Number of adult passengers
    #[serde(default = "default_flight_travelers")]
    pub travelers: u32,
    /// budget / mid-range / luxury
    #[serde(default = "default_budget_preference")]
    pub budget_preference: String,
}

fn default_hotel_travelers() -> u32 {
    2
}

fn default_flight_travelers() -> u32 {
    1
}

fn default_budget_preference() -> String {
    BudgetPreference::MidRange.to_string()
}

impl HotelSearchRequest {
    /// Create a request with the default budget preference
    pub fn new(
        destination: impl Into<String>,
        checkin_date: impl Into<String>,
        checkout_date: impl Into<String>,
        travelers: u32,
    ) -> Self {
        Self {
            destination: destination.into(),
            checkin_date: checkin_date.into(),
            checkout_date: checkout_date.into(),
            travelers,
            budget_preference: default_budget_preference(),
        }
    }

    /// Set the budget preference
    pub fn with_budget(mut self, preference: impl Into<String>) -> Self {
        self.budget_preference = preference.into();
        self
    }

    /// Parsed budget preference (`None` when unrecognized)
    pub fn preference(&self) -> Option<BudgetPreference> {
        BudgetPreference::parse(&self.budget_preference)
    }

    /// Nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        stay_nights(&self.checkin_date, &self.checkout_date)
    }

    /// Reject arguments no provider can serve
    pub fn validate(&self) -> Result<()> {
        validate_travelers(self.travelers)
    }
}

impl FlightSearchRequest {
    /// Create a one-way request with the default budget preference
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
        travelers: u32,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date: departure_date.into(),
            return_date: None,
            travelers,
            budget_preference: default_budget_preference(),
        }
    }

    /// Make this a round trip
    pub fn with_return(mut self, return_date: impl Into<String>) -> Self {
        self.return_date = Some(return_date.into());
        self
    }

    /// Set the budget preference
    pub fn with_budget(mut self, preference: impl Into<String>) -> Self {
        self.budget_preference = preference.into();
        self
    }

    /// Parsed budget preference (`None` when unrecognized)
    pub fn preference(&self) -> Option<BudgetPreference> {
        BudgetPreference::parse(&self.budget_preference)
    }

    /// Reject arguments no provider can serve
    pub fn validate(&self) -> Result<()> {
        validate_travelers(self.travelers)
    }
}

/// Days between two ISO dates, or [`DEFAULT_NIGHTS`] if either fails to parse
///
/// The difference is signed: swapped dates give a negative count.
pub fn stay_nights(checkin: &str, checkout: &str) -> i64 {
    let parse = |date: &str| NaiveDate::parse_from_str(date.trim(), ISO_DATE);

    match (parse(checkin), parse(checkout)) {
        (Ok(checkin), Ok(checkout)) => (checkout - checkin).num_days(),
        _ => {
            tracing::debug!(
                "Could not parse stay dates '{}'..'{}', assuming {} nights",
                checkin,
                checkout,
                DEFAULT_NIGHTS
            );
            DEFAULT_NIGHTS
        }
    }
}

fn validate_travelers(travelers: u32) -> Result<()> {
    if travelers == 0 {
        return Err(ToolError::invalid_params("travelers must be at least 1"));
    }
    Ok(())
}
