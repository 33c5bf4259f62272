//! Budget preference to provider sort-order policy
//!
//! Callers pass a free-form preference string. Recognized values steer each
//! provider's ranking parameter; anything else keeps the provider's default
//! ordering. Nothing here can fail.

use std::fmt;

/// Budget preference steering result ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetPreference {
    /// Cheapest first
    Budget,
    /// Balanced (provider default)
    MidRange,
    /// Best rated first
    Luxury,
}

impl BudgetPreference {
    /// Lenient parse; `None` for unrecognized input
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "budget" => Some(Self::Budget),
            "mid-range" | "midrange" => Some(Self::MidRange),
            "luxury" => Some(Self::Luxury),
            _ => None,
        }
    }

    /// Canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `sortBy` for the Apify Booking.com scraper
pub fn apify_booking_sort(preference: Option<BudgetPreference>) -> &'static str {
    match preference {
        Some(BudgetPreference::Budget) => "price",
        _ => "review_score_and_price",
    }
}

/// `sort_by` for SerpApi Google Hotels (`None` keeps relevance ordering)
///
/// 3 = lowest price, 8 = highest rating.
pub fn serpapi_hotels_sort(preference: Option<BudgetPreference>) -> Option<&'static str> {
    match preference {
        Some(BudgetPreference::Budget) => Some("3"),
        Some(BudgetPreference::Luxury) => Some("8"),
        _ => None,
    }
}

/// `sort_by` for SerpApi Google Flights (`None` keeps "top flights" ordering)
///
/// 1 = price.
pub fn serpapi_flights_sort(preference: Option<BudgetPreference>) -> Option<&'static str> {
    match preference {
        Some(BudgetPreference::Budget) => Some("1"),
        _ => None,
    }
}
