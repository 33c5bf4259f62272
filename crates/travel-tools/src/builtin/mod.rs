//! Built-in travel tools

pub mod budget;
pub mod flights;
pub mod hotels;
pub mod hotels_apify;
pub mod hotels_serpapi;
pub mod itinerary;
pub mod research;

pub use budget::{calculate_budget, BudgetTool, TripBudget};
pub use flights::{FlightOption, FlightSearch, FlightSearchResult, FlightSearchTool};
pub use hotels::{Hotel, HotelSearch, HotelSearchMetadata, HotelSearchResult};
pub use hotels_apify::{ApifyHotelSearchTool, BOOKING_SCRAPER_ACTOR};
pub use hotels_serpapi::SerpApiHotelSearchTool;
pub use itinerary::{create_itinerary, Itinerary, ItineraryTool};
pub use research::{DestinationOverview, DestinationResearchTool, ResearchRequest};
