// Business logic services

pub mod aggregation;
pub mod analytics_service;
pub mod error;
pub mod workout_event_service;

pub use analytics_service::AnalyticsService;
pub use error::AnalyticsError;
pub use workout_event_service::WorkoutEventService;
