// Data models for workout events and derived analytics state

pub mod analytics_summary;
pub mod workout_event;

pub use analytics_summary::*;
pub use workout_event::*;
