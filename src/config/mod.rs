// Configuration for the analytics engine's storage boundary

pub mod database;

pub use database::*;
