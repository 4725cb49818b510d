//! VOX Cinemas Scraper Core Library
//!
//! This crate collects movie listings and multi-day showtime schedules
//! from the VOX Cinemas website and exports them as structured JSON.
//!
//! # Features
//! - Parse the "What's On" page into movie records
//! - Parse per-date detail pages into cinema → experience → time trees
//! - Merge a contiguous date range into one schedule per movie
//! - Export the full record set as a pretty-printed JSON file

pub mod client;
pub mod error;
pub mod export;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, VoxClient};
pub use error::{Result, VoxError};
pub use export::write_movies;
pub use scraper::VoxScraper;
pub use types::{DaySchedule, Movie, Showtimes};
