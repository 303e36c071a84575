//! Sources of catalog data

pub mod event;

pub use event::seeded_events;
