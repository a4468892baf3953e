//! Seed sources: clocks and seed configuration

pub mod clock;
pub mod config;
