//! Application services
//!
//! Concrete service implementations that orchestrate domain logic. Services
//! depend on boundary traits (Clock) but are themselves concrete structs,
//! not traits.

mod lending;

pub use lending::LendingService;
