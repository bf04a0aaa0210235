// ABOUTME: Concrete training types with activity-specific calorie formulas
// ABOUTME: Running, sports walking and swimming implementations of TrainingCalculator

//! Concrete trainings
//!
//! Each module defines one training type and its calorie model:
//!
//! - [`Running`]: speed-scaled calorie rate
//! - [`SportsWalking`]: weight term plus speed-squared over height term
//! - [`Swimming`]: pool-geometry speed and stroke-length distance

pub mod running;
pub mod sports_walking;
pub mod swimming;

pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;
