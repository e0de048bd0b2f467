//! Domain layer containing business entities, value objects, and the clock.

pub mod clock;
pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::*;
pub use value_objects::*;
