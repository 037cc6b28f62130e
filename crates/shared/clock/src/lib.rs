//! Catalog Clock Infrastructure
//!
//! Time sources for product timestamps:
//!
//! - [`SystemClock`]: wall-clock time, used by the running service
//! - [`FixedClock`]: frozen time that only moves when told to, used by tests
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_clock::{Clock, FixedClock};
//! use chrono::Duration;
//!
//! let clock = FixedClock::at(start);
//! let created = clock.now();
//! clock.advance(Duration::minutes(5));
//! assert!(clock.now() > created);
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use catalog_ports::Clock;
