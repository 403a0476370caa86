//! Folio Core Runtime
//!
//! Foundational primitives shared by the Folio crates:
//!
//! - **Timer Queue**: A deterministic, single-threaded arena of pending timers
//! - **Geometry**: Rectangles and visible-fraction math for viewport tracking
//! - **Colors**: RGBA colors used by theme palettes
//! - **Errors**: Configuration errors raised at setup time
//!
//! # Example
//!
//! ```rust
//! use folio_core::timer::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let tick = timers.set_interval(50).unwrap();
//!
//! let mut fired = 0;
//! while let Some(id) = timers.pop_due(120) {
//!     assert_eq!(id, tick);
//!     fired += 1;
//! }
//! timers.settle(120);
//!
//! assert_eq!(fired, 2);
//! assert_eq!(timers.now(), 120);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod timer;

pub use color::Color;
pub use error::ConfigError;
pub use geometry::{visible_fraction, Point, Rect, Size};
pub use timer::{TimerId, TimerQueue};
