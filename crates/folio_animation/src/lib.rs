//! Folio Animation System
//!
//! Timer-driven text reveal for headings.
//!
//! # Features
//!
//! - **Typing**: Reveal a string one user-perceived character per tick
//! - **Scheduler**: Cancellable typing runs backed by the shared timer queue
//! - **Caret**: Blink phase for the cursor that trails typed text

pub mod caret;
pub mod scheduler;
pub mod typing;

pub use caret::Caret;
pub use scheduler::{TypingId, TypingScheduler};
pub use typing::{RevealUnit, TypingFrame, TypingState};
