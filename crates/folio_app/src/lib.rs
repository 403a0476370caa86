//! Folio Application
//!
//! The portfolio site assembled from the Folio primitives:
//!
//! - **Content**: hero line, work history, skills, projects and contact links
//! - **Routes**: page paths and the CV document endpoint
//! - **Session**: the single-threaded event loop that mounts pages, drives
//!   timers and delivers scroll visibility
//! - **View**: render-ready snapshots of the mounted page
//! - **Config**: `folio.toml` loading
//!
//! # Example
//!
//! ```rust
//! use folio_app::{FolioConfig, Route, Session};
//!
//! let mut session = Session::new(FolioConfig::default()).unwrap();
//! session.navigate(Route::Home).unwrap();
//! session.advance(150 * 40);
//!
//! let snapshot = session.snapshot().unwrap();
//! assert_eq!(snapshot.path, "/");
//!
//! session.shutdown();
//! assert_eq!(session.pending_timers(), 0);
//! ```

pub mod config;
pub mod content;
pub mod document;
pub mod routes;
pub mod session;
pub mod view;

pub use config::FolioConfig;
pub use document::{DocumentEndpoint, DocumentError, DocumentResponse};
pub use routes::{Page, Route, UnknownRoute};
pub use session::{Events, RevealedItem, Session, SessionError, SessionEvent};
pub use view::{render_text, PageSnapshot, PageView};
