//! Folio Theme System
//!
//! A shared light/dark preference and the palettes derived from it.
//!
//! # Overview
//!
//! - **Color scheme**: [`ColorScheme`] is the two-valued preference
//! - **Store**: [`ThemeStore`] holds the preference for the whole session,
//!   flips it on [`ThemeStore::toggle`] and notifies subscribers synchronously
//! - **Palette**: [`Palette`] maps semantic [`ColorToken`]s to colors for a scheme
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{ColorScheme, ColorToken, ThemeStore};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let store = ThemeStore::new(ColorScheme::Dark);
//! let seen = Rc::new(Cell::new(None));
//!
//! let seen_clone = seen.clone();
//! let _subscription = store.subscribe(move |scheme| seen_clone.set(Some(scheme)));
//!
//! store.toggle();
//! assert_eq!(seen.get(), Some(ColorScheme::Light));
//! assert_eq!(store.palette().color(ColorToken::CardBackground).to_hex(), "#ffffff");
//! ```
//!
//! Persistence and system-preference detection are left to the embedding
//! application; the store only ever starts from the scheme it is given.

pub mod palette;
pub mod scheme;
pub mod store;

pub use palette::{ColorToken, Palette};
pub use scheme::{ColorScheme, ParseSchemeError};
pub use store::{ListenerId, Subscription, ThemeStore};
