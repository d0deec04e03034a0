#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/levels/src/lib.rs
//!
//! # Overview
//!
//! `levels` owns the configuration every log call consults: the ordered
//! [`Severity`] set, the active threshold, and one [`StyleTable`] per
//! rendering [`Surface`]. The crate performs no I/O.
//!
//! # Design
//!
//! [`LevelStore`] is an explicit configuration object rather than a hidden
//! module-level singleton. Its threshold is stored atomically and each style
//! table sits behind its own read/write lock, so a store can be shared across
//! threads by reference. [`LevelConfig`] describes a set of overrides that can
//! be captured from one store and applied to another.
//!
//! # Invariants
//!
//! - [`Severity`] is a closed enumeration ordered from most to least severe;
//!   [`LevelStore::should_emit`] holds iff `level.rank() <= threshold.rank()`.
//! - Every severity has a token in both style tables at all times. Setters
//!   overwrite entries and nothing removes one.
//! - A fresh store has threshold [`Severity::Error`].
//!
//! # Examples
//!
//! ```
//! use levels::{LevelStore, Severity};
//!
//! let store = LevelStore::new();
//! store.set_level(Severity::Info);
//!
//! assert!(store.should_emit(Severity::Warning));
//! assert!(store.should_emit(Severity::Info));
//! assert!(!store.should_emit(Severity::Debug));
//! ```

mod config;
mod severity;
mod store;
mod styles;

pub use config::LevelConfig;
pub use severity::{ParseSeverityError, Severity};
pub use store::LevelStore;
pub use styles::{ParseSurfaceError, StyleTable, Surface, TERMINAL_RESET};
