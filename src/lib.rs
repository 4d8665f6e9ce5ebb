//! Terminal journal.
//!
//! Entries are free-text records stamped with their creation time, each stored as one JSON
//! file under the configured entries directory. [`data::EntryStore`] owns that layout and
//! [`app::ViewState`] turns user commands into store calls while tracking which of the four
//! modes (listing, composing, viewing, editing) the UI is in.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod style;
pub mod ui;
pub mod widgets;

pub use config::Config;
pub use error::JournalError;
pub use error::Result;
