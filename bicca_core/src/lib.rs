//! # bicca_core - BICCA Studio Shell State
//!
//! `bicca_core` holds the state behind the BICCA Studio main window, kept
//! free of any GUI toolkit so it can be tested without opening a window.
//! The `bicca_gui` crate renders it with Iced.
//!
//! ## Design Philosophy
//!
//! - **Reducers, not widgets**: tab and section clicks are events applied to
//!   plain state; visibility and highlighting are derived from it
//! - **Owned state**: the form store is a value inside [`Session`], not a global
//! - **Fail silently**: missing records are empty, out-of-range moves are no-ops
//!
//! ## Quick Start
//!
//! ```rust
//! use bicca_core::panels::{PanelEvent, Tab};
//! use bicca_core::Session;
//!
//! let mut session = Session::default();
//! session.handle_panel(PanelEvent::TabClicked(Tab::Compare));
//! assert!(session.panels.is_visible(Tab::Compare));
//! assert!(!session.panels.is_visible(Tab::ProjectDetails));
//! ```
//!
//! ## Modules
//!
//! - [`form_store`] - Window name to last-saved field values
//! - [`tutorial`] - Tutorial pages and cursor
//! - [`panels`] - Tab/panel visibility coordinator
//! - [`sections`] - Collapsible groups of the Project Details panel
//! - [`dialogs`] - The nine category dialogs and the modal slot
//! - [`project`] - General information fields and drop-down lists
//! - [`session`] - Owned context tying the above together
//! - [`config`] - Compiled-in window settings
//! - [`errors`] - Name parsing errors

pub mod config;
pub mod dialogs;
pub mod errors;
pub mod form_store;
pub mod panels;
pub mod project;
pub mod sections;
pub mod session;
pub mod tutorial;

// Re-export commonly used types at crate root for convenience
pub use config::ShellConfig;
pub use errors::{ShellError, ShellResult};
pub use form_store::{FieldValue, FormRecord, FormStore};
pub use session::Session;
