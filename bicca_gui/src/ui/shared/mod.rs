//! Shared UI components reusable across panels
//!
//! Contains:
//! - `style` - Tab button style table, bold font
//! - `panel_header` - Header row used by every panel

pub mod panel_header;
pub mod style;
