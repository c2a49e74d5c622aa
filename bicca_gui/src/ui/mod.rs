//! UI module for the BICCA Studio main window
//!
//! # Window Structure (top to bottom)
//! - `menu_bar` - File / Home / Reports / Help dropdown menus
//! - `toolbar` - New, Open, Save shortcuts
//! - `window_tabs` - "Windows:" row with the four panel tabs
//! - split view: `tutorials_panel` on the left, one of `project_panel` /
//!   `results_panel` (Results or Compare) on the right
//! - `status_bar` - Data look-up and status message
//!
//! # Overlays
//! - `modal` - Category dialog shown above a backdrop
//!
//! # Shared Components
//! - `shared/style` - Tab style table and fonts
//! - `shared/panel_header` - Panel title row with optional close button

// Window chrome
pub mod menu_bar;
pub mod toolbar;
pub mod window_tabs;
pub mod status_bar;

// Split view panels
pub mod tutorials_panel;
pub mod project_panel;
pub mod results_panel;

// Overlays
pub mod modal;

// Shared components
pub mod shared;
