//! # Panel Visibility Coordinator
//!
//! The main window splits into two regions: the fixed-width Tutorials panel
//! on the left and a dynamic region on the right that shows exactly one of
//! Project Details, Results or Compare (or nothing).
//!
//! All transitions go through [`PanelState::reduce`], which returns the new
//! state plus the list of [`PanelEffect`]s a view layer would apply. Tab
//! highlighting and split sizes are derived from the state, so they can
//! never disagree with it.
//!
//! ## Example
//!
//! ```rust
//! use bicca_core::panels::{DynamicPanel, PanelEvent, PanelState, Tab, TabStyle};
//!
//! let state = PanelState::on_startup();
//! let (state, _) = state.reduce(PanelEvent::TabClicked(Tab::Results));
//!
//! assert_eq!(state.dynamic(), Some(DynamicPanel::Results));
//! assert_eq!(state.tab_style(Tab::ProjectDetails), TabStyle::Inactive);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ShellError, ShellResult};

/// The four window tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Tutorials,
    ProjectDetails,
    Results,
    Compare,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Tutorials, Tab::ProjectDetails, Tab::Results, Tab::Compare];

    /// Caption shown on the tab button
    pub fn caption(&self) -> &'static str {
        match self {
            Tab::Tutorials => "Tutorials",
            Tab::ProjectDetails => "Project Details",
            Tab::Results => "Results",
            Tab::Compare => "Compare",
        }
    }

    /// The dynamic panel this tab selects, if it is not Tutorials
    pub fn as_dynamic(&self) -> Option<DynamicPanel> {
        match self {
            Tab::Tutorials => None,
            Tab::ProjectDetails => Some(DynamicPanel::ProjectDetails),
            Tab::Results => Some(DynamicPanel::Results),
            Tab::Compare => Some(DynamicPanel::Compare),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

impl FromStr for Tab {
    type Err = ShellError;

    fn from_str(s: &str) -> ShellResult<Self> {
        Tab::ALL
            .into_iter()
            .find(|t| t.caption() == s)
            .ok_or_else(|| ShellError::unknown_tab(s))
    }
}

/// Panels that share the right-hand region; at most one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DynamicPanel {
    ProjectDetails,
    Results,
    Compare,
}

impl DynamicPanel {
    pub const ALL: [DynamicPanel; 3] = [
        DynamicPanel::ProjectDetails,
        DynamicPanel::Results,
        DynamicPanel::Compare,
    ];

    pub fn tab(&self) -> Tab {
        match self {
            DynamicPanel::ProjectDetails => Tab::ProjectDetails,
            DynamicPanel::Results => Tab::Results,
            DynamicPanel::Compare => Tab::Compare,
        }
    }
}

/// Highlight state of a tab button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabStyle {
    Active,
    Inactive,
}

impl TabStyle {
    fn from_visible(visible: bool) -> Self {
        if visible {
            TabStyle::Active
        } else {
            TabStyle::Inactive
        }
    }
}

/// Inputs to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// User clicked a tab button
    TabClicked(Tab),
    /// Force a tab's panel visible without toggling (initial selection)
    Open(Tab),
    /// "×" on the Tutorials panel header
    CloseTutorials,
    /// "×" on the Project Details panel header
    CloseDynamic,
}

/// Changes a view layer should apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffect {
    Show(Tab),
    Hide(Tab),
    Restyle(Tab, TabStyle),
}

/// Which panels are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    tutorials_visible: bool,
    dynamic: Option<DynamicPanel>,
}

impl PanelState {
    /// State after the window first opens: Tutorials and Project Details shown.
    pub fn on_startup() -> Self {
        let (state, _) = PanelState::default().reduce(PanelEvent::Open(Tab::Tutorials));
        let (state, _) = state.reduce(PanelEvent::Open(Tab::ProjectDetails));
        state
    }

    pub fn tutorials_visible(&self) -> bool {
        self.tutorials_visible
    }

    /// Panel currently shown in the dynamic region
    pub fn dynamic(&self) -> Option<DynamicPanel> {
        self.dynamic
    }

    pub fn dynamic_visible(&self) -> bool {
        self.dynamic.is_some()
    }

    pub fn is_visible(&self, tab: Tab) -> bool {
        match tab.as_dynamic() {
            None => self.tutorials_visible,
            Some(panel) => self.dynamic == Some(panel),
        }
    }

    pub fn tab_style(&self, tab: Tab) -> TabStyle {
        TabStyle::from_visible(self.is_visible(tab))
    }

    /// Widths of the (tutorials, dynamic) regions for a split view
    /// `total_width` wide.
    pub fn split_sizes(&self, total_width: f32, tutorials_width: f32) -> [f32; 2] {
        let first = if self.tutorials_visible { tutorials_width } else { 0.0 };
        let second = if self.dynamic_visible() {
            (total_width - first).max(0.0)
        } else {
            0.0
        };
        [first, second]
    }

    /// Apply one event, returning the new state and the effects it implies.
    pub fn reduce(self, event: PanelEvent) -> (PanelState, Vec<PanelEffect>) {
        let next = match event {
            PanelEvent::TabClicked(Tab::Tutorials) => PanelState {
                tutorials_visible: !self.tutorials_visible,
                ..self
            },
            PanelEvent::TabClicked(tab) => {
                let clicked = tab.as_dynamic();
                if self.dynamic == clicked {
                    PanelState { dynamic: None, ..self }
                } else {
                    PanelState { dynamic: clicked, ..self }
                }
            }
            PanelEvent::Open(Tab::Tutorials) => PanelState {
                tutorials_visible: true,
                ..self
            },
            PanelEvent::Open(tab) => PanelState {
                dynamic: tab.as_dynamic(),
                ..self
            },
            PanelEvent::CloseTutorials => PanelState {
                tutorials_visible: false,
                ..self
            },
            PanelEvent::CloseDynamic => PanelState { dynamic: None, ..self },
        };

        let effects = self.diff(&next);
        (next, effects)
    }

    fn diff(&self, next: &PanelState) -> Vec<PanelEffect> {
        let mut effects = Vec::new();
        // Hides first so a switch reads as "old panel out, new panel in"
        for tab in Tab::ALL {
            if self.is_visible(tab) && !next.is_visible(tab) {
                effects.push(PanelEffect::Hide(tab));
            }
        }
        for tab in Tab::ALL {
            if !self.is_visible(tab) && next.is_visible(tab) {
                effects.push(PanelEffect::Show(tab));
            }
        }
        for tab in Tab::ALL {
            let style = next.tab_style(tab);
            if self.tab_style(tab) != style {
                effects.push(PanelEffect::Restyle(tab, style));
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: f32 = 1440.0;
    const TUTORIALS: f32 = 300.0;

    fn click(state: PanelState, tab: Tab) -> (PanelState, Vec<PanelEffect>) {
        state.reduce(PanelEvent::TabClicked(tab))
    }

    #[test]
    fn test_startup_state() {
        let state = PanelState::on_startup();
        assert!(state.is_visible(Tab::Tutorials));
        assert!(state.is_visible(Tab::ProjectDetails));
        assert!(!state.is_visible(Tab::Results));
        assert!(!state.is_visible(Tab::Compare));
        assert_eq!(state.tab_style(Tab::Tutorials), TabStyle::Active);
        assert_eq!(state.tab_style(Tab::ProjectDetails), TabStyle::Active);
        assert_eq!(state.tab_style(Tab::Results), TabStyle::Inactive);
        assert_eq!(state.tab_style(Tab::Compare), TabStyle::Inactive);
        assert_eq!(state.split_sizes(TOTAL, TUTORIALS), [300.0, 1140.0]);
    }

    #[test]
    fn test_switch_dynamic_tab() {
        let state = PanelState::on_startup();
        let (state, _) = click(state, Tab::ProjectDetails);
        let (state, _) = click(state, Tab::ProjectDetails);
        let (state, effects) = click(state, Tab::Results);
        assert_eq!(state.dynamic(), Some(DynamicPanel::Results));
        let active: Vec<_> = DynamicPanel::ALL
            .iter()
            .filter(|p| state.tab_style(p.tab()) == TabStyle::Active)
            .collect();
        assert_eq!(active, vec![&DynamicPanel::Results]);
        assert!(effects.contains(&PanelEffect::Show(Tab::Results)));
    }

    #[test]
    fn test_project_details_then_results_clears_highlight() {
        let (state, effects) = click(PanelState::on_startup(), Tab::Results);
        assert_eq!(state.tab_style(Tab::ProjectDetails), TabStyle::Inactive);
        assert_eq!(state.tab_style(Tab::Results), TabStyle::Active);
        assert_eq!(
            effects,
            vec![
                PanelEffect::Hide(Tab::ProjectDetails),
                PanelEffect::Show(Tab::Results),
                PanelEffect::Restyle(Tab::ProjectDetails, TabStyle::Inactive),
                PanelEffect::Restyle(Tab::Results, TabStyle::Active),
            ]
        );
    }

    #[test]
    fn test_clicking_active_tab_collapses_region() {
        let (state, effects) = click(PanelState::on_startup(), Tab::ProjectDetails);
        assert!(!state.dynamic_visible());
        assert_eq!(state.dynamic(), None);
        assert_eq!(state.split_sizes(TOTAL, TUTORIALS), [300.0, 0.0]);
        assert!(effects.contains(&PanelEffect::Hide(Tab::ProjectDetails)));

        // Clicking again reopens it
        let (state, _) = click(state, Tab::ProjectDetails);
        assert_eq!(state.dynamic(), Some(DynamicPanel::ProjectDetails));
    }

    #[test]
    fn test_tutorials_never_touch_dynamic_region() {
        let start = PanelState::on_startup();
        let (hidden, _) = click(start, Tab::Tutorials);
        assert!(!hidden.tutorials_visible());
        assert_eq!(hidden.dynamic(), start.dynamic());
        assert_eq!(hidden.split_sizes(TOTAL, TUTORIALS), [0.0, 1440.0]);

        let (shown, _) = click(hidden, Tab::Tutorials);
        assert!(shown.tutorials_visible());
        assert_eq!(shown.dynamic(), start.dynamic());
    }

    #[test]
    fn test_close_buttons() {
        let (state, _) = PanelState::on_startup().reduce(PanelEvent::CloseTutorials);
        assert!(!state.tutorials_visible());
        let (state, effects) = state.reduce(PanelEvent::CloseDynamic);
        assert!(!state.dynamic_visible());
        assert_eq!(state.split_sizes(TOTAL, TUTORIALS), [0.0, 0.0]);
        assert!(effects.contains(&PanelEffect::Restyle(Tab::ProjectDetails, TabStyle::Inactive)));
    }

    #[test]
    fn test_open_is_idempotent() {
        let start = PanelState::on_startup();
        let (state, effects) = start.reduce(PanelEvent::Open(Tab::Tutorials));
        assert_eq!(state, start);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_open_switches_dynamic_panel() {
        let (state, effects) = PanelState::on_startup().reduce(PanelEvent::Open(Tab::Compare));
        assert_eq!(state.dynamic(), Some(DynamicPanel::Compare));
        assert!(state.tutorials_visible());
        assert_eq!(state.tab_style(Tab::ProjectDetails), TabStyle::Inactive);
        assert_eq!(state.tab_style(Tab::Compare), TabStyle::Active);
        assert_eq!(
            effects,
            vec![
                PanelEffect::Hide(Tab::ProjectDetails),
                PanelEffect::Show(Tab::Compare),
                PanelEffect::Restyle(Tab::ProjectDetails, TabStyle::Inactive),
                PanelEffect::Restyle(Tab::Compare, TabStyle::Active),
            ]
        );
    }

    #[test]
    fn test_split_sizes_never_negative() {
        let state = PanelState::on_startup();
        assert_eq!(state.split_sizes(200.0, TUTORIALS), [300.0, 0.0]);
    }

    #[test]
    fn test_tab_from_caption() {
        assert_eq!("Project Details".parse::<Tab>().unwrap(), Tab::ProjectDetails);
        assert_eq!("Compare".parse::<Tab>().unwrap(), Tab::Compare);
        assert!("Reports".parse::<Tab>().is_err());
    }
}
