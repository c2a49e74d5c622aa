//! # Session
//!
//! Everything the main window knows, owned in one place and handed to the
//! view layer. The form store lives here instead of in a global, and is lent
//! to the dialog host whenever a dialog opens or closes.
//!
//! ## Example
//!
//! ```rust
//! use bicca_core::dialogs::{CategoryDialog, Outcome};
//! use bicca_core::form_store::FieldValue;
//! use bicca_core::session::Session;
//!
//! let mut session = Session::default();
//! assert!(session.launch_dialog(CategoryDialog::Financial));
//! session
//!     .dialogs
//!     .current_mut()
//!     .unwrap()
//!     .set_field("discount_rate", FieldValue::Number(3.5));
//! session.close_dialog(Outcome::Save);
//!
//! assert_eq!(session.store.get("Financial")["discount_rate"], FieldValue::Number(3.5));
//! ```

use tracing::debug;

use crate::config::ShellConfig;
use crate::dialogs::{CategoryDialog, DialogHost, Outcome};
use crate::form_store::FormStore;
use crate::panels::{DynamicPanel, PanelEffect, PanelEvent, PanelState};
use crate::project::{GeneralInformation, LookupCategory};
use crate::sections::{Member, SectionEvent, SectionState};
use crate::tutorial::TutorialCursor;

/// What the split view draws.
///
/// Driven by panel visibility, not by the computed widths: an Active
/// dynamic tab always gets its panel even when the window is too narrow to
/// leave it any room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    /// Width of the tutorials region, when shown
    pub tutorials_width: Option<f32>,
    pub dynamic: Option<DynamicPanel>,
}

/// State of one running main window.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: ShellConfig,
    pub store: FormStore,
    pub tutorial: TutorialCursor,
    pub panels: PanelState,
    pub sections: SectionState,
    pub dialogs: DialogHost,
    pub general: GeneralInformation,
    pub lookup: LookupCategory,
    pub lookup_query: String,
    /// Current width of the split view
    pub window_width: f32,
}

impl Session {
    pub fn new(config: ShellConfig) -> Self {
        Session {
            window_width: config.window_width,
            config,
            store: FormStore::new(),
            tutorial: TutorialCursor::new(),
            panels: PanelState::on_startup(),
            sections: SectionState::new(),
            dialogs: DialogHost::new(),
            general: GeneralInformation::default(),
            lookup: LookupCategory::default(),
            lookup_query: String::new(),
        }
    }

    /// Run a panel event through the coordinator.
    pub fn handle_panel(&mut self, event: PanelEvent) -> Vec<PanelEffect> {
        let (next, effects) = self.panels.reduce(event);
        self.panels = next;
        for effect in &effects {
            debug!(?event, ?effect, "panel effect");
        }
        effects
    }

    /// Run a section event through the collapsible-section controller.
    pub fn handle_section(&mut self, event: SectionEvent) -> Vec<(Member, bool)> {
        let assigned = self.sections.apply(event);
        debug!(?event, assigned = assigned.len(), "section visibility updated");
        assigned
    }

    pub fn launch_dialog(&mut self, kind: CategoryDialog) -> bool {
        self.dialogs.launch(kind, &self.store)
    }

    pub fn close_dialog(&mut self, outcome: Outcome) -> Option<CategoryDialog> {
        self.dialogs.close(outcome, &mut self.store)
    }

    pub fn resize(&mut self, width: f32) {
        self.window_width = width.max(0.0);
    }

    /// Widths of the (tutorials, dynamic) regions at the current window width
    pub fn split_sizes(&self) -> [f32; 2] {
        self.panels
            .split_sizes(self.window_width, self.config.tutorials_width)
    }

    pub fn split_layout(&self) -> SplitLayout {
        let [tutorials_width, _] = self.split_sizes();
        SplitLayout {
            tutorials_width: self.panels.tutorials_visible().then_some(tutorials_width),
            dynamic: self.panels.dynamic(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(ShellConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_store::{FieldValue, FormRecord};
    use crate::panels::{Tab, TabStyle};
    use crate::sections::{Group, SubGroup};

    #[test]
    fn test_fresh_session() {
        let session = Session::default();
        assert!(session.panels.is_visible(Tab::Tutorials));
        assert!(session.panels.is_visible(Tab::ProjectDetails));
        assert_eq!(session.panels.tab_style(Tab::Results), TabStyle::Inactive);
        assert_eq!(session.split_sizes(), [300.0, 1140.0]);
        assert_eq!(session.tutorial.current_page(), 1);
        assert!(session.store.is_empty());
        assert!(!session.dialogs.is_open());
        assert!(!session.sections.is_expanded(Group::InputParameters));
    }

    #[test]
    fn test_resize_recomputes_split() {
        let mut session = Session::default();
        session.resize(1000.0);
        assert_eq!(session.split_sizes(), [300.0, 700.0]);
        session.handle_panel(PanelEvent::TabClicked(Tab::Tutorials));
        assert_eq!(session.split_sizes(), [0.0, 1000.0]);
    }

    #[test]
    fn test_narrow_window_keeps_active_panel() {
        let mut session = Session::default();
        session.resize(200.0);
        assert_eq!(session.split_sizes(), [300.0, 0.0]);
        assert_eq!(
            session.split_layout(),
            SplitLayout {
                tutorials_width: Some(300.0),
                dynamic: Some(DynamicPanel::ProjectDetails),
            }
        );

        session.handle_panel(PanelEvent::TabClicked(Tab::Tutorials));
        session.handle_panel(PanelEvent::TabClicked(Tab::ProjectDetails));
        assert_eq!(
            session.split_layout(),
            SplitLayout { tutorials_width: None, dynamic: None }
        );
    }

    #[test]
    fn test_dialog_round_trip_through_store() {
        let mut session = Session::default();
        let mut prior = FormRecord::new();
        prior.insert("x".to_string(), FieldValue::Integer(1));
        session.store.save("Foundation", prior);

        assert!(session.launch_dialog(CategoryDialog::Foundation));
        assert!(!session.launch_dialog(CategoryDialog::Financial));
        {
            let dialog = session.dialogs.current_mut().unwrap();
            assert_eq!(dialog.fields()["x"], FieldValue::Integer(1));
            dialog.remove_field("x");
            dialog.set_field("y", FieldValue::Integer(2));
        }
        assert_eq!(session.close_dialog(Outcome::Save), Some(CategoryDialog::Foundation));

        let got = session.store.get("Foundation");
        assert_eq!(got.len(), 1);
        assert_eq!(got["y"], FieldValue::Integer(2));
    }

    #[test]
    fn test_section_events_pass_through() {
        let mut session = Session::default();
        session.handle_section(SectionEvent::ToggleGroup(Group::InputParameters));
        let assigned = session.handle_section(SectionEvent::ToggleSubGroup(SubGroup::StructureWorks));
        assert_eq!(assigned, vec![(Member::SubGroupContainer(SubGroup::StructureWorks), true)]);
    }
}
