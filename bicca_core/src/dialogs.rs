//! # Category Dialogs
//!
//! Nine data-entry dialogs hang off the Input Parameters group. Their field
//! layouts live outside this shell; here each one is a window name used as
//! its [`FormStore`] key and a modal slot that holds a draft record while
//! the dialog is open.
//!
//! Only one dialog can be open at a time. Launching while another is open is
//! refused, which is how the modal blocks the rest of the window.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ShellError, ShellResult};
use crate::form_store::{FieldValue, FormRecord, FormStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryDialog {
    Foundation,
    SuperStructure,
    SubStructure,
    Miscellaneous,
    Financial,
    CarbonEmission,
    BridgeTraffic,
    Maintenance,
    Demolition,
}

impl CategoryDialog {
    pub const ALL: [CategoryDialog; 9] = [
        CategoryDialog::Foundation,
        CategoryDialog::SuperStructure,
        CategoryDialog::SubStructure,
        CategoryDialog::Miscellaneous,
        CategoryDialog::Financial,
        CategoryDialog::CarbonEmission,
        CategoryDialog::BridgeTraffic,
        CategoryDialog::Maintenance,
        CategoryDialog::Demolition,
    ];

    /// Key under which the dialog's fields are saved
    pub fn window_name(&self) -> &'static str {
        match self {
            CategoryDialog::Foundation => "Foundation",
            CategoryDialog::SuperStructure => "Super-Structure",
            CategoryDialog::SubStructure => "Sub-Structure",
            CategoryDialog::Miscellaneous => "Miscellaneous",
            CategoryDialog::Financial => "Financial",
            CategoryDialog::CarbonEmission => "Carbon Emission",
            CategoryDialog::BridgeTraffic => "Bridge and Traffic",
            CategoryDialog::Maintenance => "Maintenance and Repair",
            CategoryDialog::Demolition => "Demolition and Recycling",
        }
    }

    /// Text on the button that opens the dialog
    pub fn button_label(&self) -> &'static str {
        match self {
            CategoryDialog::Foundation => "Foundation",
            CategoryDialog::SuperStructure => "Super-Structure",
            CategoryDialog::SubStructure => "Sub-Structure",
            CategoryDialog::Miscellaneous => "Miscellaneous",
            CategoryDialog::Financial => "Financial Data",
            CategoryDialog::CarbonEmission => "Carbon Emission Cost Data",
            CategoryDialog::BridgeTraffic => "Bridge and Traffic Data",
            CategoryDialog::Maintenance => "Maintenance and Repair",
            CategoryDialog::Demolition => "Disposal and Recycling",
        }
    }

    /// Heading of the dialog window
    pub fn title(&self) -> &'static str {
        match self {
            CategoryDialog::Foundation => "Foundation Data",
            CategoryDialog::SuperStructure => "Super-Structure Data",
            CategoryDialog::SubStructure => "Sub-Structure Data",
            CategoryDialog::Miscellaneous => "Miscellaneous Data",
            CategoryDialog::Financial => "Financial Data",
            CategoryDialog::CarbonEmission => "Carbon Emission Data",
            CategoryDialog::BridgeTraffic => "Bridge and Traffic Data",
            CategoryDialog::Maintenance => "Maintenance and Repair Data",
            CategoryDialog::Demolition => "Demolition and Recycling Data",
        }
    }
}

impl fmt::Display for CategoryDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.window_name())
    }
}

impl FromStr for CategoryDialog {
    type Err = ShellError;

    fn from_str(s: &str) -> ShellResult<Self> {
        CategoryDialog::ALL
            .into_iter()
            .find(|d| d.window_name() == s)
            .ok_or_else(|| ShellError::unknown_dialog(s))
    }
}

/// How a dialog was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Save,
    Discard,
}

/// A dialog currently shown, with the fields being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenDialog {
    kind: CategoryDialog,
    draft: FormRecord,
}

impl OpenDialog {
    /// Build the dialog, prefilled with whatever was last saved for it.
    pub fn new(kind: CategoryDialog, store: &FormStore) -> Self {
        OpenDialog {
            kind,
            draft: store.get(kind.window_name()),
        }
    }

    pub fn kind(&self) -> CategoryDialog {
        self.kind
    }

    pub fn fields(&self) -> &FormRecord {
        &self.draft
    }

    /// Insert or replace a field. Blank names are ignored.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.draft.insert(name.to_string(), value);
        true
    }

    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.draft.remove(name)
    }
}

/// Modal slot: holds at most one open dialog.
#[derive(Debug, Clone, Default)]
pub struct DialogHost {
    open: Option<OpenDialog>,
}

impl DialogHost {
    pub fn new() -> Self {
        DialogHost::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenDialog> {
        self.open.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut OpenDialog> {
        self.open.as_mut()
    }

    /// Open `kind` modally. Returns false if another dialog is already open.
    pub fn launch(&mut self, kind: CategoryDialog, store: &FormStore) -> bool {
        if let Some(open) = &self.open {
            debug!(requested = %kind, open = %open.kind, "dialog launch refused while modal is open");
            return false;
        }
        debug!(dialog = %kind, "dialog opened");
        self.open = Some(OpenDialog::new(kind, store));
        true
    }

    /// Close the open dialog, saving its draft on [`Outcome::Save`].
    ///
    /// Returns the dialog that was closed, or `None` if nothing was open.
    pub fn close(&mut self, outcome: Outcome, store: &mut FormStore) -> Option<CategoryDialog> {
        let dialog = self.open.take()?;
        if outcome == Outcome::Save {
            store.save(dialog.kind.window_name(), dialog.draft);
        }
        debug!(dialog = %dialog.kind, ?outcome, "dialog closed");
        Some(dialog.kind)
    }
}
