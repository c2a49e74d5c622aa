//! # Collapsible Sections
//!
//! The Project Details panel has three collapsible groups. Input Parameters
//! additionally holds two checkable sub-groups whose containers are shown
//! only while both the group and the sub-group are open.
//!
//! ```text
//! General Information   company, title, description, valuer, job no., client, country, base year
//! Input Parameters      Structure Works Data ▸ [Foundation, Super-Structure, Sub-Structure, Miscellaneous]
//!                       Financial Data
//!                       Carbon Emission Data ▸ [Carbon Emission Cost Data]
//!                       Bridge and Traffic Data
//!                       Maintenance and Repair
//!                       Disposal and Recycling
//! Outputs               placeholder text
//! ```

use serde::{Deserialize, Serialize};

use crate::dialogs::CategoryDialog;
use crate::project::GeneralField;

/// Top-level collapsible groups of the Project Details panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    GeneralInformation,
    InputParameters,
    Outputs,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::GeneralInformation, Group::InputParameters, Group::Outputs];

    pub fn title(&self) -> &'static str {
        match self {
            Group::GeneralInformation => "General Information",
            Group::InputParameters => "Input Parameters",
            Group::Outputs => "Outputs",
        }
    }

    /// Widgets whose visibility follows this group directly
    pub fn members(&self) -> Vec<Member> {
        match self {
            Group::GeneralInformation => GeneralField::ALL.into_iter().map(Member::Field).collect(),
            Group::InputParameters => vec![
                Member::SubGroupToggle(SubGroup::StructureWorks),
                Member::Launcher(CategoryDialog::Financial),
                Member::SubGroupToggle(SubGroup::CarbonEmission),
                Member::Launcher(CategoryDialog::BridgeTraffic),
                Member::Launcher(CategoryDialog::Maintenance),
                Member::Launcher(CategoryDialog::Demolition),
            ],
            Group::Outputs => vec![Member::OutputsPlaceholder],
        }
    }
}

/// Checkable sub-groups nested in Input Parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubGroup {
    StructureWorks,
    CarbonEmission,
}

impl SubGroup {
    pub const ALL: [SubGroup; 2] = [SubGroup::StructureWorks, SubGroup::CarbonEmission];

    pub fn title(&self) -> &'static str {
        match self {
            SubGroup::StructureWorks => "Structure Works Data",
            SubGroup::CarbonEmission => "Carbon Emission Data",
        }
    }

    /// Dialog launchers inside the sub-group's container
    pub fn launchers(&self) -> &'static [CategoryDialog] {
        match self {
            SubGroup::StructureWorks => &[
                CategoryDialog::Foundation,
                CategoryDialog::SuperStructure,
                CategoryDialog::SubStructure,
                CategoryDialog::Miscellaneous,
            ],
            SubGroup::CarbonEmission => &[CategoryDialog::CarbonEmission],
        }
    }
}

/// A widget whose visibility the controller decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    /// Label and input of one general-information field
    Field(GeneralField),
    /// A dialog launcher button placed directly in a group
    Launcher(CategoryDialog),
    /// The checkable button that opens a sub-group
    SubGroupToggle(SubGroup),
    /// The container holding a sub-group's launchers
    SubGroupContainer(SubGroup),
    OutputsPlaceholder,
}

/// Arrow shown next to a group or sub-group title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Expanded,
    Collapsed,
}

impl Indicator {
    fn from_open(open: bool) -> Self {
        if open {
            Indicator::Expanded
        } else {
            Indicator::Collapsed
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Indicator::Expanded => "▼",
            Indicator::Collapsed => "▶",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    SetGroup(Group, bool),
    ToggleGroup(Group),
    ToggleSubGroup(SubGroup),
}

/// Open/closed flags. Everything starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionState {
    general_information: bool,
    input_parameters: bool,
    outputs: bool,
    structure_works: bool,
    carbon_emission: bool,
}

impl SectionState {
    pub fn new() -> Self {
        SectionState::default()
    }

    pub fn is_expanded(&self, group: Group) -> bool {
        match group {
            Group::GeneralInformation => self.general_information,
            Group::InputParameters => self.input_parameters,
            Group::Outputs => self.outputs,
        }
    }

    /// Whether the sub-group's own toggle is checked, regardless of its parent
    pub fn is_checked(&self, sub: SubGroup) -> bool {
        match sub {
            SubGroup::StructureWorks => self.structure_works,
            SubGroup::CarbonEmission => self.carbon_emission,
        }
    }

    pub fn group_indicator(&self, group: Group) -> Indicator {
        Indicator::from_open(self.is_expanded(group))
    }

    pub fn sub_group_indicator(&self, sub: SubGroup) -> Indicator {
        Indicator::from_open(self.is_checked(sub))
    }

    /// Group owning a member
    pub fn group_of(member: Member) -> Group {
        match member {
            Member::Field(_) => Group::GeneralInformation,
            Member::Launcher(_) | Member::SubGroupToggle(_) | Member::SubGroupContainer(_) => {
                Group::InputParameters
            }
            Member::OutputsPlaceholder => Group::Outputs,
        }
    }

    pub fn is_visible(&self, member: Member) -> bool {
        match member {
            // Launchers inside a sub-group follow the container, not the group
            Member::Launcher(dialog) => match SubGroup::ALL.into_iter().find(|s| s.launchers().contains(&dialog)) {
                Some(sub) => self.is_visible(Member::SubGroupContainer(sub)),
                None => self.is_expanded(Group::InputParameters),
            },
            Member::SubGroupContainer(sub) => self.is_expanded(Group::InputParameters) && self.is_checked(sub),
            other => self.is_expanded(Self::group_of(other)),
        }
    }

    /// Apply an event, returning the visibility assignments made.
    ///
    /// Group changes assign every direct member (and, for Input Parameters,
    /// both sub-group containers) even when the value is unchanged.
    pub fn apply(&mut self, event: SectionEvent) -> Vec<(Member, bool)> {
        match event {
            SectionEvent::SetGroup(group, open) => self.set_group(group, open),
            SectionEvent::ToggleGroup(group) => {
                let open = !self.is_expanded(group);
                self.set_group(group, open)
            }
            SectionEvent::ToggleSubGroup(sub) => {
                let flag = match sub {
                    SubGroup::StructureWorks => &mut self.structure_works,
                    SubGroup::CarbonEmission => &mut self.carbon_emission,
                };
                *flag = !*flag;
                let container = Member::SubGroupContainer(sub);
                vec![(container, self.is_visible(container))]
            }
        }
    }

    fn set_group(&mut self, group: Group, open: bool) -> Vec<(Member, bool)> {
        match group {
            Group::GeneralInformation => self.general_information = open,
            Group::InputParameters => self.input_parameters = open,
            Group::Outputs => self.outputs = open,
        }

        let mut assigned: Vec<(Member, bool)> = group.members().into_iter().map(|m| (m, open)).collect();
        if group == Group::InputParameters {
            for sub in SubGroup::ALL {
                let container = Member::SubGroupContainer(sub);
                assigned.push((container, self.is_visible(container)));
            }
        }
        assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_visible(assigned: &[(Member, bool)], sub: SubGroup) -> Option<bool> {
        assigned
            .iter()
            .find(|(m, _)| *m == Member::SubGroupContainer(sub))
            .map(|(_, v)| *v)
    }

    #[test]
    fn test_everything_starts_collapsed() {
        let state = SectionState::new();
        for group in Group::ALL {
            assert!(!state.is_expanded(group));
            for member in group.members() {
                assert!(!state.is_visible(member));
            }
        }
        for sub in SubGroup::ALL {
            assert!(!state.is_checked(sub));
            assert!(!state.is_visible(Member::SubGroupContainer(sub)));
        }
    }

    #[test]
    fn test_toggle_group_shows_members() {
        let mut state = SectionState::new();
        let assigned = state.apply(SectionEvent::ToggleGroup(Group::GeneralInformation));
        assert_eq!(assigned.len(), GeneralField::ALL.len());
        assert!(assigned.iter().all(|(_, v)| *v));
        assert!(state.is_visible(Member::Field(GeneralField::BaseYear)));
        assert_eq!(state.group_indicator(Group::GeneralInformation), Indicator::Expanded);

        state.apply(SectionEvent::ToggleGroup(Group::GeneralInformation));
        assert!(!state.is_visible(Member::Field(GeneralField::CompanyName)));
    }

    #[test]
    fn test_collapse_parent_hides_checked_child_and_restores_it() {
        let mut state = SectionState::new();
        state.apply(SectionEvent::SetGroup(Group::InputParameters, true));
        let assigned = state.apply(SectionEvent::ToggleSubGroup(SubGroup::StructureWorks));
        assert_eq!(assigned, vec![(Member::SubGroupContainer(SubGroup::StructureWorks), true)]);
        assert!(state.is_visible(Member::Launcher(CategoryDialog::Foundation)));

        let assigned = state.apply(SectionEvent::SetGroup(Group::InputParameters, false));
        assert_eq!(container_visible(&assigned, SubGroup::StructureWorks), Some(false));
        assert!(!state.is_visible(Member::Launcher(CategoryDialog::Foundation)));
        // Child keeps its own checked flag
        assert!(state.is_checked(SubGroup::StructureWorks));

        let assigned = state.apply(SectionEvent::SetGroup(Group::InputParameters, true));
        assert_eq!(container_visible(&assigned, SubGroup::StructureWorks), Some(true));
        assert_eq!(container_visible(&assigned, SubGroup::CarbonEmission), Some(false));
    }

    #[test]
    fn test_child_visibility_is_and_of_parent_and_child() {
        for parent in [false, true] {
            for child in [false, true] {
                let mut state = SectionState::new();
                state.apply(SectionEvent::SetGroup(Group::InputParameters, parent));
                if child {
                    state.apply(SectionEvent::ToggleSubGroup(SubGroup::CarbonEmission));
                }
                assert_eq!(
                    state.is_visible(Member::SubGroupContainer(SubGroup::CarbonEmission)),
                    parent && child
                );
            }
        }
    }

    #[test]
    fn test_direct_launchers_follow_group() {
        let mut state = SectionState::new();
        state.apply(SectionEvent::ToggleGroup(Group::InputParameters));
        assert!(state.is_visible(Member::Launcher(CategoryDialog::Financial)));
        assert!(state.is_visible(Member::SubGroupToggle(SubGroup::CarbonEmission)));
        assert!(!state.is_visible(Member::Launcher(CategoryDialog::CarbonEmission)));
    }

    #[test]
    fn test_outputs_group() {
        let mut state = SectionState::new();
        let assigned = state.apply(SectionEvent::ToggleGroup(Group::Outputs));
        assert_eq!(assigned, vec![(Member::OutputsPlaceholder, true)]);
        assert_eq!(state.group_indicator(Group::InputParameters), Indicator::Collapsed);
    }

    #[test]
    fn test_every_launcher_has_one_home() {
        for dialog in CategoryDialog::ALL {
            let in_group = Group::InputParameters.members().contains(&Member::Launcher(dialog));
            let in_subs = SubGroup::ALL.iter().filter(|s| s.launchers().contains(&dialog)).count();
            assert_eq!(in_group as usize + in_subs, 1, "{:?}", dialog);
        }
    }
}
