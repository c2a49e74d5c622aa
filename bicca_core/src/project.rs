//! # Project Data
//!
//! General information entered in the Project Details panel, plus the
//! fixed lists backing its drop-downs (countries, status-bar look-ups).
//!
//! ## Structure
//!
//! ```text
//! GeneralInformation
//! ├── company_name, project_title, project_description
//! ├── valuer_name, job_number, client
//! ├── country (one of COUNTRIES)
//! └── base_year (free text, e.g. "2023")
//! ```
//!
//! Nothing here is validated: a job number or base year is whatever the
//! user typed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ShellError, ShellResult};

/// Countries offered by the Country drop-down, in display order.
pub const COUNTRIES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Antigua and Barbuda",
    "Argentina", "Armenia", "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain",
    "Bangladesh", "Barbados", "Belarus", "Belgium", "Belize", "Benin", "Bhutan", "Bolivia",
    "Bosnia and Herzegovina", "Botswana", "Brazil", "Brunei Darussalam", "Bulgaria",
    "Burkina Faso", "Burundi", "Cabo Verde", "Cambodia", "Cameroon", "Canada",
    "Central African Republic", "Chad", "Chile", "China", "Colombia", "Comoros",
    "Congo (Brazzaville)", "Congo (Kinshasa)", "Costa Rica", "Croatia", "Cuba", "Cyprus",
    "Czechia", "Denmark", "Djibouti", "Dominica", "Dominican Republic", "Ecuador", "Egypt",
    "El Salvador", "Equatorial Guinea", "Eritrea", "Estonia", "Eswatini", "Ethiopia", "Fiji",
    "Finland", "France", "Gabon", "Gambia", "Georgia", "Germany", "Ghana", "Greece", "Grenada",
    "Guatemala", "Guinea", "Guinea-Bissau", "Guyana", "Haiti", "Honduras", "Hungary",
    "Iceland", "India", "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy", "Jamaica",
    "Japan", "Jordan", "Kazakhstan", "Kenya", "Kiribati", "Kuwait", "Kyrgyzstan", "Laos",
    "Latvia", "Lebanon", "Lesotho", "Liberia", "Libya", "Liechtenstein", "Lithuania",
    "Luxembourg", "Madagascar", "Malawi", "Malaysia", "Maldives", "Mali", "Malta",
    "Marshall Islands", "Mauritania", "Mauritius", "Mexico", "Micronesia", "Moldova", "Monaco",
    "Mongolia", "Montenegro", "Morocco", "Mozambique", "Myanmar", "Namibia", "Nauru", "Nepal",
    "Netherlands", "New Zealand", "Nicaragua", "Niger", "Nigeria", "North Korea",
    "North Macedonia", "Norway", "Oman", "Pakistan", "Palau", "Palestine State", "Panama",
    "Papua New Guinea", "Paraguay", "Peru", "Philippines", "Poland", "Portugal", "Qatar",
    "Romania", "Russia", "Rwanda", "Saint Kitts and Nevis", "Saint Lucia",
    "Saint Vincent and the Grenadines", "Samoa", "San Marino", "Sao Tome and Principe",
    "Saudi Arabia", "Senegal", "Serbia", "Seychelles", "Sierra Leone", "Singapore", "Slovakia",
    "Slovenia", "Solomon Islands", "Somalia", "South Africa", "South Korea", "South Sudan",
    "Spain", "Sri Lanka", "Sudan", "Suriname", "Sweden", "Switzerland", "Syria", "Taiwan",
    "Tajikistan", "Tanzania", "Thailand", "Timor-Leste", "Togo", "Tonga",
    "Trinidad and Tobago", "Tunisia", "Turkey", "Turkmenistan", "Tuvalu", "Uganda", "Ukraine",
    "United Arab Emirates", "United Kingdom", "United States", "Uruguay", "Uzbekistan",
    "Vanuatu", "Vatican City", "Venezuela", "Vietnam", "Yemen", "Zambia", "Zimbabwe",
];

/// One row of the General Information form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralField {
    CompanyName,
    ProjectTitle,
    ProjectDescription,
    ValuerName,
    JobNumber,
    Client,
    Country,
    BaseYear,
}

impl GeneralField {
    pub const ALL: [GeneralField; 8] = [
        GeneralField::CompanyName,
        GeneralField::ProjectTitle,
        GeneralField::ProjectDescription,
        GeneralField::ValuerName,
        GeneralField::JobNumber,
        GeneralField::Client,
        GeneralField::Country,
        GeneralField::BaseYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GeneralField::CompanyName => "Company Name",
            GeneralField::ProjectTitle => "Project Title",
            GeneralField::ProjectDescription => "Project Description",
            GeneralField::ValuerName => "Name of Valuer",
            GeneralField::JobNumber => "Job Number",
            GeneralField::Client => "Client",
            GeneralField::Country => "Country",
            GeneralField::BaseYear => "Base Year",
        }
    }

    /// Hint shown in an empty input. Country is a drop-down and has none.
    pub fn placeholder(&self) -> &'static str {
        match self {
            GeneralField::CompanyName => "Enter Company Name",
            GeneralField::ProjectTitle => "Enter Project Title",
            GeneralField::ProjectDescription => "Enter Project Description",
            GeneralField::ValuerName => "Enter Valuer's Name",
            GeneralField::JobNumber => "Enter Job Number",
            GeneralField::Client => "Enter Client Name",
            GeneralField::Country => "",
            GeneralField::BaseYear => "e.g., 2023",
        }
    }
}

/// General project metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralInformation {
    pub company_name: String,
    pub project_title: String,
    pub project_description: String,
    pub valuer_name: String,
    pub job_number: String,
    pub client: String,
    pub country: String,
    pub base_year: String,
}

impl Default for GeneralInformation {
    fn default() -> Self {
        GeneralInformation {
            company_name: String::new(),
            project_title: String::new(),
            project_description: String::new(),
            valuer_name: String::new(),
            job_number: String::new(),
            client: String::new(),
            country: COUNTRIES[0].to_string(),
            base_year: String::new(),
        }
    }
}

impl GeneralInformation {
    pub fn get(&self, field: GeneralField) -> &str {
        match field {
            GeneralField::CompanyName => &self.company_name,
            GeneralField::ProjectTitle => &self.project_title,
            GeneralField::ProjectDescription => &self.project_description,
            GeneralField::ValuerName => &self.valuer_name,
            GeneralField::JobNumber => &self.job_number,
            GeneralField::Client => &self.client,
            GeneralField::Country => &self.country,
            GeneralField::BaseYear => &self.base_year,
        }
    }

    pub fn set(&mut self, field: GeneralField, value: impl Into<String>) {
        let slot = match field {
            GeneralField::CompanyName => &mut self.company_name,
            GeneralField::ProjectTitle => &mut self.project_title,
            GeneralField::ProjectDescription => &mut self.project_description,
            GeneralField::ValuerName => &mut self.valuer_name,
            GeneralField::JobNumber => &mut self.job_number,
            GeneralField::Client => &mut self.client,
            GeneralField::Country => &mut self.country,
            GeneralField::BaseYear => &mut self.base_year,
        };
        *slot = value.into();
    }

    /// The matching entry of [`COUNTRIES`], if the stored country is one
    pub fn country_choice(&self) -> Option<&'static str> {
        COUNTRIES.iter().copied().find(|c| *c == self.country)
    }
}

/// Reference data sets offered by the status-bar look-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LookupCategory {
    #[default]
    CarbonData,
    MaintenanceRateData,
    RecyclingData,
}

impl LookupCategory {
    pub const ALL: [LookupCategory; 3] = [
        LookupCategory::CarbonData,
        LookupCategory::MaintenanceRateData,
        LookupCategory::RecyclingData,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LookupCategory::CarbonData => "Carbon Data",
            LookupCategory::MaintenanceRateData => "Maintenance Rate Data",
            LookupCategory::RecyclingData => "Recycling Data",
        }
    }
}

impl fmt::Display for LookupCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LookupCategory {
    type Err = ShellError;

    fn from_str(s: &str) -> ShellResult<Self> {
        LookupCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ShellError::unknown_lookup(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_list() {
        assert_eq!(COUNTRIES.len(), 195);
        assert_eq!(COUNTRIES[0], "Afghanistan");
        assert_eq!(COUNTRIES[COUNTRIES.len() - 1], "Zimbabwe");
        assert!(COUNTRIES.contains(&"United Kingdom"));
    }

    #[test]
    fn test_default_country_is_first_entry() {
        let info = GeneralInformation::default();
        assert_eq!(info.country_choice(), Some("Afghanistan"));
        assert!(info.company_name.is_empty());
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut info = GeneralInformation::default();
        info.set(GeneralField::JobNumber, "J-0042");
        info.set(GeneralField::BaseYear, "not a year");
        assert_eq!(info.get(GeneralField::JobNumber), "J-0042");
        // Base year is not validated
        assert_eq!(info.get(GeneralField::BaseYear), "not a year");
    }

    #[test]
    fn test_unknown_country_has_no_choice() {
        let mut info = GeneralInformation::default();
        info.set(GeneralField::Country, "Atlantis");
        assert_eq!(info.country_choice(), None);
    }

    #[test]
    fn test_lookup_labels() {
        assert_eq!(LookupCategory::default(), LookupCategory::CarbonData);
        assert_eq!(
            "Recycling Data".parse::<LookupCategory>().unwrap(),
            LookupCategory::RecyclingData
        );
        assert!("Traffic Data".parse::<LookupCategory>().is_err());
    }

    #[test]
    fn test_serialization() {
        let mut info = GeneralInformation::default();
        info.set(GeneralField::Client, "Highways Agency");
        let json = serde_json::to_string(&info).unwrap();
        let roundtrip: GeneralInformation = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, info);
    }
}
