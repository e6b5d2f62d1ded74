use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::UnknownGender;
use crate::tech_stack::TechStack;

/// Gender choices offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All options in the order the select lists them
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Value stored in the draft and in the `<option value>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Capitalized label for the select and the display panel
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

/// One named technology in the tech stack list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStackEntry {
    /// Stable render key; survives removals of earlier entries
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
}

impl TechStackEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(String::new())
    }
}

impl Default for TechStackEntry {
    fn default() -> Self {
        Self::empty()
    }
}

// The id is a render key, not data.
impl PartialEq for TechStackEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TechStackEntry {}

/// The in-progress form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// Raw select value; empty while the placeholder is selected
    pub gender: String,
    /// Raw date picker value (YYYY-MM-DD)
    pub date_of_birth: String,
    pub tech_stack: TechStack,
}

/// A validated, normalized profile as handed to the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: Gender,
    /// Display-formatted, e.g. `15/Jan/1990`
    pub date_of_birth: String,
    pub tech_stack: Vec<TechStackEntry>,
}

impl SubmittedProfile {
    /// Tech names joined the way the display panel lists them
    pub fn tech_stack_summary(&self) -> String {
        self.tech_stack
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
