//! Validation rules for the profile form.
//!
//! The schema is a plain table: each field names how to read its value from
//! the draft, whether the value is trimmed first, and an ordered list of
//! rules. Every field is checked; within a field the first failing rule wins.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::FormConfig;
use crate::date_format::{format_date_of_birth, parse_date_input};
use crate::profile::{Gender, ProfileDraft, SubmittedProfile};

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s]*$").expect("name pattern compiles")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

static DIGITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern compiles"));

pub const NAME_CHARSET_MESSAGE: &str = "Name cannot contain numbers or special characters";
pub const TECH_REQUIRED_MESSAGE: &str = "Tech Stack is required";

/// Address of a form field, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Gender,
    DateOfBirth,
    /// `techStack.<index>.name`
    TechStackName(usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::FirstName => f.write_str("firstName"),
            FieldPath::LastName => f.write_str("lastName"),
            FieldPath::Email => f.write_str("email"),
            FieldPath::PhoneNumber => f.write_str("phoneNumber"),
            FieldPath::Gender => f.write_str("gender"),
            FieldPath::DateOfBirth => f.write_str("dateOfBirth"),
            FieldPath::TechStackName(index) => write!(f, "techStack.{}.name", index),
        }
    }
}

/// Field path -> message for every failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldPath, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, path: FieldPath) -> Option<&str> {
        self.errors.get(&path).map(String::as_str)
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.errors.contains_key(&path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, &str)> {
        self.errors.iter().map(|(path, message)| (*path, message.as_str()))
    }

    pub(crate) fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        self.errors.insert(path, message.into());
    }

    pub(crate) fn remove(&mut self, path: FieldPath) {
        self.errors.remove(&path);
    }

    /// Drop every tech stack error; indices are invalid after a removal
    pub(crate) fn clear_tech_stack(&mut self) {
        self.errors.retain(|path, _| !matches!(path, FieldPath::TechStackName(_)));
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", path, message)?;
            first = false;
        }
        Ok(())
    }
}

/// A single check applied to a field value
#[derive(Debug, Clone)]
enum Rule {
    Required(String),
    MinChars(usize, String),
    ExactChars(usize, String),
    Matches(&'static Lazy<Regex>, String),
    OneOfGender(String),
    CalendarDate(String),
}

impl Rule {
    /// The failure message, or `None` when `value` passes
    fn check(&self, value: &str) -> Option<&str> {
        let passes = match self {
            Rule::Required(_) => !value.is_empty(),
            Rule::MinChars(min, _) => value.chars().count() >= *min,
            Rule::ExactChars(len, _) => value.chars().count() == *len,
            Rule::Matches(pattern, _) => pattern.is_match(value),
            Rule::OneOfGender(_) => value.parse::<Gender>().is_ok(),
            Rule::CalendarDate(_) => parse_date_input(value).is_ok(),
        };
        if passes {
            None
        } else {
            Some(self.message())
        }
    }

    fn message(&self) -> &str {
        match self {
            Rule::Required(message)
            | Rule::MinChars(_, message)
            | Rule::ExactChars(_, message)
            | Rule::Matches(_, message)
            | Rule::OneOfGender(message)
            | Rule::CalendarDate(message) => message,
        }
    }
}

/// Rules for one scalar field of the draft
#[derive(Clone)]
struct FieldRules {
    path: FieldPath,
    read: fn(&ProfileDraft) -> &str,
    trim: bool,
    rules: Vec<Rule>,
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("path", &self.path)
            .field("trim", &self.trim)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl FieldRules {
    fn first_failure(&self, draft: &ProfileDraft) -> Option<&str> {
        let raw = (self.read)(draft);
        let value = if self.trim { raw.trim() } else { raw };
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// The validation table for `ProfileDraft`
#[derive(Debug, Clone)]
pub struct ProfileSchema {
    fields: Vec<FieldRules>,
    tech_name: Rule,
    date_display_format: String,
}

impl Default for ProfileSchema {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl ProfileSchema {
    pub fn new(config: &FormConfig) -> Self {
        let name_rules = |label: &str, title: &str| {
            vec![
                Rule::Required(format!("{} is required", label)),
                Rule::MinChars(
                    config.name_min_len,
                    format!("{} must be at least {} characters", title, config.name_min_len),
                ),
                Rule::Matches(&NAME_PATTERN, NAME_CHARSET_MESSAGE.to_string()),
            ]
        };
        let phone_length_message =
            format!("Phone number must be exactly {} characters", config.phone_digits);

        let fields = vec![
            FieldRules {
                path: FieldPath::FirstName,
                read: |d| d.first_name.as_str(),
                trim: true,
                rules: name_rules("First name", "First Name"),
            },
            FieldRules {
                path: FieldPath::LastName,
                read: |d| d.last_name.as_str(),
                trim: true,
                rules: name_rules("Last name", "Last Name"),
            },
            FieldRules {
                path: FieldPath::Email,
                read: |d| d.email.as_str(),
                trim: false,
                rules: vec![
                    Rule::Required("Email is required".to_string()),
                    Rule::Matches(&EMAIL_PATTERN, "Invalid email".to_string()),
                ],
            },
            FieldRules {
                path: FieldPath::PhoneNumber,
                read: |d| d.phone_number.as_str(),
                trim: false,
                rules: vec![
                    Rule::Required("Phone Number is required".to_string()),
                    Rule::Matches(&DIGITS_PATTERN, "Only numbers are allowed".to_string()),
                    Rule::ExactChars(config.phone_digits, phone_length_message),
                ],
            },
            FieldRules {
                path: FieldPath::Gender,
                read: |d| d.gender.as_str(),
                trim: false,
                rules: vec![
                    Rule::Required("Gender is required".to_string()),
                    Rule::OneOfGender("Invalid Gender".to_string()),
                ],
            },
            FieldRules {
                path: FieldPath::DateOfBirth,
                read: |d| d.date_of_birth.as_str(),
                trim: false,
                rules: vec![
                    Rule::Required("Date of Birth is required".to_string()),
                    Rule::CalendarDate("Invalid date of birth".to_string()),
                ],
            },
        ];

        Self {
            fields,
            tech_name: Rule::Required(TECH_REQUIRED_MESSAGE.to_string()),
            date_display_format: config.date_display_format.clone(),
        }
    }

    /// Check every field of the draft
    pub fn validate(&self, draft: &ProfileDraft) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in &self.fields {
            if let Some(message) = field.first_failure(draft) {
                errors.insert(field.path, message);
            }
        }
        for (index, entry) in draft.tech_stack.iter().enumerate() {
            if let Some(message) = self.tech_name.check(&entry.name) {
                errors.insert(FieldPath::TechStackName(index), message);
            }
        }
        errors
    }

    /// Check a single field; `None` means it passes (or does not exist)
    pub fn validate_field(&self, draft: &ProfileDraft, path: FieldPath) -> Option<String> {
        match path {
            FieldPath::TechStackName(index) => {
                let entry = draft.tech_stack.entries().get(index)?;
                self.tech_name.check(&entry.name).map(str::to_string)
            }
            _ => self
                .fields
                .iter()
                .find(|field| field.path == path)
                .and_then(|field| field.first_failure(draft))
                .map(str::to_string),
        }
    }

    /// Validate and produce the normalized profile
    ///
    /// Names are trimmed and the date of birth is reformatted for display;
    /// everything else is carried over verbatim.
    pub fn parse(&self, draft: &ProfileDraft) -> Result<SubmittedProfile, ValidationErrors> {
        let mut errors = self.validate(draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        let gender = match draft.gender.parse::<Gender>() {
            Ok(gender) => gender,
            Err(_) => {
                errors.insert(FieldPath::Gender, "Invalid Gender");
                return Err(errors);
            }
        };
        let date_of_birth =
            match format_date_of_birth(&draft.date_of_birth, &self.date_display_format) {
                Ok(formatted) => formatted,
                Err(e) => {
                    errors.insert(FieldPath::DateOfBirth, e.to_string());
                    return Err(errors);
                }
            };

        Ok(SubmittedProfile {
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            gender,
            date_of_birth,
            tech_stack: draft.tech_stack.entries().to_vec(),
        })
    }
}
