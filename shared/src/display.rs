//! The receiving end of a successful submission: a one-way sink trait and the
//! latest-record state the panel renders from.

use log::info;

use crate::profile::SubmittedProfile;

/// Receiver for accepted profiles; the controller pushes, it never reads back
pub trait DisplaySink {
    fn update_display(&mut self, record: SubmittedProfile);
}

/// Labeled row shown by the submitted-data panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
}

/// Holds the most recently accepted profile. No history, no validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    current: Option<SubmittedProfile>,
    country_code: String,
}

impl DisplayState {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            current: None,
            country_code: country_code.into(),
        }
    }

    pub fn current(&self) -> Option<&SubmittedProfile> {
        self.current.as_ref()
    }

    /// Rows in panel order; every value is empty until a profile arrives
    pub fn rows(&self) -> Vec<DisplayRow> {
        let value = |f: fn(&SubmittedProfile) -> String| {
            self.current.as_ref().map(f).unwrap_or_default()
        };
        let phone = self
            .current
            .as_ref()
            .map(|p| {
                format!("{} {}", self.country_code, p.phone_number)
                    .trim_start()
                    .to_string()
            })
            .unwrap_or_default();

        let row = |label: &'static str, value: String| DisplayRow { label, value };
        vec![
            row("First Name", value(|p| p.first_name.clone())),
            row("Last Name", value(|p| p.last_name.clone())),
            row("Email Address", value(|p| p.email.clone())),
            row("Phone Number", phone),
            row("Gender", value(|p| p.gender.label().to_string())),
            row("Date of Birth", value(|p| p.date_of_birth.clone())),
            row("Tech Stack", value(SubmittedProfile::tech_stack_summary)),
        ]
    }
}

impl DisplaySink for DisplayState {
    fn update_display(&mut self, record: SubmittedProfile) {
        info!("display updated for {} {}", record.first_name, record.last_name);
        self.current = Some(record);
    }
}

/// Every pushed profile, in order. Handy for asserting exactly-once delivery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub received: Vec<SubmittedProfile>,
}

impl DisplaySink for RecordingSink {
    fn update_display(&mut self, record: SubmittedProfile) {
        self.received.push(record);
    }
}
