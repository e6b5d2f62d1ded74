use shared::{
    DisplaySink, DisplayState, FieldPath, FormConfig, FormController, FormError, FormPhase, Gender,
    RecordingSink, SubmittedProfile, TechStackEntry,
};

fn quick_config() -> FormConfig {
    FormConfig {
        submit_delay_ms: 1,
        ..FormConfig::default()
    }
}

/// Forwards to both a display and a recorder
struct TeeSink<'a> {
    display: &'a mut DisplayState,
    recorder: &'a mut RecordingSink,
}

impl DisplaySink for TeeSink<'_> {
    fn update_display(&mut self, record: SubmittedProfile) {
        self.recorder.update_display(record.clone());
        self.display.update_display(record);
    }
}

#[tokio::test]
async fn ann_lee_end_to_end() {
    let mut form = FormController::new(quick_config());
    let mut display = DisplayState::new(form.config().country_code.clone());
    let mut recorder = RecordingSink::default();

    form.set_first_name("Ann");
    form.set_last_name("Lee");
    form.set_email("ann@x.com");
    form.set_phone_number("1234567890");
    form.set_gender("female");
    form.set_date_of_birth("1990-01-15");
    form.set_tech_name(0, "Go").unwrap();

    let mut sink = TeeSink {
        display: &mut display,
        recorder: &mut recorder,
    };
    form.submit(&mut sink, tokio::time::sleep).await.unwrap();

    assert_eq!(recorder.received.len(), 1);
    let shown = display.current().unwrap();
    assert_eq!(shown.first_name, "Ann");
    assert_eq!(shown.last_name, "Lee");
    assert_eq!(shown.email, "ann@x.com");
    assert_eq!(shown.phone_number, "1234567890");
    assert_eq!(shown.gender, Gender::Female);
    assert_eq!(shown.date_of_birth, "15/Jan/1990");
    assert_eq!(shown.tech_stack, vec![TechStackEntry::new("Go")]);

    // the form is ready for the next record
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.draft().first_name.is_empty());
    assert_eq!(form.draft().tech_stack.len(), 1);
}

#[tokio::test]
async fn any_missing_required_field_blocks_the_display() {
    type Clear = fn(&mut FormController);
    let clears: [(FieldPath, Clear); 7] = [
        (FieldPath::FirstName, |f| f.set_first_name("")),
        (FieldPath::LastName, |f| f.set_last_name("")),
        (FieldPath::Email, |f| f.set_email("")),
        (FieldPath::PhoneNumber, |f| {
            f.set_phone_number("");
        }),
        (FieldPath::Gender, |f| f.set_gender("")),
        (FieldPath::DateOfBirth, |f| f.set_date_of_birth("")),
        (FieldPath::TechStackName(0), |f| f.set_tech_name(0, "").unwrap()),
    ];

    for (path, clear) in clears {
        let mut form = FormController::new(quick_config());
        let mut sink = RecordingSink::default();

        form.set_first_name("Ann");
        form.set_last_name("Lee");
        form.set_email("ann@x.com");
        form.set_phone_number("1234567890");
        form.set_gender("other");
        form.set_date_of_birth("1990-01-15");
        form.set_tech_name(0, "Go").unwrap();
        clear(&mut form);

        let result = form.submit(&mut sink, tokio::time::sleep).await;
        let errors = match result {
            Err(FormError::Validation(errors)) => errors,
            other => panic!("expected validation failure for {path}, got {other:?}"),
        };
        assert!(errors.contains(path), "{path} should be reported");
        assert!(sink.received.is_empty());
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}

#[test]
fn display_is_blank_until_first_submission() {
    let display = DisplayState::new("+91");
    assert!(display.current().is_none());
    assert!(display.rows().iter().all(|row| row.value.is_empty()));
}

#[test]
fn pending_submission_cannot_be_duplicated() {
    let mut form = FormController::new(quick_config());
    let mut sink = RecordingSink::default();

    form.set_first_name("Ann");
    form.set_last_name("Lee");
    form.set_email("ann@x.com");
    form.set_phone_number("+1 (234) 567-890");
    form.set_gender("male");
    form.set_date_of_birth("1990-01-15");
    form.set_tech_name(0, "Go").unwrap();
    assert_eq!(form.draft().phone_number, "1234567890");

    let pending = form.begin_submit().unwrap();
    assert!(matches!(form.begin_submit(), Err(FormError::SubmissionInFlight)));
    form.complete_submission(pending, &mut sink);

    assert_eq!(sink.received.len(), 1);
    assert_eq!(sink.received[0].gender, Gender::Male);
}
