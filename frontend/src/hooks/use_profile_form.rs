use gloo::timers::future::TimeoutFuture;
use shared::{
    DisplaySink, FieldPath, FormConfig, FormController, FormError, ProfileDraft, SubmittedProfile,
    ValidationErrors,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Pushes accepted profiles into a Yew callback
pub struct CallbackSink(pub Callback<SubmittedProfile>);

impl DisplaySink for CallbackSink {
    fn update_display(&mut self, record: SubmittedProfile) {
        self.0.emit(record);
    }
}

/// Render snapshot of the controller
#[derive(Clone, PartialEq)]
pub struct ProfileFormState {
    pub draft: ProfileDraft,
    pub errors: ValidationErrors,
    pub busy: bool,
    pub toast: Option<String>,
    pub config: FormConfig,
}

impl ProfileFormState {
    pub fn error(&self, path: FieldPath) -> Option<String> {
        self.errors.get(path).map(str::to_string)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseProfileFormActions {
    pub set_field: Callback<(FieldPath, String)>,
    pub append_tech: Callback<()>,
    pub remove_tech: Callback<usize>,
    pub submit: Callback<()>,
    pub dismiss_toast: Callback<()>,
}

pub struct UseProfileFormResult {
    pub state: ProfileFormState,
    pub actions: UseProfileFormActions,
}

/// Hook owning the form controller for one form instance
///
/// The controller lives in a `RefCell` so the submit timer can finish the
/// submission after the delay; every mutation forces a re-render.
#[hook]
pub fn use_profile_form(
    config: FormConfig,
    on_submitted: Callback<SubmittedProfile>,
) -> UseProfileFormResult {
    let controller = use_mut_ref(|| FormController::new(config));
    let toast = use_state(|| Option::<String>::None);
    let trigger = use_force_update();

    let set_field = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |(path, value): (FieldPath, String), _| {
            {
                let mut form = controller.borrow_mut();
                match path {
                    FieldPath::FirstName => form.set_first_name(value),
                    FieldPath::LastName => form.set_last_name(value),
                    FieldPath::Email => form.set_email(value),
                    FieldPath::PhoneNumber => {
                        form.set_phone_number(&value);
                    }
                    FieldPath::Gender => form.set_gender(value),
                    FieldPath::DateOfBirth => form.set_date_of_birth(value),
                    FieldPath::TechStackName(index) => {
                        if let Err(e) = form.set_tech_name(index, value) {
                            Logger::warn_with_component("use_profile_form", &e.to_string());
                        }
                    }
                }
            }
            trigger.force_update();
        })
    };

    let append_tech = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |_: (), _| {
            controller.borrow_mut().append_tech();
            trigger.force_update();
        })
    };

    let remove_tech = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |index: usize, _| {
            let result = controller.borrow_mut().remove_tech(index);
            if let Err(e) = result {
                Logger::warn_with_component("use_profile_form", &e.to_string());
            }
            trigger.force_update();
        })
    };

    let submit = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        let toast = toast.clone();
        use_callback(on_submitted, move |_: (), on_submitted| {
            let result = controller.borrow_mut().begin_submit();
            trigger.force_update();

            let pending = match result {
                Ok(pending) => pending,
                Err(FormError::Validation(errors)) => {
                    Logger::info_with_component(
                        "use_profile_form",
                        &format!("{} field(s) need attention", errors.len()),
                    );
                    return;
                }
                Err(e) => {
                    Logger::warn_with_component("use_profile_form", &e.to_string());
                    return;
                }
            };

            toast.set(None);
            let controller = controller.clone();
            let trigger = trigger.clone();
            let toast = toast.clone();
            let mut sink = CallbackSink(on_submitted.clone());
            spawn_local(async move {
                TimeoutFuture::new(pending.delay_ms()).await;
                // Emitting only schedules the display's render, so the borrow
                // is released before anything reads the controller again.
                let receipt = controller.borrow_mut().complete_submission(pending, &mut sink);
                toast.set(Some(receipt.message));
                trigger.force_update();
            });
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        use_callback((), move |_: (), _| toast.set(None))
    };

    let state = {
        let form = controller.borrow();
        ProfileFormState {
            draft: form.draft().clone(),
            errors: form.errors().clone(),
            busy: form.is_busy(),
            toast: (*toast).clone(),
            config: form.config().clone(),
        }
    };

    let actions = UseProfileFormActions {
        set_field,
        append_tech,
        remove_tech,
        submit,
        dismiss_toast,
    };

    UseProfileFormResult { state, actions }
}
