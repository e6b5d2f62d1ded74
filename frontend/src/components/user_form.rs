use shared::{sanitize_phone_input, FieldPath, FormConfig, Gender, SubmittedProfile};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::error_message::ErrorMessage;
use super::tech_stack_list::TechStackList;
use super::toast::Toast;
use crate::hooks::use_profile_form::use_profile_form;
use crate::services::date_utils::get_current_date;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    pub config: FormConfig,
    pub on_submitted: Callback<SubmittedProfile>,
}

#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let form = use_profile_form(props.config.clone(), props.on_submitted.clone());
    let state = form.state;
    let actions = form.actions;
    let disabled = state.busy;

    // Text inputs share one handler shape: read the value, hand it to the controller.
    let text_input = |path: FieldPath| {
        let set_field = actions.set_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field.emit((path, input.value()));
        })
    };

    let on_phone_input = {
        let set_field = actions.set_field.clone();
        let digits = state.config.phone_digits;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let sanitized = sanitize_phone_input(&input.value(), digits);
            // Write back directly so rejected keystrokes never show up.
            input.set_value(&sanitized);
            set_field.emit((FieldPath::PhoneNumber, sanitized));
        })
    };

    let on_gender_change = {
        let set_field = actions.set_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field.emit((FieldPath::Gender, select.value()));
        })
    };

    let on_date_change = {
        let set_field = actions.set_field.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field.emit((FieldPath::DateOfBirth, input.value()));
        })
    };

    let on_tech_name_change = {
        let set_field = actions.set_field.clone();
        Callback::from(move |(index, name): (usize, String)| {
            set_field.emit((FieldPath::TechStackName(index), name));
        })
    };

    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let tech_errors: Vec<Option<String>> = (0..state.draft.tech_stack.len())
        .map(|index| state.error(FieldPath::TechStackName(index)))
        .collect();
    let toast_ms = u32::try_from(state.config.toast_duration_ms).unwrap_or(u32::MAX);

    html! {
        <div class="user-form-container">
            <Toast
                message={state.toast.clone()}
                duration_ms={toast_ms}
                on_dismiss={actions.dismiss_toast.clone()}
            />

            <form class="user-form" onsubmit={on_submit} novalidate=true>
                <section class="form-section">
                    <h1 class="section-title">{"Basic Details"}</h1>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="firstName">{"First Name"}</label>
                            <input
                                id="firstName"
                                type="text"
                                class="form-input"
                                placeholder="Enter First Name"
                                value={state.draft.first_name.clone()}
                                oninput={text_input(FieldPath::FirstName)}
                                disabled={disabled}
                            />
                            <ErrorMessage message={state.error(FieldPath::FirstName)} />
                        </div>

                        <div class="form-group">
                            <label for="lastName">{"Last Name"}</label>
                            <input
                                id="lastName"
                                type="text"
                                class="form-input"
                                placeholder="Enter Last Name"
                                value={state.draft.last_name.clone()}
                                oninput={text_input(FieldPath::LastName)}
                                disabled={disabled}
                            />
                            <ErrorMessage message={state.error(FieldPath::LastName)} />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="email">{"Email Address"}</label>
                            <input
                                id="email"
                                type="email"
                                class="form-input"
                                placeholder="Enter E-mail"
                                value={state.draft.email.clone()}
                                oninput={text_input(FieldPath::Email)}
                                disabled={disabled}
                            />
                            <ErrorMessage message={state.error(FieldPath::Email)} />
                        </div>

                        <div class="form-group">
                            <label for="phoneNumber">{"Phone Number"}</label>
                            <div class="phone-input">
                                <span class="country-code">{state.config.country_code.clone()}</span>
                                <input
                                    id="phoneNumber"
                                    type="tel"
                                    class="form-input"
                                    placeholder="Enter Phone Number"
                                    value={state.draft.phone_number.clone()}
                                    oninput={on_phone_input}
                                    disabled={disabled}
                                />
                            </div>
                            <ErrorMessage message={state.error(FieldPath::PhoneNumber)} />
                        </div>
                    </div>
                </section>

                <section class="form-section">
                    <h1 class="section-title">{"Other Information"}</h1>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="gender">{"Gender"}</label>
                            <select
                                id="gender"
                                class="form-input"
                                onchange={on_gender_change}
                                disabled={disabled}
                            >
                                <option value="" selected={state.draft.gender.is_empty()}>
                                    {"Select Gender"}
                                </option>
                                {for Gender::ALL.iter().map(|gender| html! {
                                    <option
                                        value={gender.as_str()}
                                        selected={state.draft.gender == gender.as_str()}
                                    >
                                        {gender.label()}
                                    </option>
                                })}
                            </select>
                            <ErrorMessage message={state.error(FieldPath::Gender)} />
                        </div>

                        <div class="form-group">
                            <label for="dateOfBirth">{"Date of Birth"}</label>
                            <input
                                id="dateOfBirth"
                                type="date"
                                class="form-input"
                                max={get_current_date()}
                                value={state.draft.date_of_birth.clone()}
                                onchange={on_date_change}
                                disabled={disabled}
                            />
                            <ErrorMessage message={state.error(FieldPath::DateOfBirth)} />
                        </div>
                    </div>

                    <TechStackList
                        entries={state.draft.tech_stack.clone()}
                        errors={tech_errors}
                        disabled={disabled}
                        on_name_change={on_tech_name_change}
                        on_append={actions.append_tech.clone()}
                        on_remove={actions.remove_tech.clone()}
                    />
                </section>

                <button type="submit" class="btn btn-primary submit-btn" disabled={disabled}>
                    {if state.busy {
                        html! { <><span class="spinner"></span>{"Submitting..."}</> }
                    } else {
                        html! { "Submit" }
                    }}
                </button>
            </form>
        </div>
    }
}
