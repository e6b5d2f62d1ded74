use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: Option<String>,
}

/// Inline validation message rendered beneath a field
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    match props.message.as_ref() {
        Some(message) => html! { <p class="error-message">{message}</p> },
        None => html! {},
    }
}
