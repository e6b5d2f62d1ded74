use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub duration_ms: u32,
    pub on_dismiss: Callback<()>,
}

/// Success notification that hides itself after `duration_ms`
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.duration_ms;
        use_effect_with(props.message.clone(), move |message| {
            // Dropping the timeout cancels it, so a newer message restarts the clock.
            let timeout = message
                .is_some()
                .then(|| Timeout::new(duration_ms, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    match props.message.as_ref() {
        Some(message) => html! {
            <div class="toast toast-success" role="status" onclick={on_click}>
                <span class="toast-icon">{"✓"}</span>
                <span class="toast-message">{message}</span>
            </div>
        },
        None => html! {},
    }
}
