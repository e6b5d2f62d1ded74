use shared::{DisplaySink, DisplayState, FormConfig, SubmittedProfile};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::display_submitted_data::DisplaySubmittedData;
use components::user_form::UserForm;
use services::config::load_config;
use services::logging::{self, Logger};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: FormConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let display = use_state(|| DisplayState::new(props.config.country_code.clone()));

    // One-way push from the form into the display panel
    let on_submitted = {
        let display = display.clone();
        Callback::from(move |record: SubmittedProfile| {
            if let Ok(json) = serde_json::to_string(&record) {
                Logger::debug_with_component("App", &json);
            }
            let mut next = (*display).clone();
            next.update_display(record);
            display.set(next);
        })
    };

    html! {
        <main class="app">
            <UserForm config={props.config.clone()} on_submitted={on_submitted} />
            <DisplaySubmittedData display={(*display).clone()} />
        </main>
    }
}

fn main() {
    let config = load_config();
    if let Err(e) = logging::init(config.log_level_filter()) {
        gloo::console::error!(e.to_string());
    }
    Logger::info_with_component("App", "starting profile form");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
