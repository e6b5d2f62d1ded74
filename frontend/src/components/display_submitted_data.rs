use shared::DisplayState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DisplaySubmittedDataProps {
    pub display: DisplayState,
}

/// Text transform applied to a row's value, by label
fn value_class(label: &str) -> &'static str {
    match label {
        "First Name" | "Last Name" | "Tech Stack" => "display-value uppercase",
        "Email Address" => "display-value lowercase",
        _ => "display-value",
    }
}

/// Read-only panel showing the most recently submitted profile
#[function_component(DisplaySubmittedData)]
pub fn display_submitted_data(props: &DisplaySubmittedDataProps) -> Html {
    html! {
        <section class="submitted-data">
            {for props.display.rows().into_iter().map(|row| html! {
                <p class="display-row">
                    {format!("{}: ", row.label)}
                    <span class={value_class(row.label)}>{row.value}</span>
                </p>
            })}
        </section>
    }
}
