use shared::TechStack;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::error_message::ErrorMessage;

#[derive(Properties, PartialEq)]
pub struct TechStackListProps {
    pub entries: TechStack,
    /// One slot per entry, aligned by index
    pub errors: Vec<Option<String>>,
    pub disabled: bool,
    pub on_name_change: Callback<(usize, String)>,
    pub on_append: Callback<()>,
    pub on_remove: Callback<usize>,
}

#[function_component(TechStackList)]
pub fn tech_stack_list(props: &TechStackListProps) -> Html {
    let on_add_click = {
        let on_append = props.on_append.clone();
        Callback::from(move |_: MouseEvent| on_append.emit(()))
    };

    html! {
        <div class="form-group tech-stack">
            <div class="tech-stack-header">
                <label>{"Tech Stack"}</label>
                <button
                    type="button"
                    class="btn btn-icon"
                    aria-label="Add tech stack"
                    onclick={on_add_click}
                    disabled={props.disabled}
                >
                    {"+"}
                </button>
            </div>

            {for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_input = {
                    let on_name_change = props.on_name_change.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_name_change.emit((index, input.value()));
                    })
                };
                let error = props.errors.get(index).cloned().flatten();

                html! {
                    <div class="tech-stack-row" key={entry.id.to_string()}>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Tech stack"
                            value={entry.name.clone()}
                            oninput={on_input}
                            disabled={props.disabled}
                        />
                        // The first entry never gets a remove control.
                        {if props.entries.can_remove(index) {
                            let on_remove = props.on_remove.clone();
                            html! {
                                <button
                                    type="button"
                                    class="btn btn-icon"
                                    aria-label="Remove tech stack"
                                    onclick={Callback::from(move |_: MouseEvent| on_remove.emit(index))}
                                    disabled={props.disabled}
                                >
                                    {"🗑"}
                                </button>
                            }
                        } else { html! {} }}
                        <ErrorMessage message={error} />
                    </div>
                }
            })}
        </div>
    }
}
