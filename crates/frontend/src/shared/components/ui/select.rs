use crate::shared::icons::icon;
use leptos::prelude::*;

/// Closed-choice select with a leading empty placeholder option
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty when nothing is chosen
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, receives the raw option value
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the empty option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Select".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <div class="form__select-wrap">
                <select
                    id=select_id
                    class="form__select"
                    required=required
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_value(&ev));
                        }
                    }
                >
                    <option value="" selected=move || value.get().is_empty()>
                        {placeholder_text}
                    </option>
                    <For
                        each=move || options.get()
                        key=|(val, _)| val.clone()
                        children=move |(val, label)| {
                            let val_clone = val.clone();
                            let is_selected = move || value.get() == val_clone;
                            view! {
                                <option value=val selected=is_selected>
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
                <span class="form__select-icon">{icon("chevron")}</span>
            </div>
        </div>
    }
}
