use contracts::domain::a001_product_configurator::{FormView, Selection};
use leptos::prelude::*;

/// Read-only "Your Selection" panel, shown once a manufacturer is chosen
#[component]
pub fn SelectionSummary(selection: RwSignal<Selection>) -> impl IntoView {
    let form_view = move || selection.with(FormView::of);

    view! {
        <Show when=move || form_view().show_summary>
            <div class="selection-summary">
                <h3>{"Your Selection"}</h3>
                <div class="selection-summary__grid">
                    <div class="selection-summary__cell">
                        <p class="selection-summary__caption">{"Device Type"}</p>
                        <p>{move || selection.with(|s| s.device_type.map(|d| d.display_name()).unwrap_or_default())}</p>
                    </div>
                    <div class="selection-summary__cell">
                        <p class="selection-summary__caption">{"Manufacturer"}</p>
                        <p>{move || selection.with(|s| s.manufacturer.clone().unwrap_or_default())}</p>
                    </div>
                </div>

                <Show when=move || form_view().show_summary_specs>
                    <div class="selection-summary__specs">
                        <p class="selection-summary__caption">{"Specifications"}</p>
                        <ul>
                            <For
                                each=move || form_view().summary_rows
                                key=|row| row.clone()
                                children=|(label, value): (&'static str, String)| view! {
                                    <li>
                                        <span>{label}{":"}</span>
                                        <span class="selection-summary__value">{value}</span>
                                    </li>
                                }
                            />
                        </ul>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
