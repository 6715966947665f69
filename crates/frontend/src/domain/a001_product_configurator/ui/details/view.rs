use super::view_model::ProductConfiguratorViewModel;
use crate::domain::a001_product_configurator::ui::summary::SelectionSummary;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::domain::a001_product_configurator::catalog;
use contracts::domain::a001_product_configurator::{FieldDescriptor, PlaceOrderRequest};
use leptos::prelude::*;

fn to_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

#[component]
pub fn ProductConfigurator(
    #[prop(into)] title: String,
    on_submit: Callback<PlaceOrderRequest>,
) -> impl IntoView {
    let vm = ProductConfiguratorViewModel::new();

    let device_options = to_options(catalog::device_types().iter().map(|d| d.code()));

    view! {
        <div class="details-container product-configurator">
            <div class="details-header">
                <h2>{title}</h2>
                <div class="product-configurator__icon">
                    {move || vm.form_view().device_icon.map(icon)}
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="product-configurator__columns">
                <form
                    class="details-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.submit_command(on_submit);
                    }
                >
                    <Select
                        id="device_type".to_string()
                        label="Device Type".to_string()
                        placeholder="Select a device type".to_string()
                        required=true
                        value=Signal::derive(move || vm.device_code())
                        options=Signal::derive(move || device_options.clone())
                        on_change=Callback::new(move |code: String| vm.set_device_type(code))
                    />

                    <Show when=move || vm.form_view().show_manufacturer>
                        <Select
                            id="manufacturer".to_string()
                            label="Manufacturer".to_string()
                            placeholder="Select a manufacturer".to_string()
                            required=true
                            value=Signal::derive(move || vm.manufacturer())
                            options=Signal::derive(move || {
                                to_options(vm.form_view().manufacturer_options.iter().copied())
                            })
                            on_change=Callback::new(move |name: String| vm.set_manufacturer(name))
                        />
                    </Show>

                    <Show when=move || vm.form_view().show_specifications>
                        <div class="product-configurator__specs">
                            <h3>{icon("bolt")}{"Specifications"}</h3>
                            <For
                                each=move || vm.form_view().spec_fields.to_vec()
                                key=|field: &FieldDescriptor| *field
                                children=move |field: FieldDescriptor| {
                                    view! {
                                        <div data-kind=field.kind.as_str()>
                                            <Select
                                                id=field.name.to_string()
                                                label=field.label.to_string()
                                                placeholder=format!("Select {}", field.label)
                                                required=true
                                                value=Signal::derive(move || vm.spec_value(field.name))
                                                options=Signal::derive(move || to_options(field.options.iter().copied()))
                                                on_change=Callback::new(move |value: String| vm.set_spec_field(field.name, value))
                                            />
                                        </div>
                                    }
                                }
                            />
                            <div class="details-actions">
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || !vm.form_view().submit_enabled
                                >
                                    {"Place Order"}
                                    {icon("arrow-right")}
                                </button>
                            </div>
                        </div>
                    </Show>
                </form>

                <SelectionSummary selection=vm.selection />
            </div>
        </div>
    }
}
