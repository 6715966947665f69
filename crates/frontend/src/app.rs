use crate::domain::a001_product_configurator::ui::details::ProductConfigurator;
use crate::shared::config::Config;
use contracts::domain::a001_product_configurator::PlaceOrderRequest;
use leptos::prelude::*;

/// Default order collaborator: log the payload and confirm to the user.
fn place_order(request: PlaceOrderRequest, success_message: &str) {
    match serde_json::to_string(&request) {
        Ok(json) => log::info!("Order placed: {}", json),
        Err(e) => log::error!("Failed to serialize order {}: {}", request.request_id, e),
    }
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(success_message);
    }
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    let success_message = config.form.success_message;
    let on_submit = Callback::new(move |request: PlaceOrderRequest| {
        place_order(request, &success_message)
    });

    let title = config.form.title;

    view! {
        <ProductConfigurator title=title on_submit=on_submit />
    }
}
