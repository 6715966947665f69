use contracts::domain::a001_product_configurator::{
    FormView, PlaceOrderRequest, Selection, SelectionAction, SelectionError,
};
use leptos::prelude::*;

/// ViewModel for the product configurator form
#[derive(Clone, Copy)]
pub struct ProductConfiguratorViewModel {
    pub selection: RwSignal<Selection>,
    pub error: RwSignal<Option<String>>,
}

impl ProductConfiguratorViewModel {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(Selection::new()),
            error: RwSignal::new(None),
        }
    }

    /// Derived visibility and summary, tracked
    pub fn form_view(&self) -> FormView {
        self.selection.with(FormView::of)
    }

    pub fn device_code(&self) -> String {
        self.selection
            .with(|s| s.device_type.map(|d| d.code().to_string()))
            .unwrap_or_default()
    }

    pub fn manufacturer(&self) -> String {
        self.selection
            .with(|s| s.manufacturer.clone())
            .unwrap_or_default()
    }

    pub fn spec_value(&self, name: &str) -> String {
        self.selection
            .with(|s| s.spec_value(name).map(str::to_string))
            .unwrap_or_default()
    }

    pub fn set_device_type(&self, code: String) {
        match SelectionAction::device_from_code(&code) {
            Ok(action) => self.dispatch(action),
            Err(e) => self.reject(e),
        }
    }

    pub fn set_manufacturer(&self, name: String) {
        self.dispatch(SelectionAction::SetManufacturer(name));
    }

    pub fn set_spec_field(&self, name: &str, value: String) {
        self.dispatch(SelectionAction::spec_field(name, value));
    }

    /// Hand a complete selection to `on_submit` and start over
    pub fn submit_command(&self, on_submit: Callback<PlaceOrderRequest>) {
        match self.selection.get_untracked().submit() {
            Ok(order) => {
                let request = PlaceOrderRequest::new(order);
                log::debug!("Submitting order request {}", request.request_id);
                on_submit.run(request);
                self.dispatch(SelectionAction::Reset);
            }
            Err(e) => self.reject(e),
        }
    }

    fn dispatch(&self, action: SelectionAction) {
        let current = self.selection.get_untracked();
        match current.apply(action) {
            Ok(next) => {
                log::debug!("Selection is now {:?}", next.stage());
                self.selection.set(next);
                self.error.set(None);
            }
            Err(e) => self.reject(e),
        }
    }

    fn reject(&self, e: SelectionError) {
        log::warn!("Rejected selection change: {}", e);
        self.error.set(Some(e.to_string()));
    }
}

impl Default for ProductConfiguratorViewModel {
    fn default() -> Self {
        Self::new()
    }
}
