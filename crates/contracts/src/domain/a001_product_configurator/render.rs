//! Pure derivation of what the form shows for a given selection.

use super::catalog::{self, FieldDescriptor};
use super::selection::Selection;

/// Visibility flags and summary content for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub show_manufacturer: bool,
    pub show_specifications: bool,
    pub show_submit: bool,
    pub submit_enabled: bool,
    pub show_summary: bool,
    pub show_summary_specs: bool,
    pub device_icon: Option<&'static str>,
    pub manufacturer_options: &'static [&'static str],
    pub spec_fields: &'static [FieldDescriptor],
    /// `(label, value)` for every set specification, in catalog order
    pub summary_rows: Vec<(&'static str, String)>,
}

impl FormView {
    pub fn of(selection: &Selection) -> Self {
        let device = selection.device_type;
        let has_manufacturer = device.is_some() && selection.manufacturer.is_some();
        let spec_fields = device.map(catalog::spec_fields_for).unwrap_or(&[]);

        let summary_rows = spec_fields
            .iter()
            .filter_map(|f| selection.spec_value(f.name).map(|v| (f.label, v.to_string())))
            .collect::<Vec<_>>();

        Self {
            show_manufacturer: device.is_some(),
            show_specifications: has_manufacturer,
            show_submit: has_manufacturer,
            submit_enabled: selection.is_complete(),
            show_summary: has_manufacturer,
            show_summary_specs: has_manufacturer && !summary_rows.is_empty(),
            device_icon: device.map(|d| d.icon_name()),
            manufacturer_options: device.map(catalog::manufacturers_for).unwrap_or(&[]),
            spec_fields: if has_manufacturer { spec_fields } else { &[] },
            summary_rows,
        }
    }
}
