use super::catalog;
use super::order::SubmittedOrder;
use crate::enums::DeviceType;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// State
// ============================================================================

/// In-progress choices of the configurator form.
///
/// `manufacturer` is only set when `device_type` is set and lists it;
/// `specifications` only holds fields declared for `device_type`, each with
/// one of the field's options. Every transition goes through [`Selection::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub device_type: Option<DeviceType>,
    pub manufacturer: Option<String>,
    pub specifications: BTreeMap<String, String>,
}

/// Where the selection stands in the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    Empty,
    DeviceChosen,
    ManufacturerChosen,
    SpecsPartial,
    SpecsComplete,
}

/// A single user choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// `None` resets the whole form
    SetDeviceType(Option<DeviceType>),
    /// Empty name resets manufacturer and specifications
    SetManufacturer(String),
    /// Empty value clears the field
    SetSpecField { name: String, value: String },
    Reset,
}

impl SelectionAction {
    /// Build a device type action from a raw `<select>` value
    pub fn device_from_code(code: &str) -> Result<Self, SelectionError> {
        if code.is_empty() {
            return Ok(Self::SetDeviceType(None));
        }
        DeviceType::from_code(code)
            .map(|d| Self::SetDeviceType(Some(d)))
            .ok_or_else(|| SelectionError::UnknownDeviceType(code.to_string()))
    }

    pub fn spec_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetSpecField {
            name: name.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownDeviceType(String),
    NoDeviceType,
    UnknownManufacturer { device: DeviceType, name: String },
    NoManufacturer,
    UnknownField { device: DeviceType, field: String },
    InvalidOption { field: String, value: String },
    Incomplete { missing: Vec<String> },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDeviceType(code) => write!(f, "Unknown device type: {}", code),
            Self::NoDeviceType => write!(f, "Select a device type first"),
            Self::UnknownManufacturer { device, name } => {
                write!(f, "{} is not offered for {}", name, device)
            }
            Self::NoManufacturer => write!(f, "Select a manufacturer first"),
            Self::UnknownField { device, field } => {
                write!(f, "{} has no specification '{}'", device, field)
            }
            Self::InvalidOption { field, value } => {
                write!(f, "'{}' is not a valid option for {}", value, field)
            }
            Self::Incomplete { missing } => {
                write!(f, "Required fields are empty: {}", missing.join(", "))
            }
        }
    }
}

impl std::error::Error for SelectionError {}

// ============================================================================
// Transitions
// ============================================================================

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce `action` onto the current selection. On error `self` is the
    /// state to keep.
    pub fn apply(&self, action: SelectionAction) -> Result<Selection, SelectionError> {
        match action {
            SelectionAction::Reset | SelectionAction::SetDeviceType(None) => Ok(Selection::new()),
            SelectionAction::SetDeviceType(Some(device)) => Ok(Selection {
                device_type: Some(device),
                manufacturer: None,
                specifications: BTreeMap::new(),
            }),
            SelectionAction::SetManufacturer(name) => self.with_manufacturer(name),
            SelectionAction::SetSpecField { name, value } => self.with_spec_field(name, value),
        }
    }

    fn with_manufacturer(&self, name: String) -> Result<Selection, SelectionError> {
        let device = self.device_type.ok_or(SelectionError::NoDeviceType)?;
        if !name.is_empty() && !catalog::is_manufacturer_of(device, &name) {
            return Err(SelectionError::UnknownManufacturer { device, name });
        }
        Ok(Selection {
            device_type: Some(device),
            manufacturer: if name.is_empty() { None } else { Some(name) },
            specifications: BTreeMap::new(),
        })
    }

    fn with_spec_field(&self, name: String, value: String) -> Result<Selection, SelectionError> {
        let device = self.device_type.ok_or(SelectionError::NoDeviceType)?;
        if self.manufacturer.is_none() {
            return Err(SelectionError::NoManufacturer);
        }
        let field = catalog::field_for(device, &name).ok_or_else(|| {
            SelectionError::UnknownField {
                device,
                field: name.clone(),
            }
        })?;

        let mut next = self.clone();
        if value.is_empty() {
            next.specifications.remove(field.name);
        } else if field.has_option(&value) {
            next.specifications.insert(field.name.to_string(), value);
        } else {
            return Err(SelectionError::InvalidOption { field: name, value });
        }
        Ok(next)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn stage(&self) -> SelectionStage {
        match (self.device_type, &self.manufacturer) {
            (None, _) => SelectionStage::Empty,
            (Some(_), None) => SelectionStage::DeviceChosen,
            (Some(_), Some(_)) if self.specifications.is_empty() => {
                SelectionStage::ManufacturerChosen
            }
            (Some(_), Some(_)) if self.missing_fields().is_empty() => {
                SelectionStage::SpecsComplete
            }
            (Some(_), Some(_)) => SelectionStage::SpecsPartial,
        }
    }

    /// Declared fields of the current device type that are still unset,
    /// in catalog order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.device_type
            .map(|device| {
                catalog::spec_fields_for(device)
                    .iter()
                    .filter(|f| !self.specifications.contains_key(f.name))
                    .map(|f| f.name)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.device_type.is_some() && self.manufacturer.is_some() && self.missing_fields().is_empty()
    }

    pub fn spec_value(&self, name: &str) -> Option<&str> {
        self.specifications.get(name).map(String::as_str)
    }

    /// Freeze a complete selection into the payload sent to the backend
    pub fn submit(&self) -> Result<SubmittedOrder, SelectionError> {
        let device_type = self.device_type.ok_or(SelectionError::NoDeviceType)?;
        let manufacturer = self.manufacturer.clone().ok_or(SelectionError::NoManufacturer)?;
        if !catalog::is_manufacturer_of(device_type, &manufacturer) {
            return Err(SelectionError::UnknownManufacturer {
                device: device_type,
                name: manufacturer,
            });
        }
        // Fields are public, so re-check what `apply` would have enforced
        for (name, value) in &self.specifications {
            let field = catalog::field_for(device_type, name).ok_or_else(|| {
                SelectionError::UnknownField {
                    device: device_type,
                    field: name.clone(),
                }
            })?;
            if !field.has_option(value) {
                return Err(SelectionError::InvalidOption {
                    field: name.clone(),
                    value: value.clone(),
                });
            }
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SelectionError::Incomplete {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }
        Ok(SubmittedOrder {
            device_type,
            manufacturer,
            specifications: self.specifications.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(actions: Vec<SelectionAction>) -> Selection {
        actions
            .into_iter()
            .fold(Selection::new(), |s, a| s.apply(a).unwrap())
    }

    fn laptop_dell() -> Selection {
        apply_all(vec![
            SelectionAction::SetDeviceType(Some(DeviceType::Laptop)),
            SelectionAction::SetManufacturer("Dell".into()),
        ])
    }

    fn complete_laptop() -> Selection {
        let mut s = laptop_dell();
        for (name, value) in [
            ("processor", "Intel i7"),
            ("ram", "16"),
            ("storage", "512"),
            ("screenSize", "15.6"),
        ] {
            s = s.apply(SelectionAction::spec_field(name, value)).unwrap();
        }
        s
    }

    #[test]
    fn test_device_change_clears_downstream() {
        let starts = vec![Selection::new(), laptop_dell(), complete_laptop()];
        for start in starts {
            for device in DeviceType::all() {
                let next = start
                    .apply(SelectionAction::SetDeviceType(Some(device)))
                    .unwrap();
                assert_eq!(next.device_type, Some(device));
                assert_eq!(next.manufacturer, None);
                assert!(next.specifications.is_empty());
                assert_eq!(next.stage(), SelectionStage::DeviceChosen);
            }
        }
    }

    #[test]
    fn test_manufacturer_change_clears_specs() {
        let start = complete_laptop();
        let next = start
            .apply(SelectionAction::SetManufacturer("Apple".into()))
            .unwrap();
        assert_eq!(next.device_type, Some(DeviceType::Laptop));
        assert_eq!(next.manufacturer.as_deref(), Some("Apple"));
        assert!(next.specifications.is_empty());
        assert_eq!(next.stage(), SelectionStage::ManufacturerChosen);

        // Re-selecting the same manufacturer also clears
        let same = start
            .apply(SelectionAction::SetManufacturer("Dell".into()))
            .unwrap();
        assert!(same.specifications.is_empty());
    }

    #[test]
    fn test_empty_values_reset() {
        let cleared = complete_laptop()
            .apply(SelectionAction::SetManufacturer(String::new()))
            .unwrap();
        assert_eq!(cleared.stage(), SelectionStage::DeviceChosen);

        let reset = complete_laptop().apply(SelectionAction::device_from_code("").unwrap());
        assert_eq!(reset.unwrap(), Selection::new());

        let unset = complete_laptop()
            .apply(SelectionAction::spec_field("ram", ""))
            .unwrap();
        assert_eq!(unset.spec_value("ram"), None);
        assert_eq!(unset.specifications.len(), 3);
        assert_eq!(unset.missing_fields(), vec!["ram"]);
    }

    #[test]
    fn test_spec_field_preserves_others() {
        let s = laptop_dell()
            .apply(SelectionAction::spec_field("processor", "Intel i5"))
            .unwrap()
            .apply(SelectionAction::spec_field("ram", "32"))
            .unwrap()
            .apply(SelectionAction::spec_field("processor", "AMD Ryzen 7"))
            .unwrap();
        assert_eq!(s.spec_value("processor"), Some("AMD Ryzen 7"));
        assert_eq!(s.spec_value("ram"), Some("32"));
        assert_eq!(s.specifications.len(), 2);
        assert_eq!(s.stage(), SelectionStage::SpecsPartial);
    }

    #[test]
    fn test_rejected_actions() {
        let empty = Selection::new();
        assert_eq!(
            empty.apply(SelectionAction::SetManufacturer("Dell".into())),
            Err(SelectionError::NoDeviceType)
        );

        let mouse = empty
            .apply(SelectionAction::SetDeviceType(Some(DeviceType::Mouse)))
            .unwrap();
        assert_eq!(
            mouse.apply(SelectionAction::SetManufacturer("Dell".into())),
            Err(SelectionError::UnknownManufacturer {
                device: DeviceType::Mouse,
                name: "Dell".into()
            })
        );
        assert_eq!(
            mouse.apply(SelectionAction::spec_field("dpi", "800")),
            Err(SelectionError::NoManufacturer)
        );

        let dell = laptop_dell();
        assert_eq!(
            dell.apply(SelectionAction::spec_field("dpi", "800")),
            Err(SelectionError::UnknownField {
                device: DeviceType::Laptop,
                field: "dpi".into()
            })
        );
        assert_eq!(
            dell.apply(SelectionAction::spec_field("ram", "12")),
            Err(SelectionError::InvalidOption {
                field: "ram".into(),
                value: "12".into()
            })
        );

        assert_eq!(
            SelectionAction::device_from_code("Tablet"),
            Err(SelectionError::UnknownDeviceType("Tablet".into()))
        );
    }

    #[test]
    fn test_submit_requires_every_field() {
        assert_eq!(Selection::new().submit(), Err(SelectionError::NoDeviceType));

        let partial = laptop_dell()
            .apply(SelectionAction::spec_field("ram", "16"))
            .unwrap();
        assert!(!partial.is_complete());
        match partial.submit() {
            Err(SelectionError::Incomplete { missing }) => {
                assert_eq!(missing, vec!["processor", "storage", "screenSize"]);
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }

        let complete = complete_laptop();
        assert!(complete.is_complete());
        assert_eq!(complete.stage(), SelectionStage::SpecsComplete);
        let order = complete.submit().unwrap();
        assert_eq!(order.device_type, DeviceType::Laptop);
        assert_eq!(order.manufacturer, "Dell");
        assert_eq!(order.specifications.len(), 4);
    }

    #[test]
    fn test_submit_rechecks_catalog() {
        let mut specifications = BTreeMap::new();
        specifications.insert("dpi".to_string(), "800".to_string());
        specifications.insert("connectivity".to_string(), "Wired".to_string());
        specifications.insert("buttons".to_string(), "5".to_string());
        let valid = Selection {
            device_type: Some(DeviceType::Mouse),
            manufacturer: Some("Razer".into()),
            specifications,
        };
        assert!(valid.submit().is_ok());

        let mut wrong_maker = valid.clone();
        wrong_maker.manufacturer = Some("Dell".into());
        assert_eq!(
            wrong_maker.submit(),
            Err(SelectionError::UnknownManufacturer {
                device: DeviceType::Mouse,
                name: "Dell".into()
            })
        );

        let mut bad_option = valid.clone();
        bad_option
            .specifications
            .insert("buttons".to_string(), "99".to_string());
        assert_eq!(
            bad_option.submit(),
            Err(SelectionError::InvalidOption {
                field: "buttons".into(),
                value: "99".into()
            })
        );

        let mut extra_key = valid.clone();
        extra_key
            .specifications
            .insert("processor".to_string(), "Intel i7".to_string());
        assert_eq!(
            extra_key.submit(),
            Err(SelectionError::UnknownField {
                device: DeviceType::Mouse,
                field: "processor".into()
            })
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        assert_eq!(
            complete_laptop().apply(SelectionAction::Reset),
            Ok(Selection::new())
        );
    }

    #[test]
    fn test_mouse_then_keyboard() {
        let s = apply_all(vec![
            SelectionAction::device_from_code("Mouse").unwrap(),
            SelectionAction::device_from_code("Keyboard").unwrap(),
        ]);
        assert_eq!(s.device_type, Some(DeviceType::Keyboard));
        assert_eq!(s.manufacturer, None);
        assert!(s.specifications.is_empty());
        assert_eq!(
            catalog::manufacturers_for(s.device_type.unwrap()),
            &["Logitech", "Corsair", "Razer", "Keychron"]
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SelectionError::Incomplete {
            missing: vec!["dpi".into(), "buttons".into()],
        };
        assert_eq!(err.to_string(), "Required fields are empty: dpi, buttons");
        let err = SelectionError::UnknownManufacturer {
            device: DeviceType::Mouse,
            name: "Dell".into(),
        };
        assert_eq!(err.to_string(), "Dell is not offered for Mouse");
    }
}
