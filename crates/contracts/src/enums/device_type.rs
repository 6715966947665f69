use serde::{Deserialize, Serialize};
use std::fmt;

/// Device categories offered by the configurator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviceType {
    Laptop,
    Monitor,
    Mouse,
    Keyboard,
}

impl DeviceType {
    /// Code used as the `<option>` value and in the emitted payload
    pub fn code(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "Laptop",
            DeviceType::Monitor => "Monitor",
            DeviceType::Mouse => "Mouse",
            DeviceType::Keyboard => "Keyboard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    /// Icon key for `frontend::shared::icons::icon`
    pub fn icon_name(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "laptop",
            DeviceType::Monitor => "monitor",
            DeviceType::Mouse => "mouse",
            DeviceType::Keyboard => "keyboard",
        }
    }

    /// All device types in display order
    pub fn all() -> Vec<DeviceType> {
        vec![
            DeviceType::Laptop,
            DeviceType::Monitor,
            DeviceType::Mouse,
            DeviceType::Keyboard,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Laptop" => Some(DeviceType::Laptop),
            "Monitor" => Some(DeviceType::Monitor),
            "Mouse" => Some(DeviceType::Mouse),
            "Keyboard" => Some(DeviceType::Keyboard),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
