use crate::enums::DeviceType;

/// Kind of input rendered for a specification field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    #[default]
    Select,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
        }
    }
}

/// One specification input: name, label and its closed option set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub options: &'static [&'static str],
}

impl FieldDescriptor {
    const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select,
            options,
        }
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.contains(&value)
    }
}

const CONNECTIVITY: &[&str] = &["Wired", "Wireless", "Bluetooth"];

const LAPTOP_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::select(
        "processor",
        "Processor",
        &["Intel i5", "Intel i7", "Intel i9", "AMD Ryzen 5", "AMD Ryzen 7"],
    ),
    FieldDescriptor::select("ram", "RAM (GB)", &["8", "16", "32", "64"]),
    FieldDescriptor::select("storage", "Storage (GB)", &["256", "512", "1024", "2048"]),
    FieldDescriptor::select(
        "screenSize",
        "Screen Size (inches)",
        &["13", "14", "15.6", "16", "17"],
    ),
];

const MONITOR_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::select(
        "screenSize",
        "Screen Size (inches)",
        &["24", "27", "32", "34", "49"],
    ),
    FieldDescriptor::select(
        "resolution",
        "Resolution",
        &["1080p", "2K", "4K", "5K", "Ultrawide"],
    ),
    FieldDescriptor::select(
        "refreshRate",
        "Refresh Rate (Hz)",
        &["60", "75", "144", "165", "240"],
    ),
];

const MOUSE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::select("dpi", "DPI", &["800", "1600", "3200", "6400", "12000"]),
    FieldDescriptor::select("connectivity", "Connectivity", CONNECTIVITY),
    FieldDescriptor::select("buttons", "Number of Buttons", &["2", "3", "5", "7", "12"]),
];

const KEYBOARD_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::select(
        "keyboardType",
        "Keyboard Type",
        &["Membrane", "Mechanical", "Optical"],
    ),
    FieldDescriptor::select("layout", "Layout", &["Full Size", "TKL", "60%", "40%"]),
    FieldDescriptor::select("connectivity", "Connectivity", CONNECTIVITY),
];

/// Device types in display order
pub fn device_types() -> Vec<DeviceType> {
    DeviceType::all()
}

/// Manufacturers offered for a device type, in display order
pub fn manufacturers_for(device: DeviceType) -> &'static [&'static str] {
    match device {
        DeviceType::Laptop => &["Dell", "HP", "Apple", "Lenovo", "ASUS"],
        DeviceType::Monitor => &["Samsung", "LG", "ASUS", "Dell", "BenQ"],
        DeviceType::Mouse => &["Logitech", "Razer", "Microsoft", "SteelSeries"],
        DeviceType::Keyboard => &["Logitech", "Corsair", "Razer", "Keychron"],
    }
}

/// Specification fields for a device type, in display order
pub fn spec_fields_for(device: DeviceType) -> &'static [FieldDescriptor] {
    match device {
        DeviceType::Laptop => LAPTOP_FIELDS,
        DeviceType::Monitor => MONITOR_FIELDS,
        DeviceType::Mouse => MOUSE_FIELDS,
        DeviceType::Keyboard => KEYBOARD_FIELDS,
    }
}

pub fn field_for(device: DeviceType, name: &str) -> Option<&'static FieldDescriptor> {
    spec_fields_for(device).iter().find(|f| f.name == name)
}

pub fn is_manufacturer_of(device: DeviceType, name: &str) -> bool {
    manufacturers_for(device).contains(&name)
}
