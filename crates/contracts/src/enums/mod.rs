pub mod device_type;

pub use device_type::DeviceType;
