mod class;
mod r#enum;
mod property;

pub use class::{ClassError, ClassModel};
pub use property::{PropertyError, PropertyModel};
pub use r#enum::{DEFAULT_ENUM_VALUE_TYPE, EnumError, EnumMap, EnumModel, EnumValueModel};
