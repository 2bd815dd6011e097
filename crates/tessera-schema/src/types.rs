use crate::{ThisError, prelude::*};
use derive_more::Display;
use std::str::FromStr;

///
/// PropertyType
/// Value types a property may declare, written as uppercase wire labels
/// in definitions.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    #[display("INT8")]
    Int8,
    #[display("UINT8")]
    Uint8,
    #[display("INT16")]
    Int16,
    #[display("UINT16")]
    Uint16,
    #[display("INT32")]
    Int32,
    #[display("UINT32")]
    Uint32,
    #[display("INT64")]
    Int64,
    #[display("UINT64")]
    Uint64,
    #[display("FLOAT32")]
    Float32,
    #[display("FLOAT64")]
    Float64,
    #[display("BOOLEAN")]
    Boolean,
    #[display("STRING")]
    String,
    #[display("ENUM")]
    Enum,
    #[display("ARRAY")]
    Array,
}

impl PropertyType {
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    // normalization maps integer ranges onto [0, 1] / [-1, 1]
    #[must_use]
    pub const fn supports_normalization(self) -> bool {
        self.is_integer()
    }
}

impl FromStr for PropertyType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "INT8" => Self::Int8,
            "UINT8" => Self::Uint8,
            "INT16" => Self::Int16,
            "UINT16" => Self::Uint16,
            "INT32" => Self::Int32,
            "UINT32" => Self::Uint32,
            "INT64" => Self::Int64,
            "UINT64" => Self::Uint64,
            "FLOAT32" => Self::Float32,
            "FLOAT64" => Self::Float64,
            "BOOLEAN" => Self::Boolean,
            "STRING" => Self::String,
            "ENUM" => Self::Enum,
            "ARRAY" => Self::Array,
            _ => return Err(UnknownTypeError(s.to_string())),
        };

        Ok(ty)
    }
}

///
/// UnknownTypeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown property type '{0}'")]
pub struct UnknownTypeError(pub String);
