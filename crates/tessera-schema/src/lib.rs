//! ## Crate layout
//! - `definition`: raw serde shapes for class, property, and enum definitions
//!   as they appear in JSON.
//! - `model`: resolved, immutable models built from those definitions
//!   (`ClassModel`, `PropertyModel`, `EnumModel`).
//! - `types`: the `PropertyType` value-type enum and its predicates.
//!
//! A class model is built once from a definition and an externally supplied
//! enum lookup; afterwards it is immutable and can be shared freely across
//! threads.
//!
//! ```
//! use std::sync::Arc;
//! use tessera_schema::prelude::*;
//!
//! let definition: ClassDefinition = serde_json::from_value(serde_json::json!({
//!     "name": "Wall",
//!     "properties": {
//!         "height": { "type": "FLOAT32", "semantic": "HEIGHT" },
//!         "color": { "type": "STRING" }
//!     }
//! }))?;
//!
//! let class = ClassModel::new("wall", &definition, &EnumMap::new())?;
//! let height = class.property_with_semantic("HEIGHT").expect("indexed by semantic");
//! assert_eq!(height.id(), "height");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod definition;
pub mod model;
pub mod types;

use crate::model::{ClassError, EnumError, PropertyError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        definition::{ClassDefinition, EnumDefinition, EnumValueDefinition, PropertyDefinition},
        model::{ClassModel, EnumMap, EnumModel, EnumValueModel, PropertyModel},
        types::PropertyType,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Class(#[from] ClassError),

    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error(transparent)]
    Property(#[from] PropertyError),
}
