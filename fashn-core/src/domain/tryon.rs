//! Virtual try-on parameters
//!
//! Typed form of the inputs accepted by the `tryon-*` models. Every option
//! field is an enum whose wire strings are the only accepted values, and
//! numeric fields are range-checked by [`TryOnParams::validate`] before a
//! [`JobRequest`] is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::job::JobRequest;

pub const SEED_MAX: u64 = u32::MAX as u64;
pub const NUM_SAMPLES_MIN: u32 = 1;
pub const NUM_SAMPLES_MAX: u32 = 4;

/// Errors raised while checking parameters at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric field is outside its accepted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },

    /// A string is not one of the accepted options for a field
    #[error("invalid value '{value}' for {field} (expected one of: {allowed})")]
    InvalidOption {
        field: &'static str,
        value: String,
        allowed: String,
    },
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:tt, default = $default:ident) {
            $($variant:ident => $wire:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ValidationError::InvalidOption {
                        field: $field,
                        value: s.to_string(),
                        allowed: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Try-on model version; v1.6 is the latest and higher quality
    ModelVersion("model_version", default = V1_6) {
        V1_6 => "tryon-v1.6",
        V1_5 => "tryon-v1.5",
    }
}

wire_enum! {
    /// Garment category
    Category("category", default = Auto) {
        Auto => "auto",
        Tops => "tops",
        Bottoms => "bottoms",
        OnePieces => "one-pieces",
    }
}

wire_enum! {
    /// Content moderation level
    ModerationLevel("moderation_level", default = Permissive) {
        Conservative => "conservative",
        Permissive => "permissive",
        None => "none",
    }
}

wire_enum! {
    /// How the garment was photographed
    GarmentPhotoType("garment_photo_type", default = Auto) {
        Auto => "auto",
        FlatLay => "flat-lay",
        Model => "model",
    }
}

wire_enum! {
    /// Speed/quality trade-off
    Mode("mode", default = Balanced) {
        Performance => "performance",
        Balanced => "balanced",
        Quality => "quality",
    }
}

wire_enum! {
    OutputFormat("output_format", default = Png) {
        Png => "png",
        Jpeg => "jpeg",
    }
}

/// Parameters of a virtual try-on job
///
/// Missing fields fall back to the service defaults when deserialized, except
/// for the two images which are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TryOnParams {
    pub model_version: ModelVersion,
    /// URL or base64 data URI of the person
    pub model_image: String,
    /// URL or base64 data URI of the garment
    pub garment_image: String,
    pub category: Category,
    /// Fit the garment without segmenting the original clothing first
    pub segmentation_free: bool,
    pub moderation_level: ModerationLevel,
    pub garment_photo_type: GarmentPhotoType,
    pub mode: Mode,
    pub seed: u64,
    pub num_samples: u32,
    pub output_format: OutputFormat,
    pub return_base64: bool,
}

impl Default for TryOnParams {
    fn default() -> Self {
        Self {
            model_version: ModelVersion::default(),
            model_image: String::new(),
            garment_image: String::new(),
            category: Category::default(),
            segmentation_free: true,
            moderation_level: ModerationLevel::default(),
            garment_photo_type: GarmentPhotoType::default(),
            mode: Mode::default(),
            seed: 42,
            num_samples: 1,
            output_format: OutputFormat::default(),
            return_base64: false,
        }
    }
}

impl TryOnParams {
    /// Creates parameters with defaults for everything but the two images
    pub fn new(model_image: impl Into<String>, garment_image: impl Into<String>) -> Self {
        Self {
            model_image: model_image.into(),
            garment_image: garment_image.into(),
            ..Self::default()
        }
    }

    /// Checks required fields and numeric ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model_image.trim().is_empty() {
            return Err(ValidationError::MissingField("model_image"));
        }

        if self.garment_image.trim().is_empty() {
            return Err(ValidationError::MissingField("garment_image"));
        }

        if self.seed > SEED_MAX {
            return Err(ValidationError::OutOfRange {
                field: "seed",
                min: 0,
                max: SEED_MAX,
                value: self.seed,
            });
        }

        if !(NUM_SAMPLES_MIN..=NUM_SAMPLES_MAX).contains(&self.num_samples) {
            return Err(ValidationError::OutOfRange {
                field: "num_samples",
                min: NUM_SAMPLES_MIN as u64,
                max: NUM_SAMPLES_MAX as u64,
                value: self.num_samples as u64,
            });
        }

        Ok(())
    }

    /// Validates and builds the request body for `POST /v1/run`
    pub fn to_request(&self) -> Result<JobRequest, ValidationError> {
        self.validate()?;

        Ok(JobRequest::new(self.model_version.as_str())
            .with_input("model_image", self.model_image.clone())
            .with_input("garment_image", self.garment_image.clone())
            .with_input("category", self.category.as_str())
            .with_input("segmentation_free", self.segmentation_free)
            .with_input("moderation_level", self.moderation_level.as_str())
            .with_input("garment_photo_type", self.garment_photo_type.as_str())
            .with_input("mode", self.mode.as_str())
            .with_input("seed", self.seed)
            .with_input("num_samples", self.num_samples)
            .with_input("output_format", self.output_format.as_str())
            .with_input("return_base64", self.return_base64))
    }
}
