//! A double-precision number with total equality.

use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::openapi::schema::{KnownFormat, ObjectBuilder, Schema, SchemaFormat, Type};
use utoipa::openapi::RefOr;
use utoipa::{PartialSchema, ToSchema};

use crate::error::ModelError;

/// An `f64` that compares and hashes by bit pattern, so shapes holding one
/// can be `Eq` and `Hash`.
///
/// All NaNs are equal to each other, and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Double(f64);

impl Double {
    pub const fn new(value: f64) -> Self {
        Double(value)
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    fn canonical_bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Double(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

/// Plain decimals between `1e-3` and `1e7`, always with a fractional part
/// (`10.0`). Outside that range, `d.dddE±n` (`1.0E21`, `2.5E-5`).
impl Display for Double {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        let magnitude = value.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            return write!(f, "{value:?}");
        }
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                write!(f, "{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => write!(f, "{mantissa}.0E{exponent}"),
            None => f.write_str(&scientific),
        }
    }
}

impl FromStr for Double {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Double)
            .map_err(|_| ModelError::InvalidFormat(format!("'{s}' is not a number")))
    }
}

/// Non-finite values have no JSON number form and are refused rather than
/// written as `null`, which would read back as an unset field.
impl Serialize for Double {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(S::Error::custom(format!(
                "{self} cannot be serialized as a number"
            )));
        }
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Double {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Double)
    }
}

impl PartialSchema for Double {
    fn schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::Number)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Double)))
                .build(),
        ))
    }
}

impl ToSchema for Double {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("Double")
    }
}
