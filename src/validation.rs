//! Opt-in validation of shapes against the constraints the service documents.
//!
//! Nothing in the model validates on its own: unknown enum strings, empty
//! required fields and over-long names are all representable, because the
//! service is the final authority and may accept values newer than this
//! crate. [`Validate`](crate::traits::Validate) offers the same checks the
//! service performs, reported as a list of [`Violation`]s with dotted paths
//! such as `Instances.InstanceGroups[1].InstanceType`.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::traits::{OpenEnum, Validate};
use crate::types::Double;

/// Upper length bound of the `XmlString` shape.
pub const XML_STRING_MAX_LEN: usize = 10280;

/// Upper length bound of the `XmlStringMaxLen256` and `InstanceType` shapes.
pub const XML_STRING_MAX_LEN_256: usize = 256;

/// Characters allowed in XML 1.0 documents; every string shape of the API uses it.
static XML_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\x{20}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}\r\n\t]*$")
        .expect("XML character pattern is valid")
});

/// The kind of documented constraint a value failed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ConstraintKind {
    /// A field the service requires is absent.
    Required,
    /// A string is shorter or longer than allowed, counted in UTF-16 units.
    Length,
    /// A string contains characters outside the allowed pattern.
    Pattern,
    /// A number is outside its documented range.
    Range,
    /// An enumerated field carries a value this crate does not recognise.
    EnumValue,
}

/// One failed constraint, located by the dotted path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub path: String,
    pub constraint: ConstraintKind,
    pub message: String,
}

impl Violation {
    pub fn new(
        path: impl Into<String>,
        constraint: ConstraintKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            constraint,
            message: message.into(),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Which constraint kinds a validation pass reports.
///
/// The default reports everything except [`ConstraintKind::EnumValue`]:
/// values newer than this crate are legal on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    enabled: BTreeSet<ConstraintKind>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: ConstraintKind::iter()
                .filter(|kind| *kind != ConstraintKind::EnumValue)
                .collect(),
        }
    }
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report every constraint kind, including unrecognised enum values.
    pub fn strict() -> Self {
        Self {
            enabled: ConstraintKind::iter().collect(),
        }
    }

    pub fn with_constraint(mut self, kind: ConstraintKind) -> Self {
        self.enabled.insert(kind);
        self
    }

    pub fn without_constraint(mut self, kind: ConstraintKind) -> Self {
        self.enabled.remove(&kind);
        self
    }

    pub fn is_enabled(&self, kind: ConstraintKind) -> bool {
        self.enabled.contains(&kind)
    }
}

/// Collects violations while a shape tree is walked.
///
/// Methods take the field's wire name and the value as returned by the
/// shape's getter, and chain so a field's checks read as one statement.
#[derive(Debug)]
pub struct Checker<'a> {
    config: &'a ValidationConfig,
    path: Vec<String>,
    violations: Vec<Violation>,
}

impl<'a> Checker<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            violations: Vec::new(),
        }
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn path_to(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path.join("."), name)
        }
    }

    fn report(&mut self, name: &str, constraint: ConstraintKind, message: String) {
        let path = self.path_to(name);
        self.violations.push(Violation::new(path, constraint, message));
    }

    fn enabled(&self, constraint: ConstraintKind) -> bool {
        self.config.is_enabled(constraint)
    }

    /// The field must be present.
    pub fn required<T>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if value.is_none() && self.enabled(ConstraintKind::Required) {
            self.report(name, ConstraintKind::Required, "is required".to_string());
        }
        self
    }

    /// A present string must be `min..=max` UTF-16 units long.
    pub fn length(&mut self, name: &str, value: Option<&str>, min: usize, max: usize) -> &mut Self {
        if let Some(value) = value {
            let len = value.encode_utf16().count();
            if (len < min || len > max) && self.enabled(ConstraintKind::Length) {
                self.report(
                    name,
                    ConstraintKind::Length,
                    format!("length {len} is outside {min}..={max}"),
                );
            }
        }
        self
    }

    /// A present string must only hold XML characters and be at most `max` long.
    pub fn xml_string(&mut self, name: &str, value: Option<&str>, max: usize) -> &mut Self {
        self.xml_string_within(name, value, 0, max)
    }

    /// Like [`Checker::xml_string`], with a lower length bound as well.
    pub fn xml_string_within(
        &mut self,
        name: &str,
        value: Option<&str>,
        min: usize,
        max: usize,
    ) -> &mut Self {
        self.length(name, value, min, max);
        if let Some(value) = value {
            if self.enabled(ConstraintKind::Pattern) && !XML_STRING.is_match(value) {
                self.report(
                    name,
                    ConstraintKind::Pattern,
                    "contains characters outside the XML character range".to_string(),
                );
            }
        }
        self
    }

    /// Every item of a present string list must satisfy [`Checker::xml_string`].
    pub fn each_xml_string(
        &mut self,
        name: &str,
        values: Option<&[String]>,
        max: usize,
    ) -> &mut Self {
        for (index, value) in values.unwrap_or_default().iter().enumerate() {
            self.xml_string(&format!("{name}[{index}]"), Some(value), max);
        }
        self
    }

    /// A present integer must be at least `min`.
    pub fn min_i32(&mut self, name: &str, value: Option<i32>, min: i32) -> &mut Self {
        if let Some(value) = value {
            if value < min && self.enabled(ConstraintKind::Range) {
                self.report(
                    name,
                    ConstraintKind::Range,
                    format!("{value} is below the minimum of {min}"),
                );
            }
        }
        self
    }

    /// A present double must be at least `min`; NaN never is.
    pub fn min_double(&mut self, name: &str, value: Option<Double>, min: f64) -> &mut Self {
        if let Some(value) = value {
            let raw = value.get();
            if (raw.is_nan() || raw < min) && self.enabled(ConstraintKind::Range) {
                self.report(
                    name,
                    ConstraintKind::Range,
                    format!("{value} is below the minimum of {min:?}"),
                );
            }
        }
        self
    }

    /// A present enumerated value must be one this crate recognises.
    pub fn known<E: OpenEnum>(&mut self, name: &str, value: Option<&E>) -> &mut Self {
        if let Some(value) = value {
            if !value.is_known() && self.enabled(ConstraintKind::EnumValue) {
                self.report(
                    name,
                    ConstraintKind::EnumValue,
                    format!(
                        "'{}' is not a known {} (expected one of {})",
                        value.as_ref(),
                        E::enum_name(),
                        E::known_values().join(", ")
                    ),
                );
            }
        }
        self
    }

    /// Validate a present nested shape under `name`.
    pub fn nested<T: Validate>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.path.push(name.to_string());
            value.check(self);
            self.path.pop();
        }
        self
    }

    /// Validate every item of a present list under `name[index]`.
    pub fn each<T: Validate>(&mut self, name: &str, values: Option<&[T]>) -> &mut Self {
        for (index, value) in values.unwrap_or_default().iter().enumerate() {
            self.path.push(format!("{name}[{index}]"));
            value.check(self);
            self.path.pop();
        }
        self
    }
}
