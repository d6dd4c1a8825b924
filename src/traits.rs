use std::fmt::Display;

use tracing::{debug, trace};

use crate::error::ModelError;
use crate::validation::{Checker, ValidationConfig};

/// Anything that is a named shape of the EMR API, e.g. `Cluster` or `StepConfig`.
pub trait Shape: Display + Clone + PartialEq + Default {
    /// The shape name as the service documents it.
    fn shape_name() -> &'static str;
}

/// A string-backed enumeration that also carries values it does not recognise.
pub trait OpenEnum: AsRef<str> + Display + for<'a> From<&'a str> + From<String> {
    /// The enumeration name, e.g. `Statistic`.
    fn enum_name() -> &'static str;

    /// Every wire value this crate recognises, in declaration order.
    fn known_values() -> &'static [&'static str];

    /// `false` for a value that was carried through as `Unknown`.
    fn is_known(&self) -> bool;
}

/// Opt-in checks against the constraints the service documents for a shape.
///
/// Building a shape never validates. Call [`Validate::validate`] (or
/// [`Validate::validate_with`]) before handing a request to a transport when
/// client-side rejection is wanted.
pub trait Validate: Shape {
    /// Report every violation of this shape and its nested shapes into `checker`.
    fn check(&self, checker: &mut Checker<'_>);

    /// Validate with the default configuration.
    fn validate(&self) -> Result<(), ModelError> {
        self.validate_with(&ValidationConfig::default())
    }

    /// Validate with an explicit configuration, collecting all violations.
    fn validate_with(&self, config: &ValidationConfig) -> Result<(), ModelError> {
        let mut checker = Checker::new(config);
        self.check(&mut checker);
        let violations = checker.into_violations();

        if violations.is_empty() {
            trace!(event = "Validate", shape = Self::shape_name(), result = "ok");
            return Ok(());
        }

        debug!(
            event = "Validate",
            shape = Self::shape_name(),
            violations = violations.len()
        );
        for violation in &violations {
            debug!(
                event = "Violation",
                shape = Self::shape_name(),
                path = violation.path.as_str(),
                constraint = violation.constraint.as_ref()
            );
        }

        Err(ModelError::Validation {
            shape: Self::shape_name().to_string(),
            violations,
        })
    }
}
