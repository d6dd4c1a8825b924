//! CloudWatch alarm definitions used as automatic scaling triggers.

use crate::traits::Validate;
use crate::validation::{Checker, XML_STRING_MAX_LEN};

use super::{ComparisonOperator, Double, Statistic, Unit};

model! {
    /// The alarm that fires a scaling rule.
    pub struct CloudWatchAlarmDefinition => CloudWatchAlarmDefinitionBuilder {
        comparison_operator => ComparisonOperator: ComparisonOperator,
        /// Consecutive periods the condition must hold, default 1.
        evaluation_periods => EvaluationPeriods: i32,
        metric_name => MetricName: String,
        /// Defaults to `AWS/ElasticMapReduce`.
        namespace => Namespace: String,
        /// Seconds over which the statistic is applied.
        period => Period: i32,
        statistic => Statistic: Statistic,
        threshold => Threshold: Double,
        unit => Unit: Unit,
        dimensions, set_dimensions => Dimensions: Vec<MetricDimension>,
    }
}

model! {
    /// A CloudWatch dimension narrowing an alarm's metric.
    pub struct MetricDimension => MetricDimensionBuilder {
        key => Key: String,
        value => Value: String,
    }
}

impl Validate for CloudWatchAlarmDefinition {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("ComparisonOperator", self.comparison_operator())
            .known("ComparisonOperator", self.comparison_operator())
            .required("MetricName", self.metric_name())
            .xml_string("MetricName", self.metric_name(), XML_STRING_MAX_LEN)
            .xml_string("Namespace", self.namespace(), XML_STRING_MAX_LEN)
            .required("Period", self.period())
            .known("Statistic", self.statistic())
            .required("Threshold", self.threshold())
            .min_double("Threshold", self.threshold(), 0.0)
            .known("Unit", self.unit())
            .each("Dimensions", self.dimensions());
    }
}

impl Validate for MetricDimension {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .xml_string("Key", self.key(), XML_STRING_MAX_LEN)
            .xml_string("Value", self.value(), XML_STRING_MAX_LEN);
    }
}
