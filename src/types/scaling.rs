//! Automatic scaling policies for instance groups and managed scaling for clusters.

use crate::traits::Validate;
use crate::validation::Checker;

use super::{
    AdjustmentType, AutoScalingPolicyState, AutoScalingPolicyStateChangeReasonCode,
    CloudWatchAlarmDefinition, ComputeLimitsUnitType, MarketType,
};

model! {
    /// Bounds an automatic scaling policy may not cross.
    pub struct ScalingConstraints => ScalingConstraintsBuilder {
        min_capacity => MinCapacity: i32,
        max_capacity => MaxCapacity: i32,
    }
}

model! {
    pub struct SimpleScalingPolicyConfiguration => SimpleScalingPolicyConfigurationBuilder {
        adjustment_type => AdjustmentType: AdjustmentType,
        /// Instances to add or remove, or a percentage for `PERCENT_CHANGE_IN_CAPACITY`.
        scaling_adjustment => ScalingAdjustment: i32,
        /// Seconds to wait after a scaling activity, default 0.
        cool_down => CoolDown: i32,
    }
}

model! {
    pub struct ScalingAction => ScalingActionBuilder {
        market => Market: MarketType,
        simple_scaling_policy_configuration => SimpleScalingPolicyConfiguration: SimpleScalingPolicyConfiguration,
    }
}

model! {
    pub struct ScalingTrigger => ScalingTriggerBuilder {
        cloud_watch_alarm_definition => CloudWatchAlarmDefinition: CloudWatchAlarmDefinition,
    }
}

model! {
    /// One trigger and the action it causes.
    pub struct ScalingRule => ScalingRuleBuilder {
        name => Name: String,
        description => Description: String,
        action => Action: ScalingAction,
        trigger => Trigger: ScalingTrigger,
    }
}

model! {
    /// An automatic scaling policy as submitted for an instance group.
    pub struct AutoScalingPolicy => AutoScalingPolicyBuilder {
        constraints => Constraints: ScalingConstraints,
        rules, set_rules => Rules: Vec<ScalingRule>,
    }
}

model! {
    pub struct AutoScalingPolicyStateChangeReason => AutoScalingPolicyStateChangeReasonBuilder {
        code => Code: AutoScalingPolicyStateChangeReasonCode,
        message => Message: String,
    }
}

model! {
    pub struct AutoScalingPolicyStatus => AutoScalingPolicyStatusBuilder {
        state => State: AutoScalingPolicyState,
        state_change_reason => StateChangeReason: AutoScalingPolicyStateChangeReason,
    }
}

model! {
    /// An automatic scaling policy as reported for a running instance group.
    pub struct AutoScalingPolicyDescription => AutoScalingPolicyDescriptionBuilder {
        status => Status: AutoScalingPolicyStatus,
        constraints => Constraints: ScalingConstraints,
        rules, set_rules => Rules: Vec<ScalingRule>,
    }
}

model! {
    /// Capacity limits managed scaling works within.
    pub struct ComputeLimits => ComputeLimitsBuilder {
        unit_type => UnitType: ComputeLimitsUnitType,
        minimum_capacity_units => MinimumCapacityUnits: i32,
        maximum_capacity_units => MaximumCapacityUnits: i32,
        maximum_on_demand_capacity_units => MaximumOnDemandCapacityUnits: i32,
        maximum_core_capacity_units => MaximumCoreCapacityUnits: i32,
    }
}

model! {
    pub struct ManagedScalingPolicy => ManagedScalingPolicyBuilder {
        compute_limits => ComputeLimits: ComputeLimits,
    }
}

impl Validate for ScalingConstraints {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("MinCapacity", self.min_capacity())
            .required("MaxCapacity", self.max_capacity());
    }
}

impl Validate for SimpleScalingPolicyConfiguration {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .known("AdjustmentType", self.adjustment_type())
            .required("ScalingAdjustment", self.scaling_adjustment());
    }
}

impl Validate for ScalingAction {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .known("Market", self.market())
            .required(
                "SimpleScalingPolicyConfiguration",
                self.simple_scaling_policy_configuration(),
            )
            .nested(
                "SimpleScalingPolicyConfiguration",
                self.simple_scaling_policy_configuration(),
            );
    }
}

impl Validate for ScalingTrigger {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required(
                "CloudWatchAlarmDefinition",
                self.cloud_watch_alarm_definition(),
            )
            .nested(
                "CloudWatchAlarmDefinition",
                self.cloud_watch_alarm_definition(),
            );
    }
}

impl Validate for ScalingRule {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("Name", self.name())
            .required("Action", self.action())
            .nested("Action", self.action())
            .required("Trigger", self.trigger())
            .nested("Trigger", self.trigger());
    }
}

impl Validate for AutoScalingPolicy {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("Constraints", self.constraints())
            .nested("Constraints", self.constraints())
            .required("Rules", self.rules())
            .each("Rules", self.rules());
    }
}

impl Validate for ComputeLimits {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("UnitType", self.unit_type())
            .known("UnitType", self.unit_type())
            .required("MinimumCapacityUnits", self.minimum_capacity_units())
            .required("MaximumCapacityUnits", self.maximum_capacity_units());
    }
}

impl Validate for ManagedScalingPolicy {
    fn check(&self, checker: &mut Checker<'_>) {
        checker.nested("ComputeLimits", self.compute_limits());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComparisonOperator, Statistic};

    fn scale_out_rule() -> ScalingRuleBuilder {
        ScalingRule::builder()
            .name("ScaleOut")
            .action(
                ScalingAction::builder().simple_scaling_policy_configuration(
                    SimpleScalingPolicyConfiguration::builder()
                        .adjustment_type(AdjustmentType::ChangeInCapacity)
                        .scaling_adjustment(1)
                        .cool_down(300),
                ),
            )
            .trigger(
                ScalingTrigger::builder().cloud_watch_alarm_definition(
                    CloudWatchAlarmDefinition::builder()
                        .comparison_operator(ComparisonOperator::LessThan)
                        .metric_name("YARNMemoryAvailablePercentage")
                        .period(300)
                        .statistic(Statistic::Average)
                        .threshold(15.0),
                ),
            )
    }

    #[test]
    fn test_complete_policy_is_valid() {
        let policy = AutoScalingPolicy::builder()
            .constraints(ScalingConstraints::builder().min_capacity(1).max_capacity(10))
            .rules(scale_out_rule())
            .build();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.rules().map(<[ScalingRule]>::len), Some(1));
    }

    #[test]
    fn test_deep_violation_path() {
        let rule = scale_out_rule();
        let trigger = ScalingTrigger::builder().cloud_watch_alarm_definition(
            CloudWatchAlarmDefinition::builder()
                .comparison_operator(ComparisonOperator::GreaterThan)
                .period(60)
                .threshold(1.0),
        );
        let policy = AutoScalingPolicy::builder()
            .constraints(ScalingConstraints::builder().min_capacity(0).max_capacity(2))
            .rules(rule.clone())
            .rules(rule.trigger(trigger))
            .build();

        let err = policy.validate().unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(
            err.violations()[0].path,
            "Rules[1].Trigger.CloudWatchAlarmDefinition.MetricName"
        );
    }

    #[test]
    fn test_empty_rules_are_present_but_empty() {
        let mut builder = AutoScalingPolicy::builder()
            .constraints(ScalingConstraints::builder().min_capacity(0).max_capacity(1));
        builder.rules = Some(Vec::new());
        let policy = builder.build();
        assert_eq!(policy.rules(), Some(&[][..]));
        assert!(policy.validate().is_ok());
        assert_eq!(
            policy.to_string(),
            "{Constraints: {MinCapacity: 0,MaxCapacity: 1},Rules: []}"
        );
    }

    #[test]
    fn test_managed_scaling_limits() {
        let policy = ManagedScalingPolicy::builder()
            .compute_limits(
                ComputeLimits::builder()
                    .unit_type("VCPU")
                    .minimum_capacity_units(4),
            )
            .build();
        let err = policy.validate().unwrap_err();
        assert_eq!(
            err.violations()[0].path,
            "ComputeLimits.MaximumCapacityUnits"
        );
        assert_eq!(
            policy.compute_limits().and_then(ComputeLimits::unit_type),
            Some(&ComputeLimitsUnitType::Vcpu)
        );
    }
}
