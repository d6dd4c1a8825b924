//! Enumerated string fields.

string_enum! {
    /// What the cluster does when a step fails.
    pub enum ActionOnFailure {
        TerminateJobFlow => "TERMINATE_JOB_FLOW",
        TerminateCluster => "TERMINATE_CLUSTER",
        CancelAndWait => "CANCEL_AND_WAIT",
        Continue => "CONTINUE",
    }
}

string_enum! {
    /// How a scaling adjustment is interpreted.
    pub enum AdjustmentType {
        ChangeInCapacity => "CHANGE_IN_CAPACITY",
        PercentChangeInCapacity => "PERCENT_CHANGE_IN_CAPACITY",
        ExactCapacity => "EXACT_CAPACITY",
    }
}

string_enum! {
    pub enum AutoScalingPolicyState {
        Pending => "PENDING",
        Attaching => "ATTACHING",
        Attached => "ATTACHED",
        Detaching => "DETACHING",
        Detached => "DETACHED",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum AutoScalingPolicyStateChangeReasonCode {
        UserRequest => "USER_REQUEST",
        ProvisionFailure => "PROVISION_FAILURE",
        CleanupFailure => "CLEANUP_FAILURE",
    }
}

string_enum! {
    pub enum ClusterState {
        Starting => "STARTING",
        Bootstrapping => "BOOTSTRAPPING",
        Running => "RUNNING",
        Waiting => "WAITING",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        TerminatedWithErrors => "TERMINATED_WITH_ERRORS",
    }
}

string_enum! {
    pub enum ClusterStateChangeReasonCode {
        InternalError => "INTERNAL_ERROR",
        ValidationError => "VALIDATION_ERROR",
        InstanceFailure => "INSTANCE_FAILURE",
        InstanceFleetTimeout => "INSTANCE_FLEET_TIMEOUT",
        BootstrapFailure => "BOOTSTRAP_FAILURE",
        UserRequest => "USER_REQUEST",
        StepFailure => "STEP_FAILURE",
        AllStepsCompleted => "ALL_STEPS_COMPLETED",
    }
}

string_enum! {
    /// How a metric is compared against an alarm threshold.
    pub enum ComparisonOperator {
        GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
        GreaterThan => "GREATER_THAN",
        LessThan => "LESS_THAN",
        LessThanOrEqual => "LESS_THAN_OR_EQUAL",
    }
}

string_enum! {
    /// The unit managed scaling limits are expressed in.
    pub enum ComputeLimitsUnitType {
        InstanceFleetUnits => "InstanceFleetUnits",
        Instances => "Instances",
        Vcpu => "VCPU",
    }
}

string_enum! {
    pub enum InstanceCollectionType {
        InstanceFleet => "INSTANCE_FLEET",
        InstanceGroup => "INSTANCE_GROUP",
    }
}

string_enum! {
    pub enum InstanceFleetType {
        Master => "MASTER",
        Core => "CORE",
        Task => "TASK",
    }
}

string_enum! {
    pub enum InstanceGroupState {
        Provisioning => "PROVISIONING",
        Bootstrapping => "BOOTSTRAPPING",
        Running => "RUNNING",
        Reconfiguring => "RECONFIGURING",
        Resizing => "RESIZING",
        Suspended => "SUSPENDED",
        Terminating => "TERMINATING",
        Terminated => "TERMINATED",
        Arrested => "ARRESTED",
        ShuttingDown => "SHUTTING_DOWN",
        Ended => "ENDED",
    }
}

string_enum! {
    pub enum InstanceGroupStateChangeReasonCode {
        InternalError => "INTERNAL_ERROR",
        ValidationError => "VALIDATION_ERROR",
        InstanceFailure => "INSTANCE_FAILURE",
        ClusterTerminated => "CLUSTER_TERMINATED",
    }
}

string_enum! {
    pub enum InstanceGroupType {
        Master => "MASTER",
        Core => "CORE",
        Task => "TASK",
    }
}

string_enum! {
    pub enum InstanceRoleType {
        Master => "MASTER",
        Core => "CORE",
        Task => "TASK",
    }
}

string_enum! {
    pub enum JobFlowExecutionState {
        Starting => "STARTING",
        Bootstrapping => "BOOTSTRAPPING",
        Running => "RUNNING",
        Waiting => "WAITING",
        ShuttingDown => "SHUTTING_DOWN",
        Terminated => "TERMINATED",
        Completed => "COMPLETED",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum MarketType {
        OnDemand => "ON_DEMAND",
        Spot => "SPOT",
    }
}

string_enum! {
    pub enum OnDemandProvisioningAllocationStrategy {
        LowestPrice => "lowest-price",
    }
}

string_enum! {
    /// Whether package repositories are upgraded when an instance boots.
    pub enum RepoUpgradeOnBoot {
        Security => "SECURITY",
        None => "NONE",
    }
}

string_enum! {
    /// How instances are removed when a cluster scales down.
    pub enum ScaleDownBehavior {
        TerminateAtInstanceHour => "TERMINATE_AT_INSTANCE_HOUR",
        TerminateAtTaskCompletion => "TERMINATE_AT_TASK_COMPLETION",
    }
}

string_enum! {
    pub enum SpotProvisioningAllocationStrategy {
        CapacityOptimized => "capacity-optimized",
    }
}

string_enum! {
    /// What happens when spot capacity cannot be provisioned in time.
    pub enum SpotProvisioningTimeoutAction {
        SwitchToOnDemand => "SWITCH_TO_ON_DEMAND",
        TerminateCluster => "TERMINATE_CLUSTER",
    }
}

string_enum! {
    /// The statistic applied to an alarm's metric.
    pub enum Statistic {
        SampleCount => "SAMPLE_COUNT",
        Average => "AVERAGE",
        Sum => "SUM",
        Minimum => "MINIMUM",
        Maximum => "MAXIMUM",
    }
}

string_enum! {
    pub enum StepExecutionState {
        Pending => "PENDING",
        Running => "RUNNING",
        Continue => "CONTINUE",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
        Failed => "FAILED",
        Interrupted => "INTERRUPTED",
    }
}

string_enum! {
    /// The unit of an alarm's metric.
    pub enum Unit {
        None => "NONE",
        Seconds => "SECONDS",
        MicroSeconds => "MICRO_SECONDS",
        MilliSeconds => "MILLI_SECONDS",
        Bytes => "BYTES",
        KiloBytes => "KILO_BYTES",
        MegaBytes => "MEGA_BYTES",
        GigaBytes => "GIGA_BYTES",
        TeraBytes => "TERA_BYTES",
        Bits => "BITS",
        KiloBits => "KILO_BITS",
        MegaBits => "MEGA_BITS",
        GigaBits => "GIGA_BITS",
        TeraBits => "TERA_BITS",
        Percent => "PERCENT",
        Count => "COUNT",
        BytesPerSecond => "BYTES_PER_SECOND",
        KiloBytesPerSecond => "KILO_BYTES_PER_SECOND",
        MegaBytesPerSecond => "MEGA_BYTES_PER_SECOND",
        GigaBytesPerSecond => "GIGA_BYTES_PER_SECOND",
        TeraBytesPerSecond => "TERA_BYTES_PER_SECOND",
        BitsPerSecond => "BITS_PER_SECOND",
        KiloBitsPerSecond => "KILO_BITS_PER_SECOND",
        MegaBitsPerSecond => "MEGA_BITS_PER_SECOND",
        GigaBitsPerSecond => "GIGA_BITS_PER_SECOND",
        TeraBitsPerSecond => "TERA_BITS_PER_SECOND",
        CountPerSecond => "COUNT_PER_SECOND",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpenEnum;
    use yare::parameterized;

    #[parameterized(
        average = { "AVERAGE", Statistic::Average },
        sample_count = { "SAMPLE_COUNT", Statistic::SampleCount },
        maximum = { "MAXIMUM", Statistic::Maximum },
    )]
    fn test_known_statistic(wire: &str, expected: Statistic) {
        assert_eq!(Statistic::from(wire), expected);
        assert_eq!(Statistic::from(wire.to_string()), expected);
        assert_eq!(expected.as_str(), wire);
        assert!(expected.is_known());
    }

    #[parameterized(
        lowercase = { "average" },
        unlisted = { "P99" },
        empty = { "" },
        padded = { " AVERAGE" },
    )]
    fn test_unknown_statistic_is_kept_verbatim(wire: &str) {
        let parsed: Statistic = wire.parse().unwrap();
        assert!(!parsed.is_known());
        assert_eq!(parsed.as_str(), wire);
        assert_eq!(parsed.to_string(), wire);
        assert!(matches!(parsed, Statistic::Unknown(_)));
    }

    #[test]
    fn test_mixed_case_wire_values() {
        assert_eq!(ComputeLimitsUnitType::from("VCPU"), ComputeLimitsUnitType::Vcpu);
        assert_eq!(
            ComputeLimitsUnitType::from("InstanceFleetUnits"),
            ComputeLimitsUnitType::InstanceFleetUnits
        );
        assert_eq!(
            SpotProvisioningAllocationStrategy::CapacityOptimized.as_str(),
            "capacity-optimized"
        );
        assert_eq!(
            OnDemandProvisioningAllocationStrategy::from("lowest-price"),
            OnDemandProvisioningAllocationStrategy::LowestPrice
        );
    }

    #[test]
    fn test_values_are_in_declaration_order() {
        assert_eq!(MarketType::VALUES, &["ON_DEMAND", "SPOT"]);
        assert_eq!(Unit::VALUES.len(), 27);
        assert_eq!(Unit::VALUES.first(), Some(&"NONE"));
        assert_eq!(Unit::VALUES.last(), Some(&"COUNT_PER_SECOND"));
        assert_eq!(<ActionOnFailure as OpenEnum>::known_values().len(), 4);
        assert_eq!(<ActionOnFailure as OpenEnum>::enum_name(), "ActionOnFailure");
    }

    #[test]
    fn test_every_known_value_parses_to_a_known_variant() {
        for value in InstanceGroupState::VALUES {
            let parsed = InstanceGroupState::from(*value);
            assert!(parsed.is_known(), "{value} should be known");
            assert_eq!(parsed.as_str(), *value);
        }
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&ActionOnFailure::CancelAndWait).unwrap();
        assert_eq!(json, "\"CANCEL_AND_WAIT\"");

        let unknown: ActionOnFailure = serde_json::from_str("\"PAUSE\"").unwrap();
        assert_eq!(unknown.as_str(), "PAUSE");
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"PAUSE\"");
    }
}
