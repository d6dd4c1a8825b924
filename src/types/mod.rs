//! Request and response shapes of the EMR cluster-management API.
//!
//! Every shape is an immutable value with a separate builder:
//! - `Cluster::builder().name("etl").build()` builds a value,
//! - `cluster.name()` reads a field (`None` when unset),
//! - `cluster.into_builder()` starts a modified copy.
//!
//! Enumerated fields use open enums that keep values this crate does not
//! recognise, e.g. `MarketType::from("SPOT_BLOCK")`.

mod alarm;
mod cluster;
mod double;
mod ebs;
mod enums;
mod instance_fleet;
mod instance_group;
mod job_flow;
mod scaling;
mod shared;
mod step;
mod timestamp;

use std::fmt::{Display, Formatter, Result as FmtResult};

pub use alarm::{
    CloudWatchAlarmDefinition, CloudWatchAlarmDefinitionBuilder, MetricDimension,
    MetricDimensionBuilder,
};
pub use cluster::{
    Cluster, ClusterBuilder, ClusterStateChangeReason, ClusterStateChangeReasonBuilder,
    ClusterStatus, ClusterStatusBuilder, ClusterTimeline, ClusterTimelineBuilder,
    Ec2InstanceAttributes, Ec2InstanceAttributesBuilder,
};
pub use double::Double;
pub use ebs::{
    EbsBlockDevice, EbsBlockDeviceBuilder, EbsBlockDeviceConfig, EbsBlockDeviceConfigBuilder,
    EbsConfiguration, EbsConfigurationBuilder, VolumeSpecification, VolumeSpecificationBuilder,
};
pub use enums::{
    ActionOnFailure, AdjustmentType, AutoScalingPolicyState,
    AutoScalingPolicyStateChangeReasonCode, ClusterState, ClusterStateChangeReasonCode,
    ComparisonOperator, ComputeLimitsUnitType, InstanceCollectionType, InstanceFleetType,
    InstanceGroupState, InstanceGroupStateChangeReasonCode, InstanceGroupType, InstanceRoleType,
    JobFlowExecutionState, MarketType, OnDemandProvisioningAllocationStrategy, RepoUpgradeOnBoot,
    ScaleDownBehavior, SpotProvisioningAllocationStrategy, SpotProvisioningTimeoutAction,
    Statistic, StepExecutionState, Unit,
};
pub use instance_fleet::{
    InstanceFleetConfig, InstanceFleetConfigBuilder, InstanceFleetProvisioningSpecifications,
    InstanceFleetProvisioningSpecificationsBuilder, InstanceTypeConfig, InstanceTypeConfigBuilder,
    OnDemandProvisioningSpecification, OnDemandProvisioningSpecificationBuilder,
    SpotProvisioningSpecification, SpotProvisioningSpecificationBuilder,
};
pub use instance_group::{
    InstanceGroup, InstanceGroupBuilder, InstanceGroupConfig, InstanceGroupConfigBuilder,
    InstanceGroupDetail, InstanceGroupDetailBuilder, InstanceGroupStateChangeReason,
    InstanceGroupStateChangeReasonBuilder, InstanceGroupStatus, InstanceGroupStatusBuilder,
    InstanceGroupTimeline, InstanceGroupTimelineBuilder, InstanceResizePolicy,
    InstanceResizePolicyBuilder, ShrinkPolicy, ShrinkPolicyBuilder,
};
pub use job_flow::{
    JobFlowDetail, JobFlowDetailBuilder, JobFlowExecutionStatusDetail,
    JobFlowExecutionStatusDetailBuilder, JobFlowInstancesConfig, JobFlowInstancesConfigBuilder,
    JobFlowInstancesDetail, JobFlowInstancesDetailBuilder, RunJobFlowRequest,
    RunJobFlowRequestBuilder, RunJobFlowResult, RunJobFlowResultBuilder,
};
pub use scaling::{
    AutoScalingPolicy, AutoScalingPolicyBuilder, AutoScalingPolicyDescription,
    AutoScalingPolicyDescriptionBuilder, AutoScalingPolicyStateChangeReason,
    AutoScalingPolicyStateChangeReasonBuilder, AutoScalingPolicyStatus,
    AutoScalingPolicyStatusBuilder, ComputeLimits, ComputeLimitsBuilder, ManagedScalingPolicy,
    ManagedScalingPolicyBuilder, ScalingAction, ScalingActionBuilder, ScalingConstraints,
    ScalingConstraintsBuilder, ScalingRule, ScalingRuleBuilder, ScalingTrigger,
    ScalingTriggerBuilder, SimpleScalingPolicyConfiguration,
    SimpleScalingPolicyConfigurationBuilder,
};
pub use shared::{
    Application, ApplicationBuilder, Configuration, ConfigurationBuilder, KerberosAttributes,
    KerberosAttributesBuilder, KeyValue, KeyValueBuilder, PlacementType, PlacementTypeBuilder,
    SupportedProductConfig, SupportedProductConfigBuilder, Tag, TagBuilder,
};
pub use step::{
    BootstrapActionConfig, BootstrapActionConfigBuilder, BootstrapActionDetail,
    BootstrapActionDetailBuilder, HadoopJarStepConfig, HadoopJarStepConfigBuilder,
    ScriptBootstrapActionConfig, ScriptBootstrapActionConfigBuilder, StepConfig,
    StepConfigBuilder, StepDetail, StepDetailBuilder, StepExecutionStatusDetail,
    StepExecutionStatusDetailBuilder,
};
pub use timestamp::Timestamp;

/// The payload of an enum's `Unknown` variant: a wire string the enum does
/// not recognise. Only this crate creates these, so a recognised string
/// always parses to its named variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownValue(pub(crate) String);

impl UnknownValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UnknownValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
