//! Instance groups: uniform sets of instances with one role each.

use crate::traits::Validate;
use crate::validation::{Checker, XML_STRING_MAX_LEN_256};

use super::{
    AutoScalingPolicy, AutoScalingPolicyDescription, Configuration, EbsBlockDevice,
    EbsConfiguration, InstanceGroupState, InstanceGroupStateChangeReasonCode, InstanceGroupType,
    InstanceRoleType, MarketType, Timestamp,
};

model! {
    /// An instance group as submitted when a cluster is created.
    pub struct InstanceGroupConfig => InstanceGroupConfigBuilder {
        name => Name: String,
        market => Market: MarketType,
        instance_role => InstanceRole: InstanceRoleType,
        /// Maximum spot price in USD. Leave unset to cap at the on-demand price.
        bid_price => BidPrice: String,
        instance_type => InstanceType: String,
        instance_count => InstanceCount: i32,
        configurations, set_configurations => Configurations: Vec<Configuration>,
        ebs_configuration => EbsConfiguration: EbsConfiguration,
        auto_scaling_policy => AutoScalingPolicy: AutoScalingPolicy,
    }
}

model! {
    /// An instance group of a running cluster.
    pub struct InstanceGroup => InstanceGroupBuilder {
        id => Id: String,
        name => Name: String,
        market => Market: MarketType,
        instance_group_type => InstanceGroupType: InstanceGroupType,
        bid_price => BidPrice: String,
        instance_type => InstanceType: String,
        requested_instance_count => RequestedInstanceCount: i32,
        running_instance_count => RunningInstanceCount: i32,
        status => Status: InstanceGroupStatus,
        configurations, set_configurations => Configurations: Vec<Configuration>,
        configurations_version => ConfigurationsVersion: i64,
        last_successfully_applied_configurations, set_last_successfully_applied_configurations => LastSuccessfullyAppliedConfigurations: Vec<Configuration>,
        last_successfully_applied_configurations_version => LastSuccessfullyAppliedConfigurationsVersion: i64,
        ebs_block_devices, set_ebs_block_devices => EbsBlockDevices: Vec<EbsBlockDevice>,
        ebs_optimized => EbsOptimized: bool,
        shrink_policy => ShrinkPolicy: ShrinkPolicy,
        auto_scaling_policy => AutoScalingPolicy: AutoScalingPolicyDescription,
    }
}

model! {
    pub struct InstanceGroupStatus => InstanceGroupStatusBuilder {
        state => State: InstanceGroupState,
        state_change_reason => StateChangeReason: InstanceGroupStateChangeReason,
        timeline => Timeline: InstanceGroupTimeline,
    }
}

model! {
    pub struct InstanceGroupStateChangeReason => InstanceGroupStateChangeReasonBuilder {
        code => Code: InstanceGroupStateChangeReasonCode,
        message => Message: String,
    }
}

model! {
    pub struct InstanceGroupTimeline => InstanceGroupTimelineBuilder {
        creation_date_time => CreationDateTime: Timestamp,
        ready_date_time => ReadyDateTime: Timestamp,
        end_date_time => EndDateTime: Timestamp,
    }
}

model! {
    /// How an instance group gives up instances when it shrinks.
    pub struct ShrinkPolicy => ShrinkPolicyBuilder {
        /// Seconds to wait for tasks to finish before an instance is terminated.
        decommission_timeout => DecommissionTimeout: i32,
        instance_resize_policy => InstanceResizePolicy: InstanceResizePolicy,
    }
}

model! {
    pub struct InstanceResizePolicy => InstanceResizePolicyBuilder {
        instances_to_terminate, set_instances_to_terminate => InstancesToTerminate: Vec<String>,
        instances_to_protect, set_instances_to_protect => InstancesToProtect: Vec<String>,
        instance_termination_timeout => InstanceTerminationTimeout: i32,
    }
}

model! {
    /// An instance group as reported in a job flow description.
    pub struct InstanceGroupDetail => InstanceGroupDetailBuilder {
        instance_group_id => InstanceGroupId: String,
        name => Name: String,
        market => Market: MarketType,
        instance_role => InstanceRole: InstanceRoleType,
        bid_price => BidPrice: String,
        instance_type => InstanceType: String,
        instance_request_count => InstanceRequestCount: i32,
        instance_running_count => InstanceRunningCount: i32,
        state => State: InstanceGroupState,
        last_state_change_reason => LastStateChangeReason: String,
        creation_date_time => CreationDateTime: Timestamp,
        start_date_time => StartDateTime: Timestamp,
        ready_date_time => ReadyDateTime: Timestamp,
        end_date_time => EndDateTime: Timestamp,
    }
}

impl Validate for InstanceGroupConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .xml_string("Name", self.name(), XML_STRING_MAX_LEN_256)
            .known("Market", self.market())
            .required("InstanceRole", self.instance_role())
            .known("InstanceRole", self.instance_role())
            .xml_string("BidPrice", self.bid_price(), XML_STRING_MAX_LEN_256)
            .required("InstanceType", self.instance_type())
            .xml_string_within("InstanceType", self.instance_type(), 1, XML_STRING_MAX_LEN_256)
            .required("InstanceCount", self.instance_count())
            .each("Configurations", self.configurations())
            .nested("EbsConfiguration", self.ebs_configuration())
            .nested("AutoScalingPolicy", self.auto_scaling_policy());
    }
}
