//! Instance fleets: a role's capacity spread over several instance types.

use crate::traits::Validate;
use crate::validation::{Checker, XML_STRING_MAX_LEN_256};

use super::{
    Configuration, Double, EbsConfiguration, InstanceFleetType,
    OnDemandProvisioningAllocationStrategy, SpotProvisioningAllocationStrategy,
    SpotProvisioningTimeoutAction,
};

model! {
    /// An instance fleet as submitted when a cluster is created.
    pub struct InstanceFleetConfig => InstanceFleetConfigBuilder {
        name => Name: String,
        instance_fleet_type => InstanceFleetType: InstanceFleetType,
        /// Target capacity in weighted units provisioned on demand.
        target_on_demand_capacity => TargetOnDemandCapacity: i32,
        /// Target capacity in weighted units provisioned as spot instances.
        target_spot_capacity => TargetSpotCapacity: i32,
        instance_type_configs, set_instance_type_configs => InstanceTypeConfigs: Vec<InstanceTypeConfig>,
        launch_specifications => LaunchSpecifications: InstanceFleetProvisioningSpecifications,
    }
}

model! {
    /// One instance type a fleet may use, and what each instance counts for.
    pub struct InstanceTypeConfig => InstanceTypeConfigBuilder {
        instance_type => InstanceType: String,
        weighted_capacity => WeightedCapacity: i32,
        bid_price => BidPrice: String,
        bid_price_as_percentage_of_on_demand_price => BidPriceAsPercentageOfOnDemandPrice: Double,
        ebs_configuration => EbsConfiguration: EbsConfiguration,
        configurations, set_configurations => Configurations: Vec<Configuration>,
    }
}

model! {
    pub struct InstanceFleetProvisioningSpecifications => InstanceFleetProvisioningSpecificationsBuilder {
        spot_specification => SpotSpecification: SpotProvisioningSpecification,
        on_demand_specification => OnDemandSpecification: OnDemandProvisioningSpecification,
    }
}

model! {
    pub struct SpotProvisioningSpecification => SpotProvisioningSpecificationBuilder {
        /// Minutes to wait for spot capacity before `TimeoutAction` applies.
        timeout_duration_minutes => TimeoutDurationMinutes: i32,
        timeout_action => TimeoutAction: SpotProvisioningTimeoutAction,
        block_duration_minutes => BlockDurationMinutes: i32,
        allocation_strategy => AllocationStrategy: SpotProvisioningAllocationStrategy,
    }
}

model! {
    pub struct OnDemandProvisioningSpecification => OnDemandProvisioningSpecificationBuilder {
        allocation_strategy => AllocationStrategy: OnDemandProvisioningAllocationStrategy,
    }
}

impl Validate for InstanceFleetConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .xml_string("Name", self.name(), XML_STRING_MAX_LEN_256)
            .required("InstanceFleetType", self.instance_fleet_type())
            .known("InstanceFleetType", self.instance_fleet_type())
            .min_i32("TargetOnDemandCapacity", self.target_on_demand_capacity(), 0)
            .min_i32("TargetSpotCapacity", self.target_spot_capacity(), 0)
            .each("InstanceTypeConfigs", self.instance_type_configs())
            .nested("LaunchSpecifications", self.launch_specifications());
    }
}

impl Validate for InstanceTypeConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("InstanceType", self.instance_type())
            .xml_string_within("InstanceType", self.instance_type(), 1, XML_STRING_MAX_LEN_256)
            .min_i32("WeightedCapacity", self.weighted_capacity(), 0)
            .xml_string("BidPrice", self.bid_price(), XML_STRING_MAX_LEN_256)
            .min_double(
                "BidPriceAsPercentageOfOnDemandPrice",
                self.bid_price_as_percentage_of_on_demand_price(),
                0.0,
            )
            .nested("EbsConfiguration", self.ebs_configuration())
            .each("Configurations", self.configurations());
    }
}

impl Validate for InstanceFleetProvisioningSpecifications {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .nested("SpotSpecification", self.spot_specification())
            .nested("OnDemandSpecification", self.on_demand_specification());
    }
}

impl Validate for SpotProvisioningSpecification {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("TimeoutDurationMinutes", self.timeout_duration_minutes())
            .min_i32("TimeoutDurationMinutes", self.timeout_duration_minutes(), 0)
            .required("TimeoutAction", self.timeout_action())
            .known("TimeoutAction", self.timeout_action())
            .min_i32("BlockDurationMinutes", self.block_duration_minutes(), 0)
            .known("AllocationStrategy", self.allocation_strategy());
    }
}

impl Validate for OnDemandProvisioningSpecification {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("AllocationStrategy", self.allocation_strategy())
            .known("AllocationStrategy", self.allocation_strategy());
    }
}
