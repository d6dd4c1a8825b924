//! EBS volumes attached to cluster instances.

use crate::traits::Validate;
use crate::validation::Checker;

model! {
    /// The type, size and IOPS of an EBS volume.
    pub struct VolumeSpecification => VolumeSpecificationBuilder {
        /// `gp2`, `io1`, `standard` and so on.
        volume_type => VolumeType: String,
        iops => Iops: i32,
        size_in_gb => SizeInGB: i32 [serde(rename = "SizeInGB")],
    }
}

model! {
    /// Volumes of one specification to attach to every instance.
    pub struct EbsBlockDeviceConfig => EbsBlockDeviceConfigBuilder {
        volume_specification => VolumeSpecification: VolumeSpecification,
        volumes_per_instance => VolumesPerInstance: i32,
    }
}

model! {
    pub struct EbsConfiguration => EbsConfigurationBuilder {
        ebs_block_device_configs, set_ebs_block_device_configs => EbsBlockDeviceConfigs: Vec<EbsBlockDeviceConfig>,
        ebs_optimized => EbsOptimized: bool,
    }
}

model! {
    /// A volume as attached to a running instance.
    pub struct EbsBlockDevice => EbsBlockDeviceBuilder {
        volume_specification => VolumeSpecification: VolumeSpecification,
        device => Device: String,
    }
}

impl Validate for VolumeSpecification {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("VolumeType", self.volume_type())
            .required("SizeInGB", self.size_in_gb());
    }
}

impl Validate for EbsBlockDeviceConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("VolumeSpecification", self.volume_specification())
            .nested("VolumeSpecification", self.volume_specification());
    }
}

impl Validate for EbsConfiguration {
    fn check(&self, checker: &mut Checker<'_>) {
        checker.each("EbsBlockDeviceConfigs", self.ebs_block_device_configs());
    }
}
