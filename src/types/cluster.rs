//! Clusters as the service describes them.

use super::{
    Application, ClusterState, ClusterStateChangeReasonCode, Configuration,
    InstanceCollectionType, KerberosAttributes, RepoUpgradeOnBoot, ScaleDownBehavior, Tag,
    Timestamp,
};

model! {
    /// The detailed description of a cluster.
    pub struct Cluster => ClusterBuilder {
        id => Id: String,
        name => Name: String,
        status => Status: ClusterStatus,
        ec2_instance_attributes => Ec2InstanceAttributes: Ec2InstanceAttributes,
        instance_collection_type => InstanceCollectionType: InstanceCollectionType,
        log_uri => LogUri: String,
        requested_ami_version => RequestedAmiVersion: String,
        running_ami_version => RunningAmiVersion: String,
        /// e.g. `emr-6.10.0`; replaces AMI versions from release 4.0 on.
        release_label => ReleaseLabel: String,
        auto_terminate => AutoTerminate: bool,
        termination_protected => TerminationProtected: bool,
        visible_to_all_users => VisibleToAllUsers: bool,
        applications, set_applications => Applications: Vec<Application>,
        tags, set_tags => Tags: Vec<Tag>,
        service_role => ServiceRole: String,
        /// Approximate instance hours, normalised to an m1.small.
        normalized_instance_hours => NormalizedInstanceHours: i32,
        master_public_dns_name => MasterPublicDnsName: String,
        configurations, set_configurations => Configurations: Vec<Configuration>,
        security_configuration => SecurityConfiguration: String,
        auto_scaling_role => AutoScalingRole: String,
        scale_down_behavior => ScaleDownBehavior: ScaleDownBehavior,
        custom_ami_id => CustomAmiId: String,
        /// GiB, per instance.
        ebs_root_volume_size => EbsRootVolumeSize: i32,
        repo_upgrade_on_boot => RepoUpgradeOnBoot: RepoUpgradeOnBoot,
        kerberos_attributes => KerberosAttributes: KerberosAttributes,
        cluster_arn => ClusterArn: String,
        outpost_arn => OutpostArn: String,
        step_concurrency_level => StepConcurrencyLevel: i32,
    }
}

model! {
    pub struct ClusterStatus => ClusterStatusBuilder {
        state => State: ClusterState,
        state_change_reason => StateChangeReason: ClusterStateChangeReason,
        timeline => Timeline: ClusterTimeline,
    }
}

model! {
    pub struct ClusterStateChangeReason => ClusterStateChangeReasonBuilder {
        code => Code: ClusterStateChangeReasonCode,
        message => Message: String,
    }
}

model! {
    pub struct ClusterTimeline => ClusterTimelineBuilder {
        creation_date_time => CreationDateTime: Timestamp,
        ready_date_time => ReadyDateTime: Timestamp,
        end_date_time => EndDateTime: Timestamp,
    }
}

model! {
    /// Network and security settings of a cluster's EC2 instances.
    pub struct Ec2InstanceAttributes => Ec2InstanceAttributesBuilder {
        ec2_key_name => Ec2KeyName: String,
        ec2_subnet_id => Ec2SubnetId: String,
        requested_ec2_subnet_ids, set_requested_ec2_subnet_ids => RequestedEc2SubnetIds: Vec<String>,
        ec2_availability_zone => Ec2AvailabilityZone: String,
        requested_ec2_availability_zones, set_requested_ec2_availability_zones => RequestedEc2AvailabilityZones: Vec<String>,
        iam_instance_profile => IamInstanceProfile: String,
        emr_managed_master_security_group => EmrManagedMasterSecurityGroup: String,
        emr_managed_slave_security_group => EmrManagedSlaveSecurityGroup: String,
        service_access_security_group => ServiceAccessSecurityGroup: String,
        additional_master_security_groups, set_additional_master_security_groups => AdditionalMasterSecurityGroups: Vec<String>,
        additional_slave_security_groups, set_additional_slave_security_groups => AdditionalSlaveSecurityGroups: Vec<String>,
    }
}
