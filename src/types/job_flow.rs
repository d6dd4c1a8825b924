//! Job flows: the RunJobFlow request and the job flow descriptions.

use crate::traits::Validate;
use crate::validation::{Checker, XML_STRING_MAX_LEN, XML_STRING_MAX_LEN_256};

use super::{
    Application, BootstrapActionConfig, BootstrapActionDetail, Configuration,
    InstanceFleetConfig, InstanceGroupConfig, InstanceGroupDetail, JobFlowExecutionState,
    KerberosAttributes, ManagedScalingPolicy, PlacementType, RepoUpgradeOnBoot,
    ScaleDownBehavior, StepConfig, StepDetail, SupportedProductConfig, Tag, Timestamp,
};

model! {
    /// The EC2 instances a new cluster runs on.
    ///
    /// Give either the uniform `MasterInstanceType`/`SlaveInstanceType`/`InstanceCount`
    /// trio, `InstanceGroups`, or `InstanceFleets`.
    pub struct JobFlowInstancesConfig => JobFlowInstancesConfigBuilder {
        master_instance_type => MasterInstanceType: String,
        slave_instance_type => SlaveInstanceType: String,
        instance_count => InstanceCount: i32,
        instance_groups, set_instance_groups => InstanceGroups: Vec<InstanceGroupConfig>,
        instance_fleets, set_instance_fleets => InstanceFleets: Vec<InstanceFleetConfig>,
        ec2_key_name => Ec2KeyName: String,
        placement => Placement: PlacementType,
        /// Keep the cluster running once it has no steps left.
        keep_job_flow_alive_when_no_steps => KeepJobFlowAliveWhenNoSteps: bool,
        termination_protected => TerminationProtected: bool,
        hadoop_version => HadoopVersion: String,
        ec2_subnet_id => Ec2SubnetId: String,
        ec2_subnet_ids, set_ec2_subnet_ids => Ec2SubnetIds: Vec<String>,
        emr_managed_master_security_group => EmrManagedMasterSecurityGroup: String,
        emr_managed_slave_security_group => EmrManagedSlaveSecurityGroup: String,
        service_access_security_group => ServiceAccessSecurityGroup: String,
        additional_master_security_groups, set_additional_master_security_groups => AdditionalMasterSecurityGroups: Vec<String>,
        additional_slave_security_groups, set_additional_slave_security_groups => AdditionalSlaveSecurityGroups: Vec<String>,
    }
}

model! {
    /// The instances of a described job flow.
    pub struct JobFlowInstancesDetail => JobFlowInstancesDetailBuilder {
        master_instance_type => MasterInstanceType: String,
        master_public_dns_name => MasterPublicDnsName: String,
        master_instance_id => MasterInstanceId: String,
        slave_instance_type => SlaveInstanceType: String,
        instance_count => InstanceCount: i32,
        instance_groups, set_instance_groups => InstanceGroups: Vec<InstanceGroupDetail>,
        normalized_instance_hours => NormalizedInstanceHours: i32,
        ec2_key_name => Ec2KeyName: String,
        ec2_subnet_id => Ec2SubnetId: String,
        placement => Placement: PlacementType,
        keep_job_flow_alive_when_no_steps => KeepJobFlowAliveWhenNoSteps: bool,
        termination_protected => TerminationProtected: bool,
        hadoop_version => HadoopVersion: String,
    }
}

model! {
    pub struct JobFlowExecutionStatusDetail => JobFlowExecutionStatusDetailBuilder {
        state => State: JobFlowExecutionState,
        creation_date_time => CreationDateTime: Timestamp,
        start_date_time => StartDateTime: Timestamp,
        ready_date_time => ReadyDateTime: Timestamp,
        end_date_time => EndDateTime: Timestamp,
        last_state_change_reason => LastStateChangeReason: String,
    }
}

model! {
    /// A job flow as returned by DescribeJobFlows.
    pub struct JobFlowDetail => JobFlowDetailBuilder {
        job_flow_id => JobFlowId: String,
        name => Name: String,
        log_uri => LogUri: String,
        ami_version => AmiVersion: String,
        execution_status_detail => ExecutionStatusDetail: JobFlowExecutionStatusDetail,
        instances => Instances: JobFlowInstancesDetail,
        steps, set_steps => Steps: Vec<StepDetail>,
        bootstrap_actions, set_bootstrap_actions => BootstrapActions: Vec<BootstrapActionDetail>,
        supported_products, set_supported_products => SupportedProducts: Vec<String>,
        visible_to_all_users => VisibleToAllUsers: bool,
        job_flow_role => JobFlowRole: String,
        service_role => ServiceRole: String,
        auto_scaling_role => AutoScalingRole: String,
        scale_down_behavior => ScaleDownBehavior: ScaleDownBehavior,
    }
}

model! {
    /// Creates and starts a cluster.
    pub struct RunJobFlowRequest => RunJobFlowRequestBuilder {
        name => Name: String,
        log_uri => LogUri: String,
        /// JSON string of additional settings, for legacy features.
        additional_info => AdditionalInfo: String,
        /// Only for releases before 4.0; use `ReleaseLabel` otherwise.
        ami_version => AmiVersion: String,
        release_label => ReleaseLabel: String,
        instances => Instances: JobFlowInstancesConfig,
        steps, set_steps => Steps: Vec<StepConfig>,
        bootstrap_actions, set_bootstrap_actions => BootstrapActions: Vec<BootstrapActionConfig>,
        supported_products, set_supported_products => SupportedProducts: Vec<String>,
        new_supported_products, set_new_supported_products => NewSupportedProducts: Vec<SupportedProductConfig>,
        applications, set_applications => Applications: Vec<Application>,
        configurations, set_configurations => Configurations: Vec<Configuration>,
        visible_to_all_users => VisibleToAllUsers: bool,
        /// The EC2 instance profile of the cluster's instances.
        job_flow_role => JobFlowRole: String,
        service_role => ServiceRole: String,
        tags, set_tags => Tags: Vec<Tag>,
        security_configuration => SecurityConfiguration: String,
        auto_scaling_role => AutoScalingRole: String,
        scale_down_behavior => ScaleDownBehavior: ScaleDownBehavior,
        custom_ami_id => CustomAmiId: String,
        ebs_root_volume_size => EbsRootVolumeSize: i32,
        repo_upgrade_on_boot => RepoUpgradeOnBoot: RepoUpgradeOnBoot,
        kerberos_attributes => KerberosAttributes: KerberosAttributes,
        step_concurrency_level => StepConcurrencyLevel: i32,
        managed_scaling_policy => ManagedScalingPolicy: ManagedScalingPolicy,
    }
}

model! {
    pub struct RunJobFlowResult => RunJobFlowResultBuilder {
        job_flow_id => JobFlowId: String,
        cluster_arn => ClusterArn: String,
    }
}

impl Validate for JobFlowInstancesConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .xml_string_within(
                "MasterInstanceType",
                self.master_instance_type(),
                1,
                XML_STRING_MAX_LEN_256,
            )
            .xml_string_within(
                "SlaveInstanceType",
                self.slave_instance_type(),
                1,
                XML_STRING_MAX_LEN_256,
            )
            .each("InstanceGroups", self.instance_groups())
            .each("InstanceFleets", self.instance_fleets())
            .xml_string("Ec2KeyName", self.ec2_key_name(), XML_STRING_MAX_LEN_256)
            .nested("Placement", self.placement())
            .xml_string("HadoopVersion", self.hadoop_version(), XML_STRING_MAX_LEN_256)
            .xml_string("Ec2SubnetId", self.ec2_subnet_id(), XML_STRING_MAX_LEN_256)
            .each_xml_string("Ec2SubnetIds", self.ec2_subnet_ids(), XML_STRING_MAX_LEN_256)
            .xml_string(
                "EmrManagedMasterSecurityGroup",
                self.emr_managed_master_security_group(),
                XML_STRING_MAX_LEN_256,
            )
            .xml_string(
                "EmrManagedSlaveSecurityGroup",
                self.emr_managed_slave_security_group(),
                XML_STRING_MAX_LEN_256,
            )
            .xml_string(
                "ServiceAccessSecurityGroup",
                self.service_access_security_group(),
                XML_STRING_MAX_LEN_256,
            )
            .each_xml_string(
                "AdditionalMasterSecurityGroups",
                self.additional_master_security_groups(),
                XML_STRING_MAX_LEN_256,
            )
            .each_xml_string(
                "AdditionalSlaveSecurityGroups",
                self.additional_slave_security_groups(),
                XML_STRING_MAX_LEN_256,
            );
    }
}

impl Validate for RunJobFlowRequest {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("Name", self.name())
            .xml_string("Name", self.name(), XML_STRING_MAX_LEN_256)
            .xml_string("LogUri", self.log_uri(), XML_STRING_MAX_LEN)
            .xml_string("AdditionalInfo", self.additional_info(), XML_STRING_MAX_LEN)
            .xml_string("AmiVersion", self.ami_version(), XML_STRING_MAX_LEN_256)
            .xml_string("ReleaseLabel", self.release_label(), XML_STRING_MAX_LEN_256)
            .required("Instances", self.instances())
            .nested("Instances", self.instances())
            .each("Steps", self.steps())
            .each("BootstrapActions", self.bootstrap_actions())
            .each_xml_string(
                "SupportedProducts",
                self.supported_products(),
                XML_STRING_MAX_LEN_256,
            )
            .each("NewSupportedProducts", self.new_supported_products())
            .each("Applications", self.applications())
            .each("Configurations", self.configurations())
            .xml_string("JobFlowRole", self.job_flow_role(), XML_STRING_MAX_LEN)
            .xml_string("ServiceRole", self.service_role(), XML_STRING_MAX_LEN)
            .each("Tags", self.tags())
            .xml_string(
                "SecurityConfiguration",
                self.security_configuration(),
                XML_STRING_MAX_LEN,
            )
            .xml_string("AutoScalingRole", self.auto_scaling_role(), XML_STRING_MAX_LEN)
            .known("ScaleDownBehavior", self.scale_down_behavior())
            .xml_string("CustomAmiId", self.custom_ami_id(), XML_STRING_MAX_LEN_256)
            .known("RepoUpgradeOnBoot", self.repo_upgrade_on_boot())
            .nested("KerberosAttributes", self.kerberos_attributes())
            .nested("ManagedScalingPolicy", self.managed_scaling_policy());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HadoopJarStepConfig, InstanceRoleType, ScriptBootstrapActionConfig};

    fn request() -> RunJobFlowRequestBuilder {
        RunJobFlowRequest::builder()
            .name("nightly-etl")
            .release_label("emr-6.10.0")
            .instances(
                JobFlowInstancesConfig::builder()
                    .instance_groups(
                        InstanceGroupConfig::builder()
                            .instance_role(InstanceRoleType::Master)
                            .instance_type("m5.xlarge")
                            .instance_count(1),
                    )
                    .keep_job_flow_alive_when_no_steps(false),
            )
            .steps(
                StepConfig::builder()
                    .name("Setup")
                    .action_on_failure("TERMINATE_CLUSTER")
                    .hadoop_jar_step(HadoopJarStepConfig::builder().jar("command-runner.jar")),
            )
            .applications(Application::builder().name("Spark"))
            .job_flow_role("EMR_EC2_DefaultRole")
            .service_role("EMR_DefaultRole")
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(request().build().validate().is_ok());
    }

    #[test]
    fn test_request_missing_name_and_instances() {
        let mut builder = request();
        builder.name = None;
        builder.instances = None;
        let err = builder.build().validate().unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["Name", "Instances"]);
        assert_eq!(
            err.to_string(),
            "RunJobFlowRequest failed validation: Name: is required; Instances: is required"
        );
    }

    #[test]
    fn test_violations_from_several_branches_are_collected() {
        let request = request()
            .bootstrap_actions(
                BootstrapActionConfig::builder()
                    .name("tools")
                    .script_bootstrap_action(ScriptBootstrapActionConfig::builder()),
            )
            .steps(StepConfig::builder().name("Second"))
            .build();

        let err = request.validate().unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["Steps[1].HadoopJarStep", "BootstrapActions[0].ScriptBootstrapAction.Path"]
        );
    }

    #[test]
    fn test_replacing_steps_by_assignment() {
        let mut builder = request();
        builder.steps = Some(vec![StepConfig::builder().name("Only").build()]);
        let request = builder.build();
        let names: Vec<Option<&str>> = request
            .steps()
            .unwrap_or_default()
            .iter()
            .map(StepConfig::name)
            .collect();
        assert_eq!(names, vec![Some("Only")]);
    }

    #[test]
    fn test_run_job_flow_result_from_json() {
        let result: RunJobFlowResult = serde_json::from_str(
            r#"{"JobFlowId":"j-1","ClusterArn":"arn:aws:elasticmapreduce:us-east-1:123456789012:cluster/j-1"}"#,
        )
        .unwrap();
        assert_eq!(result.job_flow_id(), Some("j-1"));
        assert_eq!(
            result.to_string(),
            "{JobFlowId: j-1,ClusterArn: arn:aws:elasticmapreduce:us-east-1:123456789012:cluster/j-1}"
        );
    }

    #[test]
    fn test_job_flow_detail_from_json() {
        let detail: JobFlowDetail = serde_json::from_str(
            r#"{
                "JobFlowId": "j-2",
                "Name": "legacy",
                "ExecutionStatusDetail": {"State": "WAITING", "CreationDateTime": 1700000000},
                "Instances": {
                    "MasterInstanceType": "m1.large",
                    "SlaveInstanceType": "m1.large",
                    "InstanceCount": 3,
                    "InstanceGroups": [{"InstanceRole": "MASTER", "State": "RUNNING", "InstanceRunningCount": 1}]
                },
                "SupportedProducts": ["mapr-m3"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            detail
                .execution_status_detail()
                .and_then(JobFlowExecutionStatusDetail::state),
            Some(&JobFlowExecutionState::Waiting)
        );
        let instances = detail.instances().unwrap();
        assert_eq!(instances.instance_count(), Some(3));
        let group = &instances.instance_groups().unwrap()[0];
        assert_eq!(group.instance_role(), Some(&InstanceRoleType::Master));
        assert_eq!(group.instance_running_count(), Some(1));
        assert_eq!(detail.supported_products().map(<[String]>::len), Some(1));
    }
}
