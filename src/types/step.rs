//! Job flow steps and bootstrap actions.

use crate::traits::Validate;
use crate::validation::{Checker, XML_STRING_MAX_LEN, XML_STRING_MAX_LEN_256};

use super::{ActionOnFailure, KeyValue, StepExecutionState, Timestamp};

model! {
    /// A JAR to run on the cluster, with its entry point and arguments.
    pub struct HadoopJarStepConfig => HadoopJarStepConfigBuilder {
        /// Java properties set when the step runs.
        properties, set_properties => Properties: Vec<KeyValue>,
        /// Path to the JAR, usually on S3.
        jar => Jar: String,
        /// Only needed when the JAR manifest names no main class.
        main_class => MainClass: String,
        args, set_args => Args: Vec<String>,
    }
}

model! {
    /// A unit of work submitted to a cluster.
    pub struct StepConfig => StepConfigBuilder {
        name => Name: String,
        action_on_failure => ActionOnFailure: ActionOnFailure,
        hadoop_jar_step => HadoopJarStep: HadoopJarStepConfig,
    }
}

model! {
    pub struct StepExecutionStatusDetail => StepExecutionStatusDetailBuilder {
        state => State: StepExecutionState,
        creation_date_time => CreationDateTime: Timestamp,
        start_date_time => StartDateTime: Timestamp,
        end_date_time => EndDateTime: Timestamp,
        last_state_change_reason => LastStateChangeReason: String,
    }
}

model! {
    /// A step together with how its execution went.
    pub struct StepDetail => StepDetailBuilder {
        step_config => StepConfig: StepConfig,
        execution_status_detail => ExecutionStatusDetail: StepExecutionStatusDetail,
    }
}

model! {
    /// A script run on every node before applications start.
    pub struct ScriptBootstrapActionConfig => ScriptBootstrapActionConfigBuilder {
        path => Path: String,
        args, set_args => Args: Vec<String>,
    }
}

model! {
    pub struct BootstrapActionConfig => BootstrapActionConfigBuilder {
        name => Name: String,
        script_bootstrap_action => ScriptBootstrapAction: ScriptBootstrapActionConfig,
    }
}

model! {
    pub struct BootstrapActionDetail => BootstrapActionDetailBuilder {
        bootstrap_action_config => BootstrapActionConfig: BootstrapActionConfig,
    }
}

impl Validate for HadoopJarStepConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .each("Properties", self.properties())
            .required("Jar", self.jar())
            .xml_string("Jar", self.jar(), XML_STRING_MAX_LEN)
            .xml_string("MainClass", self.main_class(), XML_STRING_MAX_LEN)
            .each_xml_string("Args", self.args(), XML_STRING_MAX_LEN);
    }
}

impl Validate for StepConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("Name", self.name())
            .xml_string("Name", self.name(), XML_STRING_MAX_LEN_256)
            .known("ActionOnFailure", self.action_on_failure())
            .required("HadoopJarStep", self.hadoop_jar_step())
            .nested("HadoopJarStep", self.hadoop_jar_step());
    }
}

impl Validate for ScriptBootstrapActionConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("Path", self.path())
            .xml_string("Path", self.path(), XML_STRING_MAX_LEN)
            .each_xml_string("Args", self.args(), XML_STRING_MAX_LEN);
    }
}

impl Validate for BootstrapActionConfig {
    fn check(&self, checker: &mut Checker<'_>) {
        checker
            .required("Name", self.name())
            .xml_string("Name", self.name(), XML_STRING_MAX_LEN_256)
            .required("ScriptBootstrapAction", self.script_bootstrap_action())
            .nested("ScriptBootstrapAction", self.script_bootstrap_action());
    }
}
