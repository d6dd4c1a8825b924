use insta::assert_snapshot;
use yare::parameterized;

use crate::types::{
    ActionOnFailure, Application, HadoopJarStepConfig, KeyValue, ScalingConstraints, StepConfig,
    Tag, VolumeSpecification,
};

#[test]
fn test_step_config_display() {
    let step = StepConfig::builder()
        .name("Setup")
        .action_on_failure(ActionOnFailure::Continue)
        .hadoop_jar_step(
            HadoopJarStepConfig::builder()
                .jar("command-runner.jar")
                .args("state-pusher-script"),
        )
        .build();

    let text = step.to_string();
    assert!(text.starts_with("{Name: Setup,ActionOnFailure: CONTINUE,HadoopJarStep: {"));
    assert!(text.ends_with("}}"));
    assert_snapshot!(text, @"{Name: Setup,ActionOnFailure: CONTINUE,HadoopJarStep: {Jar: command-runner.jar,Args: [state-pusher-script]}}");
}

#[test]
fn test_empty_values_display_as_braces() {
    assert_eq!(StepConfig::default().to_string(), "{}");
    assert_eq!(Tag::default().to_string(), "{}");
    assert_eq!(VolumeSpecification::default().to_string(), "{}");
}

#[parameterized(
    first_only = { Tag::builder().key("team").build(), "{Key: team}" },
    last_only = { Tag::builder().value("data").build(), "{Value: data}" },
    both = { Tag::builder().key("team").value("data").build(), "{Key: team,Value: data}" },
    empty_string = { Tag::builder().key("").build(), "{Key: }" },
)]
fn test_unset_fields_are_omitted(tag: Tag, expected: &str) {
    assert_eq!(tag.to_string(), expected);
}

#[test]
fn test_fields_follow_declaration_order() {
    let constraints = ScalingConstraints::builder()
        .max_capacity(10)
        .min_capacity(2)
        .build();
    assert_eq!(constraints.to_string(), "{MinCapacity: 2,MaxCapacity: 10}");
}

#[test]
fn test_collections_render_inline() {
    let mut builder = Application::builder().name("Hue");
    builder.args = Some(Vec::new());
    assert_eq!(builder.build().to_string(), "{Name: Hue,Args: []}");

    let jar = HadoopJarStepConfig::builder()
        .properties(KeyValue::builder().key("a").value("1"))
        .properties(KeyValue::builder().key("b").value("2"))
        .build();
    assert_eq!(
        jar.to_string(),
        "{Properties: [{Key: a,Value: 1}, {Key: b,Value: 2}]}"
    );
}

#[test]
fn test_unknown_enum_values_display_verbatim() {
    let step = StepConfig::builder().action_on_failure("PAUSE_FOREVER").build();
    assert_eq!(step.to_string(), "{ActionOnFailure: PAUSE_FOREVER}");
}

#[test]
fn test_debug_names_the_shape() {
    let tag = Tag::builder().key("k").build();
    let debug = format!("{tag:?}");
    assert!(debug.starts_with("Tag {"));
    assert!(debug.contains("\"k\""));
}

#[parameterized(
    huge = { 1e21, "{Threshold: 1.0E21}" },
    tiny = { 1e-7, "{Threshold: 1.0E-7}" },
    plain = { 75.0, "{Threshold: 75.0}" },
)]
fn test_threshold_display_uses_exponent_outside_plain_range(threshold: f64, expected: &str) {
    let alarm = crate::types::CloudWatchAlarmDefinition::builder()
        .threshold(threshold)
        .build();
    assert_eq!(alarm.to_string(), expected);
}
