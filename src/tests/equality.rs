use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::types::{
    CloudWatchAlarmDefinition, HadoopJarStepConfig, InstanceGroupConfig, MarketType, Statistic,
    StepConfig, Tag,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn step(args: &[&str]) -> StepConfig {
    let mut jar = HadoopJarStepConfig::builder().jar("command-runner.jar");
    for arg in args {
        jar = jar.args(*arg);
    }
    StepConfig::builder()
        .name("Setup")
        .action_on_failure("CONTINUE")
        .hadoop_jar_step(jar)
        .build()
}

#[test]
fn test_separately_built_values_are_equal_and_hash_equal() {
    let a = step(&["one", "two"]);
    let b = step(&["one", "two"]);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
#[allow(clippy::eq_op)]
fn test_value_equals_itself() {
    let a = step(&["x"]);
    assert!(a == a);
    assert_eq!(StepConfig::default(), StepConfig::default());
}

#[test]
fn test_set_versus_unset_differs_both_ways() {
    let set = Tag::builder().key("k").build();
    let unset = Tag::default();
    assert_ne!(set, unset);
    assert_ne!(unset, set);
}

#[test]
fn test_list_order_matters() {
    assert_ne!(step(&["a", "b"]), step(&["b", "a"]));
}

#[test]
fn test_symbolic_and_string_enum_values_are_interchangeable() {
    let by_symbol = CloudWatchAlarmDefinition::builder()
        .statistic(Statistic::Average)
        .build();
    let by_string = CloudWatchAlarmDefinition::builder()
        .statistic("AVERAGE")
        .build();
    assert_eq!(by_symbol, by_string);
    assert_eq!(hash_of(&by_symbol), hash_of(&by_string));
    assert_eq!(by_symbol.statistic().unwrap().as_str(), "AVERAGE");
    assert_eq!(by_string.statistic().unwrap().as_str(), "AVERAGE");
}

#[test]
fn test_unknown_enum_values_compare_by_string() {
    let a = InstanceGroupConfig::builder().market("SPOT_BLOCK").build();
    let b = InstanceGroupConfig::builder()
        .market(String::from("SPOT_BLOCK"))
        .build();
    let c = InstanceGroupConfig::builder().market(MarketType::Spot).build();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_values_work_as_set_members() {
    let set: HashSet<StepConfig> = [step(&["a"]), step(&["a"]), step(&["b"])]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_doubles_compare_by_value_inside_shapes() {
    let a = CloudWatchAlarmDefinition::builder().threshold(0.1 + 0.2).build();
    let b = CloudWatchAlarmDefinition::builder().threshold(0.1 + 0.2).build();
    let c = CloudWatchAlarmDefinition::builder().threshold(0.3).build();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
