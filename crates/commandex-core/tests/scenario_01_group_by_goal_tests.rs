/// Scenario 1: Group Commands By Goal
///
/// Commands with a goal land in that goal's bucket, commands without one land
/// in the default goal, and every known goal gets a bucket.
mod common;

use commandex_core::{group, group_with_registry, Goal, GoalRegistry};
use common::{cmd, names};

fn resolver(goals: &[Goal]) -> impl Fn(&str) -> Option<Goal> + '_ {
    move |id| goals.iter().find(|g| g.id() == id).cloned()
}

#[test]
fn test_scenario_01_commands_split_between_build_and_common() {
    // GIVEN commands build(goal=build), run(goal=build), custom(no goal)
    let commands = vec![
        cmd("build", Some("build")),
        cmd("run", Some("build")),
        cmd("custom", None),
    ];

    // AND goals {build, common}
    let goals = vec![Goal::new("build", "Build"), Goal::new("common", "Common")];

    // WHEN grouping with "common" as default
    let grouped = group(&commands, &goals, resolver(&goals), "common");

    // THEN build holds build and run, in store order
    assert_eq!(names(grouped.commands_for("build")), vec!["build", "run"]);

    // AND common holds custom
    assert_eq!(names(grouped.commands_for("common")), vec!["custom"]);

    // AND there are no other buckets
    assert_eq!(grouped.bucket_count(), 2);
}

#[test]
fn test_scenario_01_unknown_goal_gets_own_bucket() {
    // GIVEN a single command with goal "nonexistent"
    let commands = vec![cmd("x", Some("nonexistent"))];

    // AND only the common goal is known
    let goals = vec![Goal::new("common", "Common")];

    // WHEN grouping
    let grouped = group(&commands, &goals, resolver(&goals), "common");

    // THEN common exists and is empty
    assert!(grouped.get("common").unwrap().commands.is_empty());

    // AND a synthesized bucket holds x
    let bucket = grouped.get("nonexistent").expect("synthesized bucket");
    assert_eq!(bucket.goal, Goal::new("nonexistent", "nonexistent"));
    assert_eq!(bucket.goal.label(), "nonexistent");
    assert_eq!(names(&bucket.commands), vec!["x"]);
}

#[test]
fn test_scenario_01_empty_store_shows_all_registered_goals() {
    // GIVEN the predefined registry and no commands
    let registry = GoalRegistry::new();

    // WHEN grouping
    let grouped = group_with_registry(&[], &registry);

    // THEN every predefined goal has an empty bucket
    for goal in registry.goals() {
        let bucket = grouped.get(goal.id()).expect("bucket per goal");
        assert!(bucket.commands.is_empty());
    }
    assert_eq!(grouped.total_commands(), 0);
}

#[test]
fn test_scenario_01_registered_label_wins_over_id() {
    // GIVEN a registry where "build" is labelled "Compile"
    let mut registry = GoalRegistry::new();
    registry.register(Goal::new("build", "Compile")).unwrap();

    // WHEN grouping a build command
    let commands = vec![cmd("b", Some("build"))];
    let grouped = group_with_registry(&commands, &registry);

    // THEN the bucket carries the registered label
    assert_eq!(grouped.get("build").unwrap().goal.label(), "Compile");
}

#[test]
fn test_scenario_01_grouping_is_idempotent() {
    // GIVEN a fixed store and registry
    let registry = GoalRegistry::new();
    let commands = vec![
        cmd("a", Some("test")),
        cmd("b", None),
        cmd("c", Some("weird")),
    ];

    // WHEN grouping twice
    let first = group_with_registry(&commands, &registry);
    let second = group_with_registry(&commands, &registry);

    // THEN the results are equal
    assert_eq!(first, second);
}
