//! Grouping engine
//!
//! Partitions commands into goal buckets. Pure and total: every command lands
//! in exactly one bucket, buckets are keyed by goal id, and commands keep
//! their input order within a bucket.

use std::collections::btree_map::{self, BTreeMap};

use tracing::debug;

use crate::model::{Command, Goal};
use crate::registry::GoalRegistry;

/// One goal and the commands that belong to it
#[derive(Debug, Clone, PartialEq)]
pub struct GoalBucket {
    pub goal: Goal,
    pub commands: Vec<Command>,
}

impl GoalBucket {
    fn new(goal: Goal) -> Self {
        Self {
            goal,
            commands: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Result of one grouping pass, keyed by goal id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedCommands {
    buckets: BTreeMap<String, GoalBucket>,
}

impl GroupedCommands {
    pub fn get(&self, goal_id: &str) -> Option<&GoalBucket> {
        self.buckets.get(goal_id)
    }

    /// Commands in the bucket for `goal_id`, empty if there is no bucket
    pub fn commands_for(&self, goal_id: &str) -> &[Command] {
        self.buckets
            .get(goal_id)
            .map(|b| b.commands.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_goal(&self, goal_id: &str) -> bool {
        self.buckets.contains_key(goal_id)
    }

    /// Buckets ordered by goal label, ties broken by id
    pub fn sorted_by_label(&self) -> Vec<&GoalBucket> {
        let mut buckets: Vec<&GoalBucket> = self.buckets.values().collect();
        buckets.sort_by(|a, b| {
            a.goal
                .label()
                .cmp(b.goal.label())
                .then_with(|| a.goal.id().cmp(b.goal.id()))
        });
        buckets
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn total_commands(&self) -> usize {
        self.buckets.values().map(|b| b.commands.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in goal id order
    pub fn iter(&self) -> btree_map::Values<'_, String, GoalBucket> {
        self.buckets.values()
    }

    fn bucket_mut(&mut self, goal: Goal) -> &mut GoalBucket {
        self.buckets
            .entry(goal.id().to_string())
            .or_insert_with(|| GoalBucket::new(goal))
    }
}

impl<'a> IntoIterator for &'a GroupedCommands {
    type Item = &'a GoalBucket;
    type IntoIter = btree_map::Values<'a, String, GoalBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Group `commands` by goal
///
/// 1. One empty bucket per goal in `goals`.
/// 2. Each command's goal attribute (absent or empty means `default_goal_id`)
///    is resolved with `resolve_goal`; an unresolved id gets a synthesized
///    goal with id and label both set to the raw value.
pub fn group<'c, 'g, C, G, R>(
    commands: C,
    goals: G,
    resolve_goal: R,
    default_goal_id: &str,
) -> GroupedCommands
where
    C: IntoIterator<Item = &'c Command>,
    G: IntoIterator<Item = &'g Goal>,
    R: Fn(&str) -> Option<Goal>,
{
    let mut grouped = GroupedCommands::default();

    for goal in goals {
        grouped.bucket_mut(goal.clone());
    }

    for command in commands {
        let goal_id = command.goal_id().unwrap_or(default_goal_id);
        let goal = resolve_goal(goal_id).unwrap_or_else(|| {
            debug!(
                command_name = %command.name,
                goal_id,
                "unknown goal, synthesizing bucket"
            );
            Goal::synthesized(goal_id)
        });
        grouped.bucket_mut(goal).commands.push(command.clone());
    }

    grouped
}

/// Explorer grouping: a bucket for every registered goal
pub fn group_with_registry<'c, C>(commands: C, registry: &GoalRegistry) -> GroupedCommands
where
    C: IntoIterator<Item = &'c Command>,
{
    group(
        commands,
        registry.goals(),
        |id| registry.resolve(id),
        registry.default_goal_id(),
    )
}

/// Palette grouping: buckets only for goals that have commands
pub fn group_non_empty<'c, C>(commands: C, registry: &GoalRegistry) -> GroupedCommands
where
    C: IntoIterator<Item = &'c Command>,
{
    group(
        commands,
        std::iter::empty(),
        |id| registry.resolve(id),
        registry.default_goal_id(),
    )
}
