use crate::grouping::GroupedCommands;

/// Placeholder line for a goal without commands
pub const EMPTY_GOAL_MARKER: &str = "(no commands)";

/// Render grouped commands as an indented tree
///
/// Goals are sorted by label; commands keep bucket order. Each command line
/// shows its type id, and its command line when set:
///
/// ```text
/// Build (build)
///   - build [mvn] mvn clean install
/// Common (common)
///   (no commands)
/// ```
pub fn render_grouped(grouped: &GroupedCommands) -> String {
    let mut output = String::new();

    for bucket in grouped.sorted_by_label() {
        output.push_str(&format!("{} ({})\n", bucket.goal.label(), bucket.goal.id()));

        if bucket.commands.is_empty() {
            output.push_str(&format!("  {}\n", EMPTY_GOAL_MARKER));
            continue;
        }

        for command in &bucket.commands {
            output.push_str(&format!("  - {} [{}]", command.name, command.type_id));
            if !command.command_line.is_empty() {
                output.push_str(&format!(" {}", command.command_line));
            }
            output.push('\n');
        }
    }

    output
}
