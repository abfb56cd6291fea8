//! The workbench: store, registry and presenters behind one entry point

use std::sync::mpsc;
use std::time::Instant;

use commandex_core::presenters::{
    CommandActions, CommandExecutor, CommandPaletteView, CommandsExplorerView, NotificationManager,
    PartDescriptor, PartStackType, TracingNotificationManager, WorkspaceAgent,
};
use commandex_core::{
    log_op_end, log_op_error, log_op_start, Command, CommandEvent, CommandPalette, CommandStore,
    CommandsExplorer, GoalRegistry, GroupedCommands, SubscriptionId, TextView,
};
use commandex_core_types::RequestId;
use tracing::{debug, info};

use crate::config::CommandexConfig;
use crate::EngineResult;

/// Views and services the presenters talk to
pub struct Collaborators {
    pub explorer_view: Box<dyn CommandsExplorerView>,
    pub palette_view: Box<dyn CommandPaletteView>,
    pub notifications: Box<dyn NotificationManager>,
    pub workspace_agent: Box<dyn WorkspaceAgent>,
    pub executor: Box<dyn CommandExecutor>,
}

impl Collaborators {
    /// Text views plus log-only services
    pub fn headless(explorer_view: TextView, palette_view: TextView) -> Self {
        Self {
            explorer_view: Box::new(explorer_view),
            palette_view: Box::new(palette_view),
            notifications: Box::new(TracingNotificationManager),
            workspace_agent: Box::new(LoggingWorkspaceAgent),
            executor: Box::new(LoggingExecutor),
        }
    }
}

/// Workspace agent with no layout; records placement in the log
#[derive(Debug, Default)]
pub struct LoggingWorkspaceAgent;

impl WorkspaceAgent for LoggingWorkspaceAgent {
    fn open_part(&mut self, part: &PartDescriptor, stack: PartStackType) {
        debug!(part = part.id, stack = ?stack, "open part");
    }

    fn set_active_part(&mut self, part: &PartDescriptor) {
        debug!(part = part.id, "activate part");
    }
}

/// Executor that only records the request
#[derive(Debug, Default)]
pub struct LoggingExecutor;

impl CommandExecutor for LoggingExecutor {
    fn execute(&mut self, command: &Command) {
        info!(
            command_name = %command.name,
            command_line = %command.command_line,
            "command execution requested"
        );
    }
}

/// A user operation against the workbench
#[derive(Debug, Clone, PartialEq)]
pub enum WorkbenchCommand {
    /// Show the explorer (immediate refresh)
    Open,
    WsAgentStarted,
    /// Add a fully formed command
    AddCommand(Command),
    /// Create a command of this type in the explorer's selected goal
    CreateCommand { type_id: String },
    DuplicateCommand { name: String },
    UpdateCommand { name: String, command: Command },
    RemoveCommand { name: String },
    ShowPalette,
    FilterPalette { filter: String },
    ExecuteCommand { name: String },
}

impl WorkbenchCommand {
    /// Operation name used in boundary log events
    pub fn op_name(&self) -> &'static str {
        match self {
            WorkbenchCommand::Open => "explorer_open",
            WorkbenchCommand::WsAgentStarted => "ws_agent_started",
            WorkbenchCommand::AddCommand(_) => "command_add",
            WorkbenchCommand::CreateCommand { .. } => "command_create",
            WorkbenchCommand::DuplicateCommand { .. } => "command_duplicate",
            WorkbenchCommand::UpdateCommand { .. } => "command_update",
            WorkbenchCommand::RemoveCommand { .. } => "command_remove",
            WorkbenchCommand::ShowPalette => "palette_show",
            WorkbenchCommand::FilterPalette { .. } => "palette_filter",
            WorkbenchCommand::ExecuteCommand { .. } => "command_execute",
        }
    }

    fn command_name(&self) -> Option<&str> {
        match self {
            WorkbenchCommand::AddCommand(c) => Some(&c.name),
            WorkbenchCommand::DuplicateCommand { name }
            | WorkbenchCommand::UpdateCommand { name, .. }
            | WorkbenchCommand::RemoveCommand { name }
            | WorkbenchCommand::ExecuteCommand { name } => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkbenchOutcome {
    Done,
    /// The command that was created or duplicated
    Command(Command),
    /// Create was requested with no goal selected in the explorer
    NoGoalSelected,
    /// Palette contents after show/filter
    Palette(GroupedCommands),
}

/// Owns the store, the registry and both presenters
///
/// Every `apply` is one logged operation. Store events raised during the
/// operation are routed to the explorer afterwards, so the explorer sees them
/// in emission order and re-arms its refresh.
pub struct Workbench {
    store: CommandStore,
    registry: GoalRegistry,
    explorer: CommandsExplorer,
    palette: CommandPalette,
    store_events: mpsc::Receiver<CommandEvent>,
    subscription: Option<SubscriptionId>,
    selected: Option<String>,
}

impl Workbench {
    /// # Errors
    ///
    /// Fails if the configured goals cannot be registered.
    pub fn new(
        config: &CommandexConfig,
        mut store: CommandStore,
        collaborators: Collaborators,
    ) -> EngineResult<Self> {
        let registry = config.build_registry()?;

        let (tx, rx) = mpsc::channel();
        let subscription = store.subscribe(move |event: &CommandEvent| {
            // Receiver lives as long as the workbench.
            let _ = tx.send(event.clone());
        });

        let explorer = CommandsExplorer::new(
            collaborators.explorer_view,
            collaborators.notifications,
            collaborators.workspace_agent,
            config.refresh_delay(),
        );
        let palette = CommandPalette::new(collaborators.palette_view, collaborators.executor);

        Ok(Self {
            store,
            registry,
            explorer,
            palette,
            store_events: rx,
            subscription: Some(subscription),
            selected: None,
        })
    }

    pub fn store(&self) -> &CommandStore {
        &self.store
    }

    pub fn registry(&self) -> &GoalRegistry {
        &self.registry
    }

    pub fn selected_command(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Run one operation
    ///
    /// # Errors
    ///
    /// The failing operation's error, tagged with the op name and request id.
    /// Create, duplicate and remove failures (unknown names included) have
    /// already been notified.
    pub fn apply(
        &mut self,
        command: WorkbenchCommand,
        now: Instant,
    ) -> EngineResult<WorkbenchOutcome> {
        let op = command.op_name();
        let request_id = RequestId::new();
        let command_name = command.command_name().unwrap_or_default().to_string();
        let start = Instant::now();

        log_op_start!(op, request_id = %request_id, command_name = %command_name);

        let result = self.dispatch(command);
        let routed = self.route_store_events(now);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(outcome) => {
                log_op_end!(
                    op,
                    duration_ms = duration_ms,
                    request_id = %request_id,
                    events = routed
                );
                Ok(outcome)
            }
            Err(err) => {
                log_op_error!(op, err.clone(), duration_ms = duration_ms, request_id = %request_id);
                Err(err.with_op(op).with_request_id(request_id))
            }
        }
    }

    fn dispatch(&mut self, command: WorkbenchCommand) -> EngineResult<WorkbenchOutcome> {
        match command {
            WorkbenchCommand::Open => {
                self.explorer.open(&self.store, &self.registry);
                Ok(WorkbenchOutcome::Done)
            }
            WorkbenchCommand::WsAgentStarted => {
                self.explorer.on_ws_agent_started();
                Ok(WorkbenchOutcome::Done)
            }
            WorkbenchCommand::AddCommand(command) => {
                self.store.add_command(command)?;
                Ok(WorkbenchOutcome::Done)
            }
            WorkbenchCommand::CreateCommand { type_id } => {
                match self.explorer.on_command_add(&mut self.store, &type_id)? {
                    Some(created) => {
                        self.selected = Some(created.name.clone());
                        Ok(WorkbenchOutcome::Command(created))
                    }
                    None => Ok(WorkbenchOutcome::NoGoalSelected),
                }
            }
            WorkbenchCommand::DuplicateCommand { name } => {
                let copy = self.explorer.on_duplicate_named(&mut self.store, &name)?;
                self.selected = Some(copy.name.clone());
                Ok(WorkbenchOutcome::Command(copy))
            }
            WorkbenchCommand::UpdateCommand { name, command } => {
                self.store.update_command(&name, command)?;
                Ok(WorkbenchOutcome::Done)
            }
            WorkbenchCommand::RemoveCommand { name } => {
                self.explorer.on_remove_named(&mut self.store, &name)?;
                if self.selected.as_deref() == Some(name.as_str()) {
                    self.selected = None;
                }
                Ok(WorkbenchOutcome::Done)
            }
            WorkbenchCommand::ShowPalette => Ok(WorkbenchOutcome::Palette(
                self.palette.show_dialog(&self.store, &self.registry),
            )),
            WorkbenchCommand::FilterPalette { filter } => Ok(WorkbenchOutcome::Palette(
                self.palette
                    .on_filter_changed(&self.store, &self.registry, &filter),
            )),
            WorkbenchCommand::ExecuteCommand { name } => {
                let command = self.store.get_command(&name)?.clone();
                self.on_command_execute_requested(&command);
                Ok(WorkbenchOutcome::Done)
            }
        }
    }

    /// Hand queued store events to the explorer, in emission order
    fn route_store_events(&mut self, now: Instant) -> usize {
        let mut routed = 0;
        for event in self.store_events.try_iter() {
            debug!(kind = event.kind(), command_name = %event.command().name, "store event");
            self.explorer.on_command_changed(now);
            routed += 1;
        }
        routed
    }

    /// Run the explorer refresh if it is due. Returns true if it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.explorer.tick(now, &self.store, &self.registry)
    }

    pub fn next_refresh_deadline(&self) -> Option<Instant> {
        self.explorer.next_refresh_deadline()
    }

    /// Cancel any pending refresh and detach from the store. Returns true if
    /// a refresh was pending.
    pub fn shutdown(&mut self) -> bool {
        if let Some(id) = self.subscription.take() {
            self.store.unsubscribe(id);
        }
        let cancelled = self.explorer.dispose();
        info!(cancelled_refresh = cancelled, "workbench shut down");
        cancelled
    }
}

impl CommandActions for Workbench {
    fn on_command_selected(&mut self, command: &Command) {
        debug!(command_name = %command.name, "command selected");
        self.selected = Some(command.name.clone());
    }

    fn on_command_execute_requested(&mut self, command: &Command) {
        self.palette.on_command_execute(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commandex_core::presenters::explorer::{DUPLICATE_FAILED_TITLE, REMOVE_FAILED_TITLE};
    use commandex_core::presenters::Notification;
    use commandex_core::{ExErrorKind, Goal};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct Notes(Arc<Mutex<Vec<Notification>>>);

    impl NotificationManager for Notes {
        fn notify(&mut self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    struct Executed(Arc<Mutex<Vec<String>>>);

    impl CommandExecutor for Executed {
        fn execute(&mut self, command: &Command) {
            self.0.lock().unwrap().push(command.name.clone());
        }
    }

    struct Recorders {
        explorer: TextView,
        palette: TextView,
        notes: Arc<Mutex<Vec<Notification>>>,
        executed: Arc<Mutex<Vec<String>>>,
    }

    fn recording_workbench() -> (Workbench, Recorders) {
        let rec = Recorders {
            explorer: TextView::new(),
            palette: TextView::new(),
            notes: Arc::new(Mutex::new(Vec::new())),
            executed: Arc::new(Mutex::new(Vec::new())),
        };
        let collaborators = Collaborators {
            explorer_view: Box::new(rec.explorer.clone()),
            palette_view: Box::new(rec.palette.clone()),
            notifications: Box::new(Notes(rec.notes.clone())),
            workspace_agent: Box::new(LoggingWorkspaceAgent),
            executor: Box::new(Executed(rec.executed.clone())),
        };
        let wb = Workbench::new(&CommandexConfig::default(), CommandStore::new(), collaborators)
            .unwrap();
        (wb, rec)
    }

    fn workbench() -> (Workbench, TextView, TextView) {
        let explorer = TextView::new();
        let palette = TextView::new();
        let wb = Workbench::new(
            &CommandexConfig::default(),
            CommandStore::new(),
            Collaborators::headless(explorer.clone(), palette.clone()),
        )
        .unwrap();
        (wb, explorer, palette)
    }

    #[test]
    fn test_op_names_are_distinct() {
        let ops = [
            WorkbenchCommand::Open.op_name(),
            WorkbenchCommand::ShowPalette.op_name(),
            WorkbenchCommand::RemoveCommand { name: String::new() }.op_name(),
            WorkbenchCommand::DuplicateCommand { name: String::new() }.op_name(),
        ];
        for (i, a) in ops.iter().enumerate() {
            for b in &ops[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_store_changes_arm_refresh() {
        let (mut wb, explorer, _) = workbench();
        let t0 = Instant::now();

        wb.apply(WorkbenchCommand::AddCommand(Command::new("a", "custom")), t0)
            .unwrap();
        assert_eq!(wb.next_refresh_deadline(), Some(t0 + Duration::from_millis(300)));

        assert!(wb.tick(t0 + Duration::from_millis(300)));
        assert!(explorer.rendered().contains("  - a [custom]"));
    }

    #[test]
    fn test_create_uses_selected_goal() {
        let (mut wb, explorer, _) = workbench();
        let t0 = Instant::now();

        let outcome = wb
            .apply(WorkbenchCommand::CreateCommand { type_id: "custom".into() }, t0)
            .unwrap();
        assert_eq!(outcome, WorkbenchOutcome::NoGoalSelected);

        explorer.select_goal(Some(Goal::new("deploy", "Deploy")));
        let outcome = wb
            .apply(WorkbenchCommand::CreateCommand { type_id: "custom".into() }, t0)
            .unwrap();
        match outcome {
            WorkbenchOutcome::Command(c) => assert_eq!(c.goal_id(), Some("deploy")),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(wb.selected_command(), Some("newCommand"));
    }

    #[test]
    fn test_failed_op_does_not_arm_refresh() {
        let (mut wb, _, _) = workbench();
        let err = wb
            .apply(
                WorkbenchCommand::RemoveCommand { name: "ghost".into() },
                Instant::now(),
            )
            .unwrap_err();

        assert_eq!(err.op(), Some("command_remove"));
        assert!(err.request_id().is_some());
        assert!(wb.next_refresh_deadline().is_none());
    }

    #[test]
    fn test_shutdown_cancels_pending_refresh() {
        let (mut wb, explorer, _) = workbench();
        let t0 = Instant::now();
        wb.apply(WorkbenchCommand::AddCommand(Command::new("a", "custom")), t0)
            .unwrap();

        assert!(wb.shutdown());
        assert!(!wb.tick(t0 + Duration::from_secs(5)));
        assert_eq!(explorer.render_count(), 0);
    }

    #[test]
    fn test_update_moves_command_to_new_goal_after_delay() {
        let (mut wb, rec) = recording_workbench();
        let t0 = Instant::now();
        let delay = Duration::from_millis(300);

        let original = Command::new("a", "custom").with_goal("build");
        wb.apply(WorkbenchCommand::AddCommand(original.clone()), t0)
            .unwrap();
        assert!(wb.tick(t0 + delay));
        assert!(rec.explorer.rendered().contains("Build (build)\n  - a [custom]\n"));

        let t1 = t0 + Duration::from_secs(1);
        let moved = original.with_goal("deploy");
        wb.apply(
            WorkbenchCommand::UpdateCommand {
                name: "a".into(),
                command: moved,
            },
            t1,
        )
        .unwrap();
        assert_eq!(wb.next_refresh_deadline(), Some(t1 + delay));

        assert!(!wb.tick(t1 + Duration::from_millis(299)));
        assert!(wb.tick(t1 + delay));

        let text = rec.explorer.rendered();
        assert!(text.contains("Deploy (deploy)\n  - a [custom]\n"));
        assert!(text.contains("Build (build)\n  (no commands)\n"));
        assert_eq!(rec.explorer.render_count(), 2);
    }

    #[test]
    fn test_remove_arms_refresh_and_clears_selection() {
        let (mut wb, rec) = recording_workbench();
        let t0 = Instant::now();
        let a = Command::new("a", "custom");
        wb.apply(WorkbenchCommand::AddCommand(a.clone()), t0).unwrap();
        wb.on_command_selected(&a);
        assert_eq!(wb.selected_command(), Some("a"));

        let t1 = t0 + Duration::from_secs(1);
        wb.apply(WorkbenchCommand::RemoveCommand { name: "a".into() }, t1)
            .unwrap();

        assert_eq!(wb.selected_command(), None);
        assert_eq!(wb.next_refresh_deadline(), Some(t1 + Duration::from_millis(300)));
        assert!(wb.tick(t1 + Duration::from_millis(300)));
        assert!(!rec.explorer.rendered().contains("- a ["));
        assert!(rec.notes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_execute_closes_palette_and_reaches_executor() {
        let (mut wb, rec) = recording_workbench();
        let t0 = Instant::now();
        wb.apply(WorkbenchCommand::AddCommand(Command::new("a", "custom")), t0)
            .unwrap();

        wb.apply(WorkbenchCommand::ShowPalette, t0).unwrap();
        assert!(rec.palette.is_visible());

        wb.apply(WorkbenchCommand::ExecuteCommand { name: "a".into() }, t0)
            .unwrap();
        assert!(!rec.palette.is_visible());
        assert_eq!(*rec.executed.lock().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_execute_unknown_command_reaches_nothing() {
        let (mut wb, rec) = recording_workbench();
        let err = wb
            .apply(
                WorkbenchCommand::ExecuteCommand { name: "ghost".into() },
                Instant::now(),
            )
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert!(rec.executed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_command_selected_updates_selection() {
        let (mut wb, _) = recording_workbench();
        assert_eq!(wb.selected_command(), None);

        wb.on_command_selected(&Command::new("build", "mvn"));
        assert_eq!(wb.selected_command(), Some("build"));

        wb.on_command_selected(&Command::new("run", "custom"));
        assert_eq!(wb.selected_command(), Some("run"));
    }

    #[test]
    fn test_unknown_name_failures_are_notified() {
        let (mut wb, rec) = recording_workbench();
        let now = Instant::now();

        let dup = wb
            .apply(WorkbenchCommand::DuplicateCommand { name: "ghost".into() }, now)
            .unwrap_err();
        let rm = wb
            .apply(WorkbenchCommand::RemoveCommand { name: "ghost".into() }, now)
            .unwrap_err();

        assert_eq!(dup.kind(), ExErrorKind::NotFound);
        assert_eq!(rm.kind(), ExErrorKind::NotFound);

        let notes = rec.notes.lock().unwrap();
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec![DUPLICATE_FAILED_TITLE, REMOVE_FAILED_TITLE]);
        assert!(wb.next_refresh_deadline().is_none());
    }
}
