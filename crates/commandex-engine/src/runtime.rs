//! Tokio task that owns a `Workbench`
//!
//! Requests arrive over an mpsc channel and are answered over oneshot
//! channels. Between requests the task sleeps until the explorer's refresh
//! deadline, so a burst of changes still ends in a single refresh. All
//! timestamps come from tokio's clock, which tests can pause and advance.

use std::time::Duration;

use commandex_core::{Command, ExError, ExErrorKind};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use crate::workbench::{Workbench, WorkbenchCommand, WorkbenchOutcome};
use crate::EngineResult;

const REQUEST_QUEUE_DEPTH: usize = 64;

/// Sleep target when nothing is pending; the branch is disabled anyway
const IDLE_PARK: Duration = Duration::from_secs(3600);

enum Request {
    Apply {
        command: WorkbenchCommand,
        reply: oneshot::Sender<EngineResult<WorkbenchOutcome>>,
    },
    Commands {
        reply: oneshot::Sender<Vec<Command>>,
    },
    Shutdown {
        reply: oneshot::Sender<bool>,
    },
}

/// Client side of a running workbench
#[derive(Debug)]
pub struct WorkbenchHandle {
    tx: mpsc::Sender<Request>,
    task: JoinHandle<()>,
}

/// Move `workbench` onto a tokio task
///
/// Must be called from within a tokio runtime.
pub fn spawn(workbench: Workbench) -> WorkbenchHandle {
    let (tx, rx) = mpsc::channel(REQUEST_QUEUE_DEPTH);
    let task = tokio::spawn(run(workbench, rx));
    WorkbenchHandle { tx, task }
}

async fn run(mut workbench: Workbench, mut rx: mpsc::Receiver<Request>) {
    loop {
        let deadline = workbench.next_refresh_deadline().map(Instant::from_std);
        let park_until = deadline.unwrap_or_else(|| Instant::now() + IDLE_PARK);

        tokio::select! {
            request = rx.recv() => match request {
                Some(Request::Apply { command, reply }) => {
                    let outcome = workbench.apply(command, Instant::now().into_std());
                    if reply.send(outcome).is_err() {
                        debug!("apply caller went away before the reply");
                    }
                }
                Some(Request::Commands { reply }) => {
                    let _ = reply.send(workbench.store().list_commands().to_vec());
                }
                Some(Request::Shutdown { reply }) => {
                    let cancelled = workbench.shutdown();
                    let _ = reply.send(cancelled);
                    break;
                }
                None => {
                    warn!("all workbench handles dropped, shutting down");
                    workbench.shutdown();
                    break;
                }
            },
            _ = sleep_until(park_until), if deadline.is_some() => {
                workbench.tick(Instant::now().into_std());
            }
        }
    }
}

fn unavailable() -> ExError {
    ExError::new(ExErrorKind::Unavailable).with_message("Workbench runtime is not running")
}

impl WorkbenchHandle {
    /// # Errors
    ///
    /// The operation's own error, or `Unavailable` if the task has stopped.
    pub async fn apply(&self, command: WorkbenchCommand) -> EngineResult<WorkbenchOutcome> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request::Apply { command, reply })
            .await
            .map_err(|_| unavailable())?;
        rx.await.map_err(|_| unavailable())?
    }

    /// Snapshot of the store, in store order
    ///
    /// # Errors
    ///
    /// `Unavailable` if the task has stopped.
    pub async fn commands(&self) -> EngineResult<Vec<Command>> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request::Commands { reply })
            .await
            .map_err(|_| unavailable())?;
        rx.await.map_err(|_| unavailable())
    }

    /// Stop the task. No refresh runs after this returns. Returns true if a
    /// pending refresh was cancelled.
    ///
    /// # Errors
    ///
    /// `Unavailable` if the task had already stopped, `Internal` if it
    /// panicked.
    pub async fn shutdown(self) -> EngineResult<bool> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request::Shutdown { reply })
            .await
            .map_err(|_| unavailable())?;
        let cancelled = rx.await.map_err(|_| unavailable())?;
        self.task.await.map_err(|e| {
            ExError::new(ExErrorKind::Internal)
                .with_op("workbench_shutdown")
                .with_message(e.to_string())
        })?;
        Ok(cancelled)
    }
}
