/// Timer commands that do not fit the current session state. Rejected without touching it.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum InvalidOperation {
    #[error("a timer session is already active")]
    SessionActive,

    #[error("timer is not running")]
    NotRunning,

    #[error("timer is not paused")]
    NotPaused,

    #[error("a task label is required")]
    EmptyTask,

    #[error("task label cannot change while a phase is in progress")]
    TaskLocked,
}
