#[derive(Debug, Clone)]
pub enum Message {
    // === STARTUP MESSAGES ===
    DatabaseConnected,
    TasksTableInitialized,
    DatabaseConnectionFailed(String),
    ServerListening(String),
    UsingDatabase(String),

    // === TASK API MESSAGES ===
    TitleRequired,
    TaskNotFound,
    TasksFetchFailed,
    TaskFetchFailed,
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,
    StorageError(String),

    // === CLIENT MESSAGES ===
    NoTasksYet,
    TasksLoadFailed,
    TaskLoadFailed,
    TaskSaveFailed,
    TaskToggleFailed,
    TaskRemoveFailed,
    ServerReportedError(String),
    ClientErrorDetail(String, String),

    // === CONFIGURATION MESSAGES ===
    ConfigInvalidValue(String, String),
}
