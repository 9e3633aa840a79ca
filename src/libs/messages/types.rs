use crate::libs::task::Column;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskAlreadyExists(String),
    TaskTextEmpty,
    TaskMoved(String, Column, Column),
    TaskAlreadyInColumn(String, Column),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskIdAmbiguous(String, Vec<String>),
    ConfirmDeleteTask(String),
    DeleteCancelled,

    // === BOARD MESSAGES ===
    BoardHeader,
    BoardEmpty,
    ColumnEmpty(Column),
    ColumnCountsTodo(usize, usize),
    ColumnCount(usize),

    // === CHALLENGE MESSAGES ===
    ChallengeAdded(String, u32),
    ChallengeCatalogHeader,

    // === SWIPE MESSAGES ===
    SwipeIgnored(String, Column),

    // === GEM MESSAGES ===
    GemsAwarded(u32, u64),
    GemsBalance(u64),
    GemsUpdated(u64),

    // === SOUND THEME MESSAGES ===
    ThemeListHeader,
    ThemeCurrent(String),
    ThemeSet(String),
    ThemePreviewHeader(String, String),
    ThemeSaveFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReset,
    ConfigModuleBoard,
    PromptSelectModules,
    PromptDefaultXp,
    PromptConfirmDelete,

    // === ERROR MESSAGES ===
    StorageOpenFailed(String),
    ConfigReadFailed(String),
}
