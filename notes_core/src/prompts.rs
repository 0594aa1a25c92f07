//! User-visible strings.
//!
//! Every prompt and message the console prints lives here, in one UTF-8
//! table.

/// Prompt before reading a note title.
pub const TITLE_PROMPT: &str = "Введіть заголовок: ";

/// Prompt before reading a note body.
pub const TEXT_PROMPT: &str = "Введіть текст: ";

/// Prompt before reading a selection index.
pub const NOTE_NUMBER_PROMPT: &str = "Введіть номер замітки: ";

/// Character the page separator is drawn with.
pub const SEPARATOR_CHAR: char = '=';

/// Width of the page separator when none is configured.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 52;

/// Widest page separator the console will draw.
pub const MAX_SEPARATOR_WIDTH: usize = 1024;

pub const MENU_CREATE: &str = "1) Створити замітку";
pub const MENU_LIST: &str = "2) Список заміток";
pub const MENU_VIEW: &str = "3) Переглянути замітку";
pub const MENU_EXIT: &str = "0) Вихід";
pub const MENU_PROMPT: &str = "Оберіть дію: ";

pub const NOTE_SAVED: &str = "Замітку збережено.";
pub const NO_NOTES: &str = "Заміток поки немає.";
pub const NOTE_NOT_FOUND: &str = "Замітку не знайдено.";
pub const UNKNOWN_COMMAND: &str = "Невідома команда.";
pub const GOODBYE: &str = "До побачення!";
