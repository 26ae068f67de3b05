use reader_core::types::EntryId;

use crate::entry_form_view::EntryFormView;
use crate::prompt_view::{ConfirmView, PromptView};
use crate::settings_view::SettingsView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Library,
    Reader,
    /// Source pages of the open document.
    Document,
}

pub(super) enum Overlay {
    Import(PromptView),
    ConfirmDelete { id: EntryId, view: ConfirmView },
    Settings(SettingsView),
    /// Add a new text when `editing` is `None`, otherwise edit that entry.
    EntryForm {
        editing: Option<EntryId>,
        form: EntryFormView,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PromptCommand {
    Cancel,
    Submit,
    Backspace,
    Insert(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FormCommand {
    Cancel,
    Save,
    NextField,
    Enter,
    Backspace,
    Insert(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SettingsCommand {
    Close,
    Up,
    Down,
    Change(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Command {
    Exit,
    Prompt(PromptCommand),
    Form(FormCommand),
    Settings(SettingsCommand),
    ConfirmDelete,
    CancelDelete,
    OpenSettings,
    CursorUp,
    CursorDown,
    OpenEntry,
    StartImport,
    StartAdd,
    StartEdit,
    RequestDelete,
    TogglePlay,
    SkipBack,
    Restart,
    AdjustWpm(i32),
    ToggleDocument,
    Back,
    DocNextPage,
    DocPrevPage,
    DocScroll(i16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CommandOutcome {
    Continue,
    Exit,
}
