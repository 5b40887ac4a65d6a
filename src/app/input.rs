/// Editor command a key press resolves to under the active keymap context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Save,
    Quit,
    ReturnToMenu,
    FieldStep(i32),
    TabStep(i32),
    BeginEdit,
    FinishEdit,
    ListSelect(i32),
    OpenEntry,
    CloseModal,
    ExitModal,
}
