use std::sync::LazyLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use super::input::KeyAction;

const KEYMAP_SOURCE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/keymap/default.keymap.json"
));

/// Screen state a key press is interpreted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Navigation,
    Editing,
    Repository,
    Modal,
}

impl KeymapContext {
    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "navigation" => Some(KeymapContext::Navigation),
            "editing" => Some(KeymapContext::Editing),
            "repository" => Some(KeymapContext::Repository),
            "modal" => Some(KeymapContext::Modal),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Save,
    Quit,
    ReturnToMenu,
    FieldStep { delta: i32 },
    TabStep { delta: i32 },
    BeginEdit,
    FinishEdit,
    ListSelect { delta: i32 },
    OpenEntry,
    CloseModal,
    ExitModal,
}

impl From<RawAction> for KeyAction {
    fn from(raw: RawAction) -> Self {
        match raw {
            RawAction::Save => KeyAction::Save,
            RawAction::Quit => KeyAction::Quit,
            RawAction::ReturnToMenu => KeyAction::ReturnToMenu,
            RawAction::FieldStep { delta } => KeyAction::FieldStep(delta),
            RawAction::TabStep { delta } => KeyAction::TabStep(delta),
            RawAction::BeginEdit => KeyAction::BeginEdit,
            RawAction::FinishEdit => KeyAction::FinishEdit,
            RawAction::ListSelect { delta } => KeyAction::ListSelect(delta),
            RawAction::OpenEntry => KeyAction::OpenEntry,
            RawAction::CloseModal => KeyAction::CloseModal,
            RawAction::ExitModal => KeyAction::ExitModal,
        }
    }
}

struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    // The keymap is embedded at compile time, so a malformed entry is a build defect.
    fn from_raw(raw: RawEntry) -> Self {
        let contexts = raw
            .contexts
            .iter()
            .filter_map(|ctx| KeymapContext::from_str(ctx))
            .collect::<Vec<_>>();
        assert!(
            !contexts.is_empty(),
            "keymap entry {} must declare at least one context",
            raw.id
        );
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo).unwrap_or_else(|err| {
                    panic!("failed to parse combo '{combo}' for {}: {err}", raw.id)
                })
            })
            .collect::<Vec<_>>();
        assert!(!combos.is_empty(), "keymap entry {} must declare combos", raw.id);
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.as_str())
            .collect::<Vec<_>>()
            .join("/");
        Self {
            action: raw.action.into(),
            contexts,
            combos,
            snippet: format!("{combos_display} {}", raw.description),
        }
    }

    fn matches(&self, context: KeymapContext, key: &KeyEvent) -> Option<KeyAction> {
        if !self.contexts.contains(&context) {
            return None;
        }
        self.combos
            .iter()
            .any(|pattern| pattern.matches(key))
            .then_some(self.action)
    }
}

struct KeyPattern {
    matcher: CodeMatcher,
    required: KeyModifiers,
    allow_shift: bool,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        let mut tokens = display
            .split('+')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain key".into());
        };
        let matcher = CodeMatcher::from_token(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => return Err(format!("unsupported modifier '{other}'")),
            }
        }
        let allow_shift = matcher.allows_extra_shift() && !required.contains(KeyModifiers::SHIFT);
        Ok(Self {
            matcher,
            required,
            allow_shift,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        if !self.matcher.matches(&key.code) || !key.modifiers.contains(self.required) {
            return false;
        }
        let extra = key.modifiers - self.required;
        if self.allow_shift {
            (extra - KeyModifiers::SHIFT).is_empty()
        } else {
            extra.is_empty()
        }
    }
}

enum CodeMatcher {
    Literal(KeyCode),
    Alpha(char),
}

impl CodeMatcher {
    fn from_token(token: &str) -> Result<Self, String> {
        let normalized = token.to_lowercase();
        let matcher = match normalized.as_str() {
            "tab" => CodeMatcher::Literal(KeyCode::Tab),
            "backtab" => CodeMatcher::Literal(KeyCode::BackTab),
            "enter" => CodeMatcher::Literal(KeyCode::Enter),
            "esc" | "escape" => CodeMatcher::Literal(KeyCode::Esc),
            "left" => CodeMatcher::Literal(KeyCode::Left),
            "right" => CodeMatcher::Literal(KeyCode::Right),
            "up" => CodeMatcher::Literal(KeyCode::Up),
            "down" => CodeMatcher::Literal(KeyCode::Down),
            "space" => CodeMatcher::Literal(KeyCode::Char(' ')),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => CodeMatcher::Alpha(ch),
                    _ => return Err(format!("unsupported key '{token}'")),
                }
            }
        };
        Ok(matcher)
    }

    fn matches(&self, code: &KeyCode) -> bool {
        match (self, code) {
            (CodeMatcher::Literal(expected), actual) => actual == expected,
            (CodeMatcher::Alpha(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == *expected
            }
            _ => false,
        }
    }

    fn allows_extra_shift(&self) -> bool {
        matches!(
            self,
            CodeMatcher::Alpha(_) | CodeMatcher::Literal(KeyCode::BackTab)
        )
    }
}

static KEYMAP: LazyLock<Vec<KeyBinding>> = LazyLock::new(|| {
    let raw_entries: Vec<RawEntry> =
        serde_json::from_str(KEYMAP_SOURCE).expect("invalid keymap/default.keymap.json");
    raw_entries.into_iter().map(KeyBinding::from_raw).collect()
});

pub(crate) fn classify_key(context: KeymapContext, key: &KeyEvent) -> Option<KeyAction> {
    KEYMAP
        .iter()
        .find_map(|binding| binding.matches(context, key))
}

pub(crate) fn help_text(context: KeymapContext) -> String {
    KEYMAP
        .iter()
        .filter(|binding| binding.contexts.contains(&context))
        .map(|binding| binding.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" • ")
}
