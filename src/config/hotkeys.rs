//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per view.

use crate::state::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Job list actions
    NavigateNext,
    NavigatePrev,
    SwitchFocus,
    Select,
    NextPage,
    PreviousPage,
    EnterSearch,
    ClearFilter,
    Refresh,
    ToggleTheme,
    ToggleLog,
    Quit,

    // Job detail actions
    ScrollDown,
    ScrollUp,
    CopyApplyUrl,
    Back,

    // Company search actions
    SearchSubmit,
    SearchCancel,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char,
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings for each view. Views missing
/// from a config file keep their defaults.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewHotkeys {
    pub job_list: HashMap<HotkeyAction, Hotkey>,
    pub job_detail: HashMap<HotkeyAction, Hotkey>,
    pub search_mode: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

/// Returns default hotkey mappings for all views.
///
pub fn default_hotkeys() -> ViewHotkeys {
    let job_list = HashMap::from([
        (HotkeyAction::NavigateNext, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::NavigatePrev, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::SwitchFocus, Hotkey::plain(KeyCode::Tab)),
        (HotkeyAction::Select, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::NextPage, Hotkey::plain(KeyCode::Char('l'))),
        (HotkeyAction::PreviousPage, Hotkey::plain(KeyCode::Char('h'))),
        (HotkeyAction::EnterSearch, Hotkey::plain(KeyCode::Char('/'))),
        (HotkeyAction::ClearFilter, Hotkey::plain(KeyCode::Char('c'))),
        (HotkeyAction::Refresh, Hotkey::plain(KeyCode::Char('r'))),
        (HotkeyAction::ToggleTheme, Hotkey::plain(KeyCode::Char('t'))),
        (HotkeyAction::ToggleLog, Hotkey::plain(KeyCode::Char('d'))),
        (HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q'))),
    ]);

    let job_detail = HashMap::from([
        (HotkeyAction::ScrollDown, Hotkey::plain(KeyCode::Char('j'))),
        (HotkeyAction::ScrollUp, Hotkey::plain(KeyCode::Char('k'))),
        (HotkeyAction::CopyApplyUrl, Hotkey::plain(KeyCode::Char('y'))),
        (HotkeyAction::Refresh, Hotkey::plain(KeyCode::Char('r'))),
        (HotkeyAction::ToggleTheme, Hotkey::plain(KeyCode::Char('t'))),
        (HotkeyAction::Back, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::Quit, Hotkey::plain(KeyCode::Char('q'))),
    ]);

    let search_mode = HashMap::from([
        (HotkeyAction::SearchSubmit, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::SearchCancel, Hotkey::plain(KeyCode::Esc)),
    ]);

    ViewHotkeys {
        job_list,
        job_detail,
        search_mode,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action for a KeyEvent in a specific view.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    view: &View,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    let view_hotkeys = match view {
        View::JobList => &hotkeys.job_list,
        View::JobDetail => &hotkeys.job_detail,
    };
    find_action(event, view_hotkeys)
}

/// Gets the action for a KeyEvent while the company search box has focus.
///
pub fn get_action_for_search(event: &KeyEvent, hotkeys: &ViewHotkeys) -> Option<HotkeyAction> {
    find_action(event, &hotkeys.search_mode)
}

fn find_action(event: &KeyEvent, bindings: &HashMap<HotkeyAction, Hotkey>) -> Option<HotkeyAction> {
    bindings
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let paired = paired_action.and_then(|paired| hotkeys.get(&paired));
            Some(match paired {
                Some(paired_hotkey) => format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                ),
                None => format!(" {}: {}", format_hotkey_display(hotkey), description),
            })
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
