use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};

use crate::action::Action;

/// Flat mapping from key sequences to actions.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// Shortest label among the sequences bound to `action`, ties broken
    /// alphabetically.
    pub fn key_for(&self, action: &Action) -> Option<String> {
        self.iter()
            .filter(|(_, bound)| *bound == action)
            .map(|(sequence, _)| key_sequence_label(sequence))
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }

    /// Key hints such as `q quit · m menu`. Unbound actions are left out, and
    /// actions sharing a label show their keys joined by `/`.
    pub fn hints(&self) -> String {
        let hints = [
            (vec![Action::Quit], "quit"),
            (vec![Action::ToggleMenu], "menu"),
            (vec![Action::NextPage], "page"),
            (vec![Action::SelectNext, Action::SelectPrevious], "select"),
        ];
        hints
            .iter()
            .filter_map(|(actions, label)| {
                let keys: Vec<String> =
                    actions.iter().filter_map(|action| self.key_for(action)).collect();
                (!keys.is_empty()).then(|| format!("{} {label}", keys.join("/")))
            })
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|sequence| (sequence, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(KeyBindings(keybindings))
    }
}

/// Parses `<ctrl-c>`, `<q>`, `<g><g>` and friends.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            seq.strip_suffix('>').unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

/// Inverse of [`parse_key_sequence`] without the angle brackets: `gg`,
/// `ctrl-c`, `tab`.
pub fn key_sequence_label(sequence: &[KeyEvent]) -> String {
    sequence.iter().map(key_event_label).collect()
}

fn key_event_label(key: &KeyEvent) -> String {
    let mut label = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        label.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        label.push_str("alt-");
    }
    let shifted = !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab);
    if shifted && key.modifiers.contains(KeyModifiers::SHIFT) {
        label.push_str("shift-");
    }
    let code = match key.code {
        KeyCode::Esc => String::from("esc"),
        KeyCode::Enter => String::from("enter"),
        KeyCode::Left => String::from("left"),
        KeyCode::Right => String::from("right"),
        KeyCode::Up => String::from("up"),
        KeyCode::Down => String::from("down"),
        KeyCode::Home => String::from("home"),
        KeyCode::End => String::from("end"),
        KeyCode::PageUp => String::from("pageup"),
        KeyCode::PageDown => String::from("pagedown"),
        KeyCode::BackTab => String::from("backtab"),
        KeyCode::Backspace => String::from("backspace"),
        KeyCode::Delete => String::from("delete"),
        KeyCode::Insert => String::from("insert"),
        KeyCode::Tab => String::from("tab"),
        KeyCode::Char(' ') => String::from("space"),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(number) => format!("f{number}"),
        other => format!("{other:?}").to_ascii_lowercase(),
    };
    label.push_str(&code);
    label
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let lowercase = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&lowercase);
    // Keep the original case for single characters so `<G>` stays distinct
    // from `<g>`.
    let remaining = if remaining.chars().count() == 1 {
        &raw[raw.len() - remaining.len()..]
    } else {
        remaining
    };
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.len() > 1 && c.starts_with('f') => {
            let number = c[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{raw}`"))?;
            KeyCode::F(number)
        }
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse `{raw}`"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(KeyEvent::new(code, modifiers))
}
