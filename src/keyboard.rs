//! Inline keyboard builder.
//!
//! Pure data-structure builder, no I/O: rows of buttons assembled
//! incrementally, serialized once into an attachment value.

use serde::Serialize;
use serde_json::Value;

/// Button behavior on tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    /// Sends a callback payload back to the bot.
    Callback,
    /// Opens a URL.
    Link,
}

/// One inline button. Whether a callback button carries a payload or
/// a link button carries a URL is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: ButtonKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Builder for inline button layouts.
///
/// ```
/// use max_messenger::keyboard::{ButtonKind, InlineKeyboard};
///
/// let mut kb = InlineKeyboard::new();
/// kb.button("Yes", ButtonKind::Callback, Some("yes"), None)
///     .button("No", ButtonKind::Callback, Some("no"), None)
///     .row()
///     .button("Docs", ButtonKind::Link, None, Some("https://dev.max.ru"));
/// let attachment = kb.to_attachment();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InlineKeyboard {
    rows: Vec<Vec<Button>>,
}

impl InlineKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty row and make it current.
    pub fn row(&mut self) -> &mut Self {
        self.rows.push(Vec::new());
        self
    }

    /// Append a button to the current row. If no row exists yet, a
    /// first one is created implicitly.
    pub fn button(
        &mut self,
        text: impl Into<String>,
        kind: ButtonKind,
        payload: Option<&str>,
        url: Option<&str>,
    ) -> &mut Self {
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        let row = self.rows.last_mut().unwrap();
        row.push(Button {
            kind,
            text: text.into(),
            payload: payload.map(str::to_string),
            url: url.map(str::to_string),
        });
        self
    }

    /// Rows built so far.
    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// Serialize into the attachment shape the API expects:
    /// `{"type": "inline_keyboard", "payload": {"buttons": [[...]]}}`.
    pub fn to_attachment(&self) -> Value {
        serde_json::json!({
            "type": "inline_keyboard",
            "payload": {
                "buttons": self.rows
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_button_before_any_row_creates_one_row() {
        let mut kb = InlineKeyboard::new();
        kb.button("A", ButtonKind::Callback, Some("a"), None);
        assert_eq!(kb.rows().len(), 1);
        assert_eq!(kb.rows()[0].len(), 1);
        assert_eq!(kb.rows()[0][0].text, "A");
    }

    #[test]
    fn test_explicit_rows_and_sizes() {
        let mut kb = InlineKeyboard::new();
        kb.row()
            .button("A", ButtonKind::Callback, Some("a"), None)
            .button("B", ButtonKind::Callback, Some("b"), None)
            .row()
            .button("C", ButtonKind::Callback, Some("c"), None);
        assert_eq!(kb.rows().len(), 2);
        assert_eq!(kb.rows()[0].len(), 2);
        assert_eq!(kb.rows()[1].len(), 1);
    }

    #[test]
    fn test_attachment_shape() {
        let mut kb = InlineKeyboard::new();
        kb.button("Open", ButtonKind::Link, None, Some("https://dev.max.ru"));
        let attachment = kb.to_attachment();
        assert_eq!(
            attachment,
            json!({
                "type": "inline_keyboard",
                "payload": {
                    "buttons": [[
                        {"type": "link", "text": "Open", "url": "https://dev.max.ru"}
                    ]]
                }
            })
        );
    }

    #[test]
    fn test_optional_button_keys_are_omitted() {
        let mut kb = InlineKeyboard::new();
        kb.button("Plain", ButtonKind::Callback, None, None);
        let attachment = kb.to_attachment();
        let button = &attachment["payload"]["buttons"][0][0];
        assert!(button.get("payload").is_none());
        assert!(button.get("url").is_none());
        assert_eq!(button["type"], "callback");
    }

    #[test]
    fn test_empty_keyboard_serializes_empty_rows() {
        let kb = InlineKeyboard::new();
        assert_eq!(kb.to_attachment()["payload"]["buttons"], json!([]));
    }
}
