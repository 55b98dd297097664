//! Single-emoji render descriptor

use serde::Serialize;

use crate::types::EmojiRecord;

/// Shown when a record has no name
pub const UNKNOWN_NAME: &str = "unknown";

/// Shown when a record has no category or group
pub const MISSING_LABEL: &str = "-";

/// Everything a shell needs to draw one emoji card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescriptor {
    /// Concatenated `htmlCode` fragments, empty when there are none
    pub glyph_markup: String,
    pub name: String,
    pub category: String,
    pub group: String,
    /// Code points; hidden by the shell when empty
    pub code_list: Vec<String>,
}

impl RenderDescriptor {
    /// Whether the code list should be displayed
    pub fn has_codes(&self) -> bool {
        !self.code_list.is_empty()
    }

    /// Caption line under the name
    pub fn caption(&self) -> String {
        format!("Category: {} · Group: {}", self.category, self.group)
    }

    /// Code points joined for a code block, `None` when there are none
    pub fn code_text(&self) -> Option<String> {
        self.has_codes().then(|| self.code_list.join(", "))
    }

    /// The glyph as text, for shells that do not render HTML
    pub fn glyph(&self) -> String {
        decode_char_refs(&self.glyph_markup)
    }
}

impl From<&EmojiRecord> for RenderDescriptor {
    fn from(record: &EmojiRecord) -> Self {
        RenderDescriptor {
            glyph_markup: record.html_code.concat(),
            name: record.name.clone().unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            category: record
                .category
                .clone()
                .unwrap_or_else(|| MISSING_LABEL.to_string()),
            group: record.group.clone().unwrap_or_else(|| MISSING_LABEL.to_string()),
            code_list: record.unicode.clone(),
        }
    }
}

/// Map one record to its render descriptor
pub fn render_card(record: &EmojiRecord) -> RenderDescriptor {
    RenderDescriptor::from(record)
}

/// Replace `&#NNN;` and `&#xHHH;` references with the characters they name.
/// Anything else, including references to invalid code points, is copied as is.
fn decode_char_refs(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(start) = rest.find("&#") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match parse_char_ref(candidate) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &candidate[len..];
            }
            None => {
                out.push_str("&#");
                rest = &candidate[2..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse a reference at the start of `s`, returning the character and the
/// number of bytes consumed.
fn parse_char_ref(s: &str) -> Option<(char, usize)> {
    let body = s.strip_prefix("&#")?;
    let end = body.find(';')?;
    let digits = &body[..end];

    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            u32::from_str_radix(hex, 16).ok()?
        }
        None if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            digits.parse().ok()?
        }
        _ => return None,
    };

    Some((char::from_u32(code)?, 2 + end + 1))
}
