//! Compact JSON rendering for [`Value`].

use core::fmt::{self, Write};

use crate::{Kind, Value};

impl fmt::Display for Value<'_> {
    /// Render as compact JSON text.
    ///
    /// Non-finite floats have no JSON form and render as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Kind::Null => f.write_str("null"),
            Kind::Bool => {
                let b = self.as_bool() == Some(true);
                f.write_str(if b { "true" } else { "false" })
            }
            Kind::Number => self
                .as_number()
                .map_or(Ok(()), |n| fmt::Display::fmt(&n, f)),
            Kind::String => write_escaped(f, self.as_str().unwrap_or_default()),
            Kind::Array => {
                f.write_char('[')?;
                for (i, item) in self.as_array().into_iter().flatten().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_char(']')
            }
            Kind::Object => {
                f.write_char('{')?;
                if let Some(object) = self.as_object() {
                    for (i, (key, value)) in object.iter().enumerate() {
                        if i > 0 {
                            f.write_char(',')?;
                        }
                        write_escaped(f, key)?;
                        f.write_char(':')?;
                        fmt::Display::fmt(value, f)?;
                    }
                }
                f.write_char('}')
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        let escape = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\u{08}' => "\\b",
            '\u{0c}' => "\\f",
            c if c < ' ' => "",
            _ => continue,
        };
        f.write_str(&s[start..i])?;
        if escape.is_empty() {
            write!(f, "\\u{:04x}", c as u32)?;
        } else {
            f.write_str(escape)?;
        }
        start = i + c.len_utf8();
    }
    f.write_str(&s[start..])?;
    f.write_char('"')
}
