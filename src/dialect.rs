//! Line-level CSV dialect: comma delimiter, double-quote quoting.
//!
//! [`split_line()`] turns one line (without its terminator) into fields and
//! [`escape_field()`] turns one field back into its on-disk form. The pair is
//! deliberately lenient: malformed quoting never fails, it is absorbed into
//! the field being built.

use std::borrow::Cow;

use itertools::Itertools;

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';

/// Splits a single line into fields.
///
/// Inside a quoted section a doubled quote yields one literal quote and a lone
/// quote closes the section. Outside, a quote opens a section and is dropped.
/// An unterminated quote simply runs to the end of the line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    field.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else if ch == QUOTE {
            in_quotes = true;
        } else if ch == DELIMITER {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(ch);
        }
    }
    fields.push(field);
    fields
}

/// Escapes a field for output.
///
/// Embedded quotes are doubled, then the value is wrapped in quotes when it
/// contains a delimiter, a quote or a newline. Plain values are borrowed.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    let doubled: Cow<'_, str> = if value.contains(QUOTE) {
        Cow::Owned(value.replace(QUOTE, "\"\""))
    } else {
        Cow::Borrowed(value)
    };
    if doubled.contains([DELIMITER, QUOTE, '\n']) {
        Cow::Owned(format!("{QUOTE}{doubled}{QUOTE}"))
    } else {
        doubled
    }
}

/// Escapes every field and joins them with the delimiter (no terminator).
pub fn join_fields<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|field| escape_field(field.as_ref()).into_owned())
        .join(",")
}
