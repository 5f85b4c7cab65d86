//! Line formatting.
//!
//! Every value is wrapped in the quote string. A quote occurring inside a
//! value is prefixed with the escape string; nothing else is escaped, so a
//! value holding the delimiter or a line break is written through as-is.

use crate::config::Options;
use crate::schema::Schema;
use std::borrow::Cow;

/// Render one line from an ordered sequence of values
pub fn format_line<I, S>(values: I, options: &Options) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    push_line(&mut line, values, options);
    line
}

/// Header line built from the schema's column names
pub fn format_header(schema: &Schema, options: &Options) -> String {
    format_line(schema.names(), options)
}

/// Generate one record from the schema and render it
pub fn format_record(schema: &mut Schema, options: &Options) -> String {
    format_line(schema.generate_values(), options)
}

/// Append one rendered line to `buf`
///
/// Used by the writer to reuse a single buffer across records.
pub fn push_line<I, S>(buf: &mut String, values: I, options: &Options)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            buf.push_str(&options.delimiter);
        }
        buf.push_str(&options.quote);
        buf.push_str(&escape_value(value.as_ref(), options));
        buf.push_str(&options.quote);
    }
    buf.push_str(&options.new_line);
}

/// Prefix every occurrence of the quote string with the escape string
pub fn escape_value<'a>(value: &'a str, options: &Options) -> Cow<'a, str> {
    // An empty quote has nothing to escape
    if options.quote.is_empty() || !value.contains(options.quote.as_str()) {
        return Cow::Borrowed(value);
    }
    let escaped_quote = format!("{}{}", options.escape, options.quote);
    Cow::Owned(value.replace(options.quote.as_str(), &escaped_quote))
}
