use std::borrow::Cow;

/// Replace `$1` in `template` with the browser's display name, then trim
/// trailing whitespace. Placeholders for any other group expand to nothing.
///
/// Returns borrowed data when the template contains no `$N` placeholders,
/// avoiding allocation entirely in that case.
pub(crate) fn expand<'a>(template: &'a str, name: &str) -> Cow<'a, str> {
    // Fast path: no placeholders → borrow directly from the template.
    if !template.contains('$') {
        return Cow::Borrowed(template.trim_end());
    }

    let mut result = String::with_capacity(template.len() + name.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    chars.next();
                    if d == '1' {
                        result.push_str(name);
                    }
                    continue;
                }
            }
        }
        result.push(c);
    }

    let trimmed_len = result.trim_end().len();
    result.truncate(trimmed_len);
    Cow::Owned(result)
}
