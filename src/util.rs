pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Visible ASCII only, so the value can be echoed back as a header value.
pub(crate) fn is_header_safe(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_graphic())
}

pub(crate) fn split_comma_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

/// Joins two `Vary` values, dropping case-insensitive duplicates and keeping
/// the first spelling seen.
pub(crate) fn merge_vary(existing: &str, incoming: &str) -> String {
    let mut entries: Vec<&str> = Vec::new();
    for entry in split_comma_list(existing).chain(split_comma_list(incoming)) {
        if entries
            .iter()
            .any(|seen| seen.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        entries.push(entry);
    }
    entries.join(", ")
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
