//! String tokenizer
//!
//! Splits on any character of a delimiter set. Adjacent delimiters yield
//! empty tokens, but a single trailing delimiter does not.

/// Tab and newline
pub const DEFAULT_DELIMITERS: &str = "\t\n";

/// Split `s` into tokens separated by any character in `delims`
pub fn tokenize_string(s: &str, delims: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    tokenize_into(s, &mut tokens, delims);
    tokens
}

/// Append the tokens of `s` to `out`
pub fn tokenize_into(s: &str, out: &mut Vec<String>, delims: &str) {
    let mut rest = s;
    while !rest.is_empty() {
        match rest.char_indices().find(|&(_, c)| delims.contains(c)) {
            Some((end, delim)) => {
                out.push(rest[..end].to_string());
                rest = &rest[end + delim.len_utf8()..];
            }
            None => {
                out.push(rest.to_string());
                break;
            }
        }
    }
}
