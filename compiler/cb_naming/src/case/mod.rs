//! Camel-case tokenization.
//!
//! A token boundary sits before character `i > 0` when it is uppercase and
//! either the previous character is not uppercase, or the next character is
//! lowercase. Acronym runs stay together (`HTTPServer` -> `HTTP`, `Server`),
//! digits and underscores stick to the token before them. Case tests are
//! Unicode-aware.

use smallvec::SmallVec;

/// Split `ident` at camel-case boundaries, borrowing from the input.
pub fn split_camel_case(ident: &str) -> SmallVec<[&str; 4]> {
    let chars: Vec<(usize, char)> = ident.char_indices().collect();
    let mut tokens = SmallVec::new();
    let mut start = 0;
    for i in 1..chars.len() {
        let (offset, ch) = chars[i];
        if !ch.is_uppercase() {
            continue;
        }

        let after_non_upper = !chars[i - 1].1.is_uppercase();
        let before_lower = chars.get(i + 1).is_some_and(|(_, next)| next.is_lowercase());
        if after_non_upper || before_lower {
            tokens.push(&ident[start..offset]);
            start = offset;
        }
    }

    if start < ident.len() {
        tokens.push(&ident[start..]);
    }
    tokens
}

#[cfg(test)]
mod tests;
