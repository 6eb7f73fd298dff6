//! Nested selector handling.
//!
//! Nested blocks are flattened at compile time. For each pair of a parent
//! selector and a child selector:
//!
//! - a child containing `&` has every `&` replaced by the parent
//!   (`&:hover` → `.x-a:hover`, `& + &` → `.x-a + .x-a`)
//! - any other child targets descendants (`ul` → `.x-a ul`)
//!
//! Selector lists (`a, button`) on either side expand to the cross product.

/// Splits a comma-separated selector list, ignoring commas nested in
/// parentheses or brackets (`:is(a, b)`, `[data-x="a,b"]`).
pub fn split_selector_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, c) in list.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(list[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}

/// Combines a parent selector list with a nested child selector list.
pub fn combine_selectors(parent: &str, child: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(child);

    let mut combined = Vec::with_capacity(parents.len() * children.len());
    for p in &parents {
        for c in &children {
            if c.contains('&') {
                combined.push(c.replace('&', p));
            } else {
                combined.push(format!("{} {}", p, c));
            }
        }
    }
    combined.join(",")
}
