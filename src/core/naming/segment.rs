//! Pure string functions turning free-form source text into agent-id
//! segments. No function here touches the filesystem or an AST.

/// Insert a `-` at every lowercase/digit → uppercase boundary, and between
/// an uppercase run and a following uppercase-then-lowercase pair (handles
/// acronym runs like `MyHTTPClient` → `My-HTTP-Client`).
fn split_camel_boundaries(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if lower_to_upper || acronym_end {
                out.push('-');
            }
        }
        out.push(c);
    }
    out
}

fn collapse_dashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_dash = false;
    for c in input.chars() {
        if c == '-' {
            if !prev_dash {
                out.push('-');
            }
            prev_dash = true;
        } else {
            out.push(c);
            prev_dash = false;
        }
    }
    out
}

/// Sanitize a free-form string into an agent-id segment matching
/// `[a-z][a-z0-9-]*` (or an empty string, if nothing survives).
pub fn sanitize_segment(input: &str) -> String {
    let split = split_camel_boundaries(input);
    let mut s: String = split.to_lowercase();
    s = s
        .chars()
        .map(|c| if c.is_whitespace() || c == '_' { '-' } else { c })
        .collect();
    s = s
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' { c } else { '-' })
        .collect();
    s = collapse_dashes(&s);
    s = s.trim_matches('-').to_string();
    s = s.trim_start_matches(|c: char| c.is_ascii_digit()).to_string();
    s.trim_matches('-').to_string()
}

/// Split a route path into sanitized segments, dropping empties.
pub fn route_segments(route: &str) -> Vec<String> {
    route
        .split('/')
        .map(sanitize_segment)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Sanitize a label string into one segment.
pub fn label_segment(label: &str) -> String {
    sanitize_segment(label)
}

/// Sanitize a component name into one segment.
pub fn component_segment(component: &str) -> String {
    sanitize_segment(component)
}

/// Strip a `handle`/`on` prefix from an event-handler identifier, lowercase
/// the first remaining character, then sanitize.
pub fn handler_segment(handler: &str) -> String {
    let stripped: &str = if handler.len() > "handle".len() && handler.starts_with("handle") {
        &handler["handle".len()..]
    } else if handler.len() > "on".len()
        && handler.starts_with("on")
        && handler[2..].chars().next().is_some_and(|c| c.is_uppercase())
    {
        &handler["on".len()..]
    } else {
        handler
    };

    let mut chars = stripped.chars();
    let lowered = match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    sanitize_segment(&lowered)
}
