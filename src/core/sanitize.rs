// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Gather an element's text nodes into one normalized line.
pub fn element_text(el: &scraper::ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Like [`element_text`], but skips text inside `script`, `style` and `noscript`.
pub fn visible_text(el: &scraper::ElementRef<'_>) -> String {
    let parts: Vec<&str> = el
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| matches!(e.name(), "script" | "style" | "noscript"))
            });
            (!hidden).then_some(&**text)
        })
        .collect();
    normalize_ws(&parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Air\n\t Max\u{a0} 1 "), "Air Max 1");
        assert_eq!(normalize_ws(""), "");
    }
}
