//! Shared string helpers for log lines and console previews.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview: newlines collapsed to spaces, truncated with `...`
pub fn preview(s: &str, max_bytes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_bytes {
        return flat;
    }
    format!("{}...", truncate_str(&flat, max_bytes))
}

/// JSON values embedded in agent text, in order of preference.
///
/// Fenced ` ```json ` (or bare ` ``` `) blocks come first, then the whole
/// text parsed as JSON. Blocks that do not parse are skipped.
pub fn json_candidates(text: &str) -> Vec<serde_json::Value> {
    let mut found: Vec<serde_json::Value> = Vec::new();
    let mut in_block = false;
    let mut current_block = String::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if !in_block && (trimmed == "```json" || trimmed == "```") {
            in_block = true;
            current_block.clear();
        } else if in_block && trimmed == "```" {
            in_block = false;
            if let Ok(parsed) = serde_json::from_str(&current_block) {
                found.push(parsed);
            }
        } else if in_block {
            current_block.push_str(line);
            current_block.push('\n');
        }
    }

    if let Ok(parsed) = serde_json::from_str(text) {
        found.push(parsed);
    }
    found
}
