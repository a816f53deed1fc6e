//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Render a node cycle as `a → b → c → a`
pub fn format_cycle(nodes: &[String]) -> String {
    match nodes.first() {
        Some(first) => {
            let mut parts: Vec<&str> = nodes.iter().map(String::as_str).collect();
            parts.push(first);
            parts.join(" → ")
        }
        None => String::new(),
    }
}
