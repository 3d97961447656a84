pub const PHOTOREAL_STYLE: &str = include_str!("../data/prompts/photoreal_style.txt");
pub const NEGATIVE_PROMPT: &str = include_str!("../data/prompts/negative.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Append the fixed photographic qualifiers to a prompt.
///
/// Not idempotent: feeding the output back in appends the qualifiers again,
/// so callers enrich a prompt exactly once.
pub fn enrich(prompt: &str) -> String {
    render(PHOTOREAL_STYLE.trim_end(), &[("prompt", prompt)])
}

pub fn negative_prompt() -> &'static str {
    NEGATIVE_PROMPT.trim()
}
