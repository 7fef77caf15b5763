//! Markup transform for the analysis text.
//!
//! A pure function over a restricted markdown-like subset: line breaks,
//! `**bold**`, `*italic*`, and `#`/`##`/`###` headings mapped to
//! `<h3>`/`<h4>`/`<h5>`. Bold is resolved before italic so a bold run is
//! never mistaken for nested italics, and headings are recognized on the
//! original lines before the line breaks are folded into `<br>` markers.

use std::sync::OnceLock;

use regex::Regex;

fn bold_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("hardcoded pattern"))
}

fn italic_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("hardcoded pattern"))
}

/// Applies the full transform, or only the line-break rule when
/// `rich_rendering` is off (the legacy form behavior).
pub fn render(text: &str, rich_rendering: bool) -> String {
    if rich_rendering {
        render_rich(text)
    } else {
        render_line_breaks(text)
    }
}

/// Line breaks only.
pub fn render_line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

fn render_rich(text: &str) -> String {
    let bolded = bold_pattern().replace_all(text, "<strong>$1</strong>");
    let emphasized = italic_pattern().replace_all(&bolded, "<em>$1</em>");
    emphasized
        .split('\n')
        .map(heading_line)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn heading_line(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("### ") {
        format!("<h5>{rest}</h5>")
    } else if let Some(rest) = line.strip_prefix("## ") {
        format!("<h4>{rest}</h4>")
    } else if let Some(rest) = line.strip_prefix("# ") {
        format!("<h3>{rest}</h3>")
    } else {
        line.to_string()
    }
}
