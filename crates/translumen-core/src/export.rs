//! Saving the translated output

use std::fs;
use std::path::{Path, PathBuf};

/// File name of the plain-text download
pub const TEXT_FILE_NAME: &str = "translumen_output.txt";

/// File name of the HTML export
pub const HTML_FILE_NAME: &str = "translumen_output.html";

/// Placeholder rendered when a translation returned nothing
pub const NO_OUTPUT_HTML: &str = "<em>No output received.</em>";

/// Write the translation as UTF-8 text into `dir`
pub fn download(dir: &Path, body: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(TEXT_FILE_NAME);
    fs::write(&path, body)?;
    tracing::info!(path = %path.display(), bytes = body.len(), "saved translation");
    Ok(path)
}

/// Write the rendered HTML fragment into `dir`
pub fn export_html(dir: &Path, blocks: &[String]) -> std::io::Result<PathBuf> {
    let path = dir.join(HTML_FILE_NAME);
    fs::write(&path, render_html(blocks))?;
    tracing::info!(path = %path.display(), "exported translation as HTML");
    Ok(path)
}

/// Escape the five HTML-significant characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the first block as HTML with line breaks, or the placeholder
pub fn render_html(blocks: &[String]) -> String {
    match blocks.first() {
        Some(content) => escape_html(content).replace('\n', "<br>"),
        None => NO_OUTPUT_HTML.to_string(),
    }
}
