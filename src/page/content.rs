//! Content slot sources.

use anyhow::{Context, Result};
use pulldown_cmark::{Options, Parser, html};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Read content for the page body.
///
/// `-` reads stdin. Markdown files (`.md`, `.markdown`) are rendered to HTML,
/// anything else is inserted as-is.
pub fn load_content(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read content from stdin")?;
        return Ok(buf);
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file '{}'", path.display()))?;

    let is_markdown = path
        .extension()
        .is_some_and(|ext| ext == "md" || ext == "markdown");

    Ok(if is_markdown {
        markdown_to_html(&source)
    } else {
        source
    })
}

/// Render Markdown to HTML.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_file_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.md");
        fs::write(&path, "# Hello\n\nWorld").unwrap();

        let html = load_content(&path).unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn test_html_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<section># not a heading</section>").unwrap();

        assert_eq!(load_content(&path).unwrap(), "<section># not a heading</section>");
    }

    #[test]
    fn test_missing_file() {
        let err = load_content(Path::new("/nonexistent/index.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content file"));
    }
}
