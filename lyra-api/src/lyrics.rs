//! Lyrics extraction from the upstream lyrics page
//!
//! The page holds one or more `div[data-lyrics-container="true"]` blocks.
//! Each block's text is taken with `<br>` rendered as a line break and every
//! other tag dropped. Double quotes are turned into single quotes, and an
//! empty line is emitted as a lone `"\n"` so blank-line spacing survives.

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{ApiError, ApiResult};

/// Selector for the elements holding lyric text
pub const LYRICS_CONTAINER_SELECTOR: &str = r#"div[data-lyrics-container="true"]"#;

/// Marker emitted in place of an empty line
pub const BLANK_LINE: &str = "\n";

/// Extract lyric lines from a lyrics page, in document order
pub fn extract_lyrics(html: &str) -> ApiResult<Vec<String>> {
    let selector = Selector::parse(LYRICS_CONTAINER_SELECTOR)
        .map_err(|e| ApiError::Internal(format!("invalid lyrics selector: {:?}", e)))?;

    let document = Html::parse_document(html);

    let mut lines = Vec::new();
    for container in document.select(&selector) {
        lines.extend(split_lines(&container_text(container)));
    }

    Ok(lines)
}

/// Text content of a container with `<br>` elements rendered as `\n`
fn container_text(container: ElementRef<'_>) -> String {
    let mut text = String::new();

    for node in container.descendants() {
        match node.value() {
            Node::Text(chunk) => text.push_str(chunk),
            Node::Element(element) if element.name() == "br" => text.push('\n'),
            _ => {}
        }
    }

    text
}

fn split_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n').map(|line| {
        if line.is_empty() {
            BLANK_LINE.to_string()
        } else {
            line.replace('"', "'")
        }
    })
}
