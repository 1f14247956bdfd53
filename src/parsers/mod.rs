pub mod rating;
pub mod seller;

pub use rating::*;
pub use seller::*;

use scraper::{ElementRef, Node};
use url::Url;

/// Collapse every whitespace run to a single space and trim the ends
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Approximate the rendered text of an element the way a browser reports it:
/// whitespace inside a line is collapsed, `<br>` and block boundaries become
/// line breaks, blank lines are dropped.
pub fn inner_text(element: ElementRef<'_>) -> String {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return String::new();
    }

    let mut raw = String::new();
    push_rendered(element, &mut raw);

    raw.lines()
        .map(clean_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_rendered(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                // Source newlines are formatting, not rendered breaks
                out.push_str(&text.replace(|c: char| c == '\n' || c == '\r', " "));
            }
            Node::Element(el) => {
                let tag = el.name();
                if SKIPPED_TAGS.contains(&tag) {
                    continue;
                }
                if tag == "br" {
                    out.push('\n');
                    continue;
                }
                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCK_TAGS.contains(&tag);
                if block {
                    out.push('\n');
                }
                push_rendered(child_ref, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// True when one of the element's own text nodes (not its descendants') contains `needle`.
pub fn own_text_contains(element: ElementRef<'_>, needle: &str) -> bool {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .any(|text| text.contains(needle))
}

/// Resolve an `href` against the page it was found on, as a browser's `href` property does.
pub fn resolve_href(base_url: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match Url::parse(base_url) {
        Ok(base) => base.join(href).ok().map(|u| u.to_string()),
        Err(_) => Url::parse(href).ok().map(|u| u.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        doc.select(&Selector::parse(css).unwrap()).next().unwrap()
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Acme \n\t Traders  "), "Acme Traders");
    }

    #[test]
    fn inner_text_breaks_on_blocks_and_br() {
        let doc = Html::parse_fragment(
            "<div id='x'>Sold by:\n   Acme   Traders<br>Fulfilled<div>Ships fast</div><script>var a;</script></div>",
        );
        let text = inner_text(first(&doc, "#x"));
        assert_eq!(text, "Sold by: Acme Traders\nFulfilled\nShips fast");
    }

    #[test]
    fn own_text_ignores_descendants() {
        let doc = Html::parse_fragment("<div id='outer'><span id='inner'>Sold by</span></div>");
        assert!(!own_text_contains(first(&doc, "#outer"), "Sold by"));
        assert!(own_text_contains(first(&doc, "#inner"), "Sold by"));
    }

    #[test]
    fn resolve_href_joins_relative_links() {
        assert_eq!(
            resolve_href("https://www.amazon.in/s?k=kettle", "/dp/B0TEST").as_deref(),
            Some("https://www.amazon.in/dp/B0TEST")
        );
        assert_eq!(
            resolve_href("https://www.amazon.in/s", "https://other.example/p").as_deref(),
            Some("https://other.example/p")
        );
        assert_eq!(resolve_href("https://www.amazon.in/s", "   "), None);
    }
}
