//! HTML content extraction
//!
//! Pulls the two things the crawler needs from a page: its paragraph text
//! and its outbound link targets. The content granularity contract is
//! paragraph-level: only `<p>` element text counts, concatenated with
//! newline separators; headers, lists, and scripts are excluded.

use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Paragraph text, one `<p>` per line
    pub text: String,

    /// Raw href values of all `<a href>` elements, in document order.
    /// Resolution and eligibility checks happen in the coordinator.
    pub links: Vec<String>,
}

/// Parses HTML and extracts paragraph text plus outbound link hrefs
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        text: extract_paragraphs(&document),
        links: extract_hrefs(&document),
    }
}

fn extract_paragraphs(document: &Html) -> String {
    let mut paragraphs = Vec::new();

    if let Ok(selector) = Selector::parse("p") {
        for element in document.select(&selector) {
            paragraphs.push(element.text().collect::<String>());
        }
    }

    paragraphs.join("\n")
}

fn extract_hrefs(document: &Html) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}
