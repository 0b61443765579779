//! HTML parser for extracting paper links from a landing page
//!
//! Landing pages mark their outbound paper links with a
//! `data-selenium-selector="paper-link"` attribute on anchor elements. This
//! module finds those anchors and splits them into a direct PDF link and a
//! canonical (non-PDF) source link.

use scraper::{Html, Selector};

/// CSS selector matching anchors tagged as paper links
const PAPER_LINK_SELECTOR: &str = r#"a[data-selenium-selector="paper-link"]"#;

/// Links extracted from one landing page
///
/// Either field is empty when no matching anchor was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperLinks {
    /// Canonical source link (last non-PDF anchor on the page)
    pub source: String,

    /// Direct PDF link (first anchor whose href ends in `.pdf`)
    pub pdf: String,
}

/// Extracts paper links from landing-page HTML
///
/// Among the tagged anchors, the first whose href ends in `.pdf` becomes the
/// PDF link and the last non-PDF href becomes the source link. Pages with no
/// matching anchors yield empty strings for both; this never fails.
///
/// # Example
///
/// ```
/// use scholar_harvest::enrich::extract_paper_links;
///
/// let html = r#"<html><body>
///     <a data-selenium-selector="paper-link" href="paper.pdf">PDF</a>
///     <a data-selenium-selector="paper-link" href="https://example.org/paper">DOI</a>
/// </body></html>"#;
///
/// let links = extract_paper_links(html);
/// assert_eq!(links.pdf, "paper.pdf");
/// assert_eq!(links.source, "https://example.org/paper");
/// ```
pub fn extract_paper_links(html: &str) -> PaperLinks {
    let document = Html::parse_document(html);

    // The selector is a compile-time constant; parsing it cannot fail.
    let selector = match Selector::parse(PAPER_LINK_SELECTOR) {
        Ok(selector) => selector,
        Err(_) => return PaperLinks::default(),
    };

    let mut links = PaperLinks::default();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if href.ends_with(".pdf") {
            if links.pdf.is_empty() {
                links.pdf = href.to_string();
            }
        } else {
            // Last non-PDF anchor wins.
            links.source = href.to_string();
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_and_source_extracted() {
        let html = r#"<html><body>
            <a data-selenium-selector="paper-link" href="paper.pdf">PDF</a>
            <a data-selenium-selector="paper-link" href="https://example.org/paper">DOI</a>
        </body></html>"#;

        let links = extract_paper_links(html);
        assert_eq!(links.pdf, "paper.pdf");
        assert_eq!(links.source, "https://example.org/paper");
    }

    #[test]
    fn test_no_matching_anchors_yields_empty_links() {
        let html = r#"<html><body><a href="https://example.org/other">Other</a></body></html>"#;

        let links = extract_paper_links(html);
        assert_eq!(links, PaperLinks::default());
    }

    #[test]
    fn test_untagged_anchors_are_ignored() {
        let html = r#"<html><body>
            <a href="decoy.pdf">Decoy</a>
            <a data-selenium-selector="paper-link" href="real.pdf">PDF</a>
        </body></html>"#;

        let links = extract_paper_links(html);
        assert_eq!(links.pdf, "real.pdf");
    }

    #[test]
    fn test_first_pdf_wins() {
        let html = r#"<html><body>
            <a data-selenium-selector="paper-link" href="first.pdf">One</a>
            <a data-selenium-selector="paper-link" href="second.pdf">Two</a>
        </body></html>"#;

        let links = extract_paper_links(html);
        assert_eq!(links.pdf, "first.pdf");
    }

    #[test]
    fn test_last_non_pdf_source_wins() {
        let html = r#"<html><body>
            <a data-selenium-selector="paper-link" href="https://example.org/one">One</a>
            <a data-selenium-selector="paper-link" href="https://example.org/two">Two</a>
        </body></html>"#;

        let links = extract_paper_links(html);
        assert_eq!(links.source, "https://example.org/two");
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<html><body>
            <a data-selenium-selector="paper-link">No href</a>
            <a data-selenium-selector="paper-link" href="paper.pdf">PDF</a>
        </body></html>"#;

        let links = extract_paper_links(html);
        assert_eq!(links.pdf, "paper.pdf");
        assert_eq!(links.source, "");
    }

    #[test]
    fn test_pdf_only_page() {
        let html = r#"<html><body>
            <a data-selenium-selector="paper-link" href="paper.pdf">PDF</a>
        </body></html>"#;

        let links = extract_paper_links(html);
        assert_eq!(links.pdf, "paper.pdf");
        assert_eq!(links.source, "");
    }
}
