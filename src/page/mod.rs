//! Page shell composition.
//!
//! Fixed order: `<html>` attributes and `<head>`, header region, content,
//! footer region.

mod content;
mod region;

pub use content::load_content;
pub use region::{Footer, Header, Region};

use crate::config::StructuredDataConfig;
use crate::data::PageData;
use crate::seo::{self, Head};

/// Always first in `<head>`, ahead of the projected tags.
const BASE_HEAD: &str = concat!(
    "<meta charset=\"utf-8\">\n",
    "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, shrink-to-fit=no\">\n",
);

/// A page assembled from its head and body regions.
pub struct PageShell<'a> {
    pub head: Head,
    pub header: &'a dyn Region,
    pub content: &'a str,
    pub footer: &'a dyn Region,
}

impl PageShell<'_> {
    /// Render the complete HTML document.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096 + self.content.len());

        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!("<html{}>\n", self.head.html));
        out.push_str("<head>\n");
        out.push_str(BASE_HEAD);
        out.push_str(&self.head.render());
        out.push_str("</head>\n<body>\n");

        self.header.render(&mut out);

        out.push_str("<main>\n");
        out.push_str(self.content);
        if !self.content.is_empty() && !self.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</main>\n");

        self.footer.render(&mut out);

        out.push_str("</body>\n</html>\n");
        out
    }
}

/// Render a page for `data` with the default header and footer.
pub fn render_page(data: &PageData, structured: &StructuredDataConfig, content: &str) -> String {
    let header = Header {
        title: &data.site.title,
        icon: data.image.as_ref(),
        count: data.tutorial_count,
    };
    let footer = Footer {
        title: &data.site.title,
    };

    PageShell {
        head: seo::site_head(&data.site, structured),
        header: &header,
        content,
        footer: &footer,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn page_data() -> PageData {
        let config = test_parse_config("");
        PageData {
            site: config.site,
            image: None,
            tutorial_count: 2,
        }
    }

    #[test]
    fn test_region_order() {
        let html = render_page(&page_data(), &StructuredDataConfig::default(), "<p>Body</p>");

        let positions: Vec<usize> = [
            "<!DOCTYPE html>",
            r#"<html itemscope itemtype="http://schema.org/WebPage" lang="en">"#,
            "<meta charset=\"utf-8\">",
            r#"<title lang="en">Acme</title>"#,
            "</head>",
            "<header>",
            "2 tutorials",
            "<p>Body</p>",
            "<footer>",
            "</html>",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = page_data();
        let structured = StructuredDataConfig::default();
        assert_eq!(
            render_page(&data, &structured, "x"),
            render_page(&data, &structured, "x")
        );
    }

    #[test]
    fn test_custom_regions() {
        struct Banner;
        impl Region for Banner {
            fn render(&self, out: &mut String) {
                out.push_str("<div>banner</div>\n");
            }
        }

        let shell = PageShell {
            head: Head::new(),
            header: &Banner,
            content: "",
            footer: &Banner,
        };
        let html = shell.render();
        assert!(html.contains("<html>\n"));
        assert!(html.contains("<body>\n<div>banner</div>\n<main>\n</main>\n<div>banner</div>\n</body>"));
    }
}
