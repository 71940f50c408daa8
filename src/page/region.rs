//! Header and footer regions.
//!
//! Regions are opaque to the shell: they receive their props and write markup.

use crate::data::ImageDescriptor;
use crate::utils::html::{escape, escape_attr};
use crate::utils::plural::plural_count;
use std::fmt::Write;

/// A block of body markup placed by the page shell.
pub trait Region {
    fn render(&self, out: &mut String);
}

/// Site header: icon, title and tutorial count.
pub struct Header<'a> {
    pub title: &'a str,
    pub icon: Option<&'a ImageDescriptor>,
    pub count: usize,
}

impl Region for Header<'_> {
    fn render(&self, out: &mut String) {
        out.push_str("<header>\n");
        out.push_str(r#"<a href="/" class="brand">"#);
        if let Some(icon) = self.icon {
            write!(
                out,
                r#"<img src="{}" width="{}" height="{}" alt="">"#,
                escape_attr(&icon.src),
                icon.width,
                icon.height
            )
            .unwrap();
        }
        writeln!(out, "<span>{}</span></a>", escape(self.title)).unwrap();
        writeln!(
            out,
            r#"<span class="count">{}</span>"#,
            plural_count(self.count, "tutorial")
        )
        .unwrap();
        out.push_str("</header>\n");
    }
}

/// Site footer.
pub struct Footer<'a> {
    pub title: &'a str,
}

impl Region for Footer<'_> {
    fn render(&self, out: &mut String) {
        writeln!(out, "<footer>\n<p>{}</p>\n</footer>", escape(self.title)).unwrap();
    }
}
