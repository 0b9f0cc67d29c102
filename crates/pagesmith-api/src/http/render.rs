//! Server-side page rendering.
//!
//! A [`Page`] is a title plus an ordered list of [`ContentItem`]s; the
//! renderer turns it into one HTML document. Buttons live inside forms
//! bound to a handler route, so every transition is an ordinary POST.
//!
//! Generated artifacts are re-displayed verbatim through
//! [`ContentItem::EmbeddedHtml`] -- trusting model output is the contract
//! here. Everything else is escaped. The debug surface goes further and
//! replaces angle brackets with parentheses so the debug page itself can
//! never render embedded markup.

/// One display item on a page, rendered in order.
#[derive(Debug, Clone)]
pub enum ContentItem {
    Heading(String),
    Text(String),
    /// Preformatted block, escaped.
    Pre(String),
    /// Raw markup inserted verbatim.
    EmbeddedHtml(String),
    Link {
        label: String,
        href: String,
    },
    /// A form posting its fields to `action` when its button is activated.
    Form {
        action: String,
        items: Vec<ContentItem>,
    },
    TextInput {
        name: String,
        value: String,
    },
    TextArea {
        name: String,
        value: String,
    },
    Button(String),
}

/// An ordered page of content items.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub items: Vec<ContentItem>,
}

impl Page {
    pub fn new(title: impl Into<String>, items: Vec<ContentItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Render a page to a complete HTML document.
pub fn render_page(page: &Page) -> String {
    let mut body = String::new();
    for item in &page.items {
        render_item(&mut body, item);
    }
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{body}</body></html>\n",
        escape(&page.title)
    )
}

fn render_item(out: &mut String, item: &ContentItem) {
    match item {
        ContentItem::Heading(text) => {
            out.push_str(&format!("<h2>{}</h2>\n", escape(text)));
        }
        ContentItem::Text(text) => {
            out.push_str(&format!("<p>{}</p>\n", escape(text)));
        }
        ContentItem::Pre(text) => {
            out.push_str(&format!("<pre>{}</pre>\n", escape(text)));
        }
        ContentItem::EmbeddedHtml(html) => {
            out.push_str(html);
            out.push('\n');
        }
        ContentItem::Link { label, href } => {
            out.push_str(&format!(
                "<p><a href=\"{}\">{}</a></p>\n",
                escape(href),
                escape(label)
            ));
        }
        ContentItem::Form { action, items } => {
            out.push_str(&format!("<form method=\"post\" action=\"{}\">\n", escape(action)));
            for inner in items {
                render_item(out, inner);
            }
            out.push_str("</form>\n");
        }
        ContentItem::TextInput { name, value } => {
            out.push_str(&format!(
                "<input type=\"text\" name=\"{}\" value=\"{}\">\n",
                escape(name),
                escape(value)
            ));
        }
        ContentItem::TextArea { name, value } => {
            out.push_str(&format!(
                "<textarea name=\"{}\" rows=\"4\" cols=\"60\">{}</textarea>\n",
                escape(name),
                escape(value)
            ));
        }
        ContentItem::Button(label) => {
            out.push_str(&format!("<button type=\"submit\">{}</button>\n", escape(label)));
        }
    }
}

/// Replace angle brackets with parentheses for the debug surface.
pub fn paren_escape(text: &str) -> String {
    text.replace('<', "(").replace('>', ")")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_render_in_order() {
        let page = Page::new(
            "Test",
            vec![
                ContentItem::Heading("First".to_string()),
                ContentItem::Text("Second".to_string()),
            ],
        );
        let html = render_page(&page);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains("<title>Test</title>"));
    }

    #[test]
    fn test_text_is_escaped_but_embedded_html_is_not() {
        let page = Page::new(
            "Test",
            vec![
                ContentItem::Text("<b>not bold</b>".to_string()),
                ContentItem::EmbeddedHtml("<b>bold</b>".to_string()),
            ],
        );
        let html = render_page(&page);
        assert!(html.contains("&lt;b&gt;not bold&lt;/b&gt;"));
        assert!(html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_form_wraps_fields_and_button() {
        let page = Page::new(
            "Test",
            vec![ContentItem::Form {
                action: "/s/abc/site/build".to_string(),
                items: vec![
                    ContentItem::TextInput {
                        name: "description".to_string(),
                        value: "a \"quoted\" value".to_string(),
                    },
                    ContentItem::Button("Build".to_string()),
                ],
            }],
        );
        let html = render_page(&page);
        assert!(html.contains("action=\"/s/abc/site/build\""));
        assert!(html.contains("name=\"description\""));
        assert!(html.contains("a &quot;quoted&quot; value"));
        assert!(html.contains("<button type=\"submit\">Build</button>"));
    }

    #[test]
    fn test_paren_escape_disarms_markup() {
        assert_eq!(
            paren_escape("<html><body></body></html>"),
            "(html)(body)(/body)(/html)"
        );
    }
}
