// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! HTML adapter for the annotation view port.

use html_escape::encode_safe;
use std::fmt::Write as _;

use crate::item::{DisplayItem, DisplayValue};
use crate::port::AnnotationView;

/// Icon element rendered before every annotation.
pub const INFO_ICON: &str = r#"<arc-icon class="info-icon" icon="infoOutline"></arc-icon>"#;

/// Host element tag used by [`HtmlView::to_html`].
const HOST_TAG: &str = "api-annotation-document";

/// Renders annotations to an HTML fragment and tracks host attributes.
///
/// Visibility maps to the `hidden` and `aria-hidden` attributes of the host
/// element. Both are absent until the first [`set_visible`] call.
///
/// [`set_visible`]: AnnotationView::set_visible
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlView {
    hidden: bool,
    aria_hidden: Option<bool>,
    markup: String,
}

impl HtmlView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the host carries the `hidden` attribute.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Value of the `aria-hidden` attribute, once set.
    pub fn aria_hidden(&self) -> Option<&'static str> {
        self.aria_hidden.map(|h| if h { "true" } else { "false" })
    }

    /// Inner markup of the last render.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Host element with attributes wrapping the inner markup.
    pub fn to_html(&self) -> String {
        let mut out = format!("<{HOST_TAG}");
        if let Some(aria) = self.aria_hidden() {
            let _ = write!(out, r#" aria-hidden="{aria}""#);
        }
        if self.hidden {
            out.push_str(r#" hidden="true""#);
        }
        let _ = write!(out, ">{}</{HOST_TAG}>", self.markup);
        out
    }

    fn render_item(out: &mut String, item: &DisplayItem) {
        let name = item.name.as_deref().unwrap_or_default();
        let _ = write!(
            out,
            r#"<div class="custom-property">{INFO_ICON}<div class="info-value"><span class="name">{}</span>"#,
            encode_safe(name)
        );
        match &item.value {
            DisplayValue::None => {}
            DisplayValue::Scalar(value) => {
                let _ = write!(
                    out,
                    r#"<span class="value"><span class="scalar-value">{}</span></span>"#,
                    encode_safe(value)
                );
            }
            DisplayValue::Pairs(pairs) => {
                out.push_str(r#"<span class="value">"#);
                for (label, value) in pairs {
                    let _ = write!(
                        out,
                        r#"<span class="scalar-value">{}: {}</span>"#,
                        encode_safe(label),
                        encode_safe(value)
                    );
                }
                out.push_str("</span>");
            }
        }
        out.push_str("</div></div>");
    }
}

impl AnnotationView for HtmlView {
    fn set_visible(&mut self, visible: bool) {
        self.aria_hidden = Some(!visible);
        self.hidden = !visible;
    }

    fn render(&mut self, items: &[DisplayItem]) {
        self.markup.clear();
        for item in items {
            Self::render_item(&mut self.markup, item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visibility_drives_host_attributes() {
        let mut view = HtmlView::new();
        assert_eq!(view.aria_hidden(), None);
        assert_eq!(view.to_html(), "<api-annotation-document></api-annotation-document>");

        view.set_visible(false);
        assert!(view.is_hidden());
        assert_eq!(view.aria_hidden(), Some("true"));

        view.set_visible(true);
        assert!(!view.is_hidden());
        assert_eq!(view.aria_hidden(), Some("false"));
        assert!(!view.to_html().contains("hidden=\"true\""));
    }

    #[test]
    fn scalar_item_markup() {
        let mut view = HtmlView::new();
        view.render(&[DisplayItem {
            name: Some("deprecated".into()),
            value: DisplayValue::Scalar("true".into()),
        }]);
        assert_eq!(
            view.markup(),
            format!(
                r#"<div class="custom-property">{INFO_ICON}<div class="info-value"><span class="name">deprecated</span><span class="value"><span class="scalar-value">true</span></span></div></div>"#
            )
        );
    }

    #[test]
    fn name_only_item_has_no_value_span() {
        let mut view = HtmlView::new();
        view.render(&[DisplayItem {
            name: Some("annotationTest".into()),
            value: DisplayValue::None,
        }]);
        assert!(view.markup().contains(r#"<span class="name">annotationTest</span>"#));
        assert!(!view.markup().contains(r#"class="value""#));
    }

    #[test]
    fn text_is_escaped() {
        let mut view = HtmlView::new();
        view.render(&[DisplayItem {
            name: Some("<b>".into()),
            value: DisplayValue::Pairs(vec![("a&b".into(), "\"q\"".into())]),
        }]);
        assert!(view.markup().contains("&lt;b&gt;"));
        assert!(view.markup().contains("a&amp;b: &quot;q&quot;"));
    }

    #[test]
    fn rerender_replaces_markup() {
        let mut view = HtmlView::new();
        view.render(&[DisplayItem {
            name: Some("one".into()),
            value: DisplayValue::None,
        }]);
        view.render(&[]);
        assert_eq!(view.markup(), "");
    }
}
