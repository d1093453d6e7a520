//! Markup rendering for navigation elements.
//!
//! Output is the exact fragment vocabulary consumed by page templates; values
//! are inserted as-is.

use super::nav::{NavElementView, TitleIndex};
use std::fmt::{Display, Formatter};

/// Renders `prev`, `this` and `next` fragments for one element.
///
/// Each fragment is emitted only when its URI is non-empty. Present fragments
/// are joined by single spaces.
pub fn render_nav(nav: &NavElementView) -> String {
    let mut fragments = Vec::with_capacity(3);
    if !nav.prev_uri.is_empty() {
        fragments.push(format!(
            r#"<a class="prev-item" href="{}" title="{}">prev</a>"#,
            nav.prev_uri, nav.prev_label
        ));
    }
    if !nav.this_uri.is_empty() {
        fragments.push(format!(
            r#"<span class="this-item" data-uri="{}" data-title="{}">{}</span>"#,
            nav.this_uri, nav.this_label, nav.this_label
        ));
    }
    if !nav.next_uri.is_empty() {
        fragments.push(format!(
            r#"<a class="next-item" href="{}" title="{}">next</a>"#,
            nav.next_uri, nav.next_label
        ));
    }
    fragments.join(" ")
}

/// Renders every element of `index` in browsing order as `(uri, markup)`.
pub fn render_title_index(index: &TitleIndex) -> Vec<(String, String)> {
    index
        .iter()
        .map(|nav| (nav.this_uri.clone(), render_nav(nav)))
        .collect()
}

impl Display for NavElementView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_nav(self))
    }
}

#[cfg(test)]
mod tests {
    use super::render_nav;
    use crate::view::nav::NavElementView;

    #[test]
    fn empty_element_renders_nothing() {
        assert_eq!(render_nav(&NavElementView::default()), "");
    }

    #[test]
    fn previous_only_renders_single_fragment() {
        let mut nav = NavElementView::default();
        nav.prev_uri = "/a/1".to_string();
        nav.prev_label = "First".to_string();
        assert_eq!(
            render_nav(&nav),
            r#"<a class="prev-item" href="/a/1" title="First">prev</a>"#
        );
    }
}
