use cait_core::{build_accession_title_index, render_nav, render_title_index, NavElementView};
use serde_json::json;
use std::fs;

fn linked(prev: (&str, &str), this: (&str, &str), next: (&str, &str)) -> NavElementView {
    NavElementView {
        prev_label: prev.0.to_string(),
        prev_uri: prev.1.to_string(),
        this_label: this.0.to_string(),
        this_uri: this.1.to_string(),
        next_label: next.0.to_string(),
        next_uri: next.1.to_string(),
        weight: 0,
    }
}

#[test]
fn renders_all_three_fragments_in_order() {
    let nav = linked(("Alpha", "/a/1"), ("Beta", "/a/2"), ("Gamma", "/a/3"));

    assert_eq!(
        render_nav(&nav),
        concat!(
            r#"<a class="prev-item" href="/a/1" title="Alpha">prev</a> "#,
            r#"<span class="this-item" data-uri="/a/2" data-title="Beta">Beta</span> "#,
            r#"<a class="next-item" href="/a/3" title="Gamma">next</a>"#
        )
    );
}

#[test]
fn first_element_renders_current_and_next_only() {
    let nav = linked(("", ""), ("Beta", "/a/2"), ("Gamma", "/a/3"));

    let rendered = render_nav(&nav);
    assert_eq!(
        rendered,
        concat!(
            r#"<span class="this-item" data-uri="/a/2" data-title="Beta">Beta</span> "#,
            r#"<a class="next-item" href="/a/3" title="Gamma">next</a>"#
        )
    );
    assert!(!rendered.starts_with(' '));
    assert!(!rendered.ends_with(' '));
    assert!(!rendered.contains("  "));
}

#[test]
fn fragment_presence_follows_uri_not_label() {
    let nav = linked(("Orphan label", ""), ("Beta", "/a/2"), ("", "/a/3"));

    let rendered = render_nav(&nav);
    assert!(!rendered.contains("prev-item"));
    assert!(rendered.ends_with(r#"<a class="next-item" href="/a/3" title="">next</a>"#));
}

#[test]
fn last_element_renders_previous_and_current_only() {
    let nav = linked(("Alpha", "/a/1"), ("Beta", "/a/2"), ("", ""));

    assert_eq!(
        nav.to_string(),
        concat!(
            r#"<a class="prev-item" href="/a/1" title="Alpha">prev</a> "#,
            r#"<span class="this-item" data-uri="/a/2" data-title="Beta">Beta</span>"#
        )
    );
}

#[test]
fn rendered_index_follows_browsing_order() {
    let root = tempfile::tempdir().unwrap();
    for (name, title, uri) in [("1.json", "Zeta", "/z"), ("2.json", "Eta", "/e")] {
        let doc = json!({"title": title, "uri": uri, "jsonmodel_type": "accession"});
        fs::write(root.path().join(name), doc.to_string()).unwrap();
    }

    let index = build_accession_title_index(root.path()).unwrap();
    let rendered = render_title_index(&index);

    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].0, "/e");
    assert!(rendered[0].1.starts_with(r#"<span class="this-item" data-uri="/e""#));
    assert!(rendered[1].1.starts_with(r#"<a class="prev-item" href="/e" title="Eta">"#));
}
