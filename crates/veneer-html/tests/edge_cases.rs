//! Edge case tests for veneer-html
//!
//! Template markup as components write it.

use veneer_html::parse_fragment;

#[test]
fn test_leading_style_elements_keep_position() {
    let frag = parse_fragment("<link rel=\"stylesheet\" href=\"a.css\"><style>p{}</style><p>hi</p>")
        .unwrap();

    assert_eq!(
        frag.to_html(),
        r#"<link rel="stylesheet" href="a.css"><style>p{}</style><p>hi</p>"#
    );
}

#[test]
fn test_slots_and_attributes() {
    let frag = parse_fragment("<header part=\"title\"><slot name=\"title\"></slot></header><slot></slot>")
        .unwrap();

    assert_eq!(frag.len(), 2);
    assert_eq!(
        frag.to_html(),
        r#"<header part="title"><slot name="title"></slot></header><slot></slot>"#
    );
}

#[test]
fn test_comments_preserved() {
    let frag = parse_fragment("<div><!-- icon --></div>").unwrap();
    assert_eq!(frag.to_html(), "<div><!-- icon --></div>");
}

#[test]
fn test_nested_template_content() {
    let frag = parse_fragment("<template><li>row</li></template>").unwrap();
    assert_eq!(frag.to_html(), "<template><li>row</li></template>");
}

#[test]
fn test_text_only_template() {
    let frag = parse_fragment("Hello &amp; welcome").unwrap();
    assert_eq!(frag.len(), 1);
    assert_eq!(frag.to_html(), "Hello &amp; welcome");
}

#[test]
fn test_uppercase_tags_normalized() {
    let frag = parse_fragment("<DIV ID=\"x\"></DIV>").unwrap();
    assert_eq!(frag.to_html(), r#"<div id="x"></div>"#);
}

#[test]
fn test_formatting_whitespace_kept() {
    let frag = parse_fragment("<ul>\n  <li>a</li>\n</ul>").unwrap();
    assert_eq!(frag.to_html(), "<ul>\n  <li>a</li>\n</ul>");
}

#[test]
fn test_table_rows_in_template() {
    let frag = parse_fragment("<tr><td>x</td><td>y</td></tr>").unwrap();
    assert_eq!(frag.len(), 1);
    assert_eq!(frag.to_html(), "<tr><td>x</td><td>y</td></tr>");
}
