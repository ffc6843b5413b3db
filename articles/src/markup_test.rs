use super::*;

#[test]
fn escape_html_covers_all_five_characters() {
    assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
    assert_eq!(escape_html("plain text"), "plain text");
    assert_eq!(escape_html(""), "");
}

#[test]
fn escape_html_is_not_idempotent_on_entities() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn inline_html_renders_code_spans() {
    assert_eq!(
        inline_html("If object props are recreated each render, `React.memo` gains disappear."),
        "If object props are recreated each render, <code>React.memo</code> gains disappear."
    );
    assert_eq!(inline_html("`Vec<T>`"), "<code>Vec&lt;T&gt;</code>");
}

#[test]
fn inline_html_escapes_plain_text() {
    assert_eq!(inline_html("a < b & c"), "a &lt; b &amp; c");
    assert_eq!(inline_html(r#"It's "fine""#), "It&#39;s &quot;fine&quot;");
}

#[test]
fn inline_html_never_emits_script_tags() {
    for input in [
        "<script>alert(1)</script>",
        "Before <script>alert(1)</script> after",
        "`<script>`",
        "text\n<script src=x></script>",
    ] {
        let out = inline_html(input);
        assert!(!out.contains("<script"), "{input:?} rendered as {out:?}");
        assert!(out.contains("&lt;script"), "{input:?} rendered as {out:?}");
    }
}

#[test]
fn inline_html_demotes_raw_html_to_text() {
    let out = inline_html("Inline <b onclick=\"x()\">bold</b> html");
    assert!(!out.contains("<b"));
    assert!(out.contains("&lt;b onclick=&quot;x()&quot;&gt;"));
}

#[test]
fn inline_html_leaves_link_syntax_as_text() {
    let out = inline_html("[click me](javascript:alert(1))");
    assert_eq!(out, "[click me](javascript:alert(1))");
}

#[test]
fn inline_html_does_not_interpret_block_markers() {
    assert_eq!(inline_html("1. x"), "1. x");
    assert_eq!(inline_html("- bullet"), "- bullet");
    assert_eq!(inline_html("# not a heading"), "# not a heading");
    assert_eq!(inline_html("> quoted"), "&gt; quoted");
}

#[test]
fn inline_html_keeps_source_characters_verbatim() {
    assert_eq!(inline_html("a\\_b"), "a\\_b");
    assert_eq!(inline_html("fn*args*here"), "fn*args*here");
    assert_eq!(inline_html("Use &lt;div&gt; literally"), "Use &amp;lt;div&amp;gt; literally");
    assert_eq!(inline_html("two  spaces\nnext line"), "two  spaces\nnext line");
}

#[test]
fn inline_html_renders_code_spans_inside_block_markers() {
    assert_eq!(inline_html("1. call `run()` first"), "1. call <code>run()</code> first");
    assert_eq!(inline_html("**bold** `x` *em*"), "**bold** <code>x</code> *em*");
}

#[test]
fn inline_html_has_no_paragraph_wrapper() {
    let out = inline_html("one line");
    assert_eq!(out, "one line");
}

#[test]
fn builtin_prose_renders_without_raw_markup() {
    for article in crate::Catalog::builtin() {
        for section in &article.content {
            for text in section.paragraphs.iter().chain(section.key_points.iter()) {
                let out = inline_html(text);
                let stripped = out.replace("<code>", "").replace("</code>", "");
                assert!(!stripped.contains('<'), "{} rendered as {out:?}", article.slug);
            }
        }
    }
}
