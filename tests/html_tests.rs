use postcheck::utils::html::html_to_plain_text;

#[test]
fn test_script_and_style_payloads_are_removed() {
    let html = "<html><head><style>body { color: red; }</style>\
                <script>var tracked = true;</script></head>\
                <body><p>Population: 327</p></body></html>";
    let text = html_to_plain_text(html);

    assert_eq!(text, "Population: 327");
    assert!(!text.contains("color"), "Style payload should be removed");
    assert!(!text.contains("tracked"), "Script payload should be removed");
}

#[test]
fn test_images_are_removed_including_alt_text() {
    let html = r#"<p>Before <img src="/map.png" alt="area map"> after</p>"#;
    let text = html_to_plain_text(html);

    assert_eq!(text, "Before after");
    assert!(!text.contains("map"), "Alt text should be discarded");
}

#[test]
fn test_links_keep_visible_text_and_lose_href() {
    let html = r#"<p>See <a href="https://example.com/stats">the statistics page</a>.</p>"#;
    let text = html_to_plain_text(html);

    assert_eq!(text, "See the statistics page.");
    assert!(
        !text.contains("https://") && !text.contains("example.com"),
        "No URL should survive normalization"
    );
}

#[test]
fn test_no_raw_tag_syntax_survives() {
    let html = "<div class=\"stats\"><span>47%</span> male, <span>53%</span> female</div>";
    let text = html_to_plain_text(html);

    assert!(!text.contains('<') && !text.contains('>'));
    assert_eq!(text, "47% male, 53% female");
}

#[test]
fn test_whitespace_collapses_to_single_spaces() {
    let html = "<body>\n   <p>Housing   Tenure</p>\n\n   <p>Owned:  43.3%</p>\n</body>";
    let text = html_to_plain_text(html);

    assert_eq!(text, "Housing Tenure Owned: 43.3%");
}

#[test]
fn test_normalization_is_deterministic() {
    let html = r#"<div><a href="/x">link</a><script>s()</script><p>text  block</p></div>"#;
    assert_eq!(html_to_plain_text(html), html_to_plain_text(html));
}
