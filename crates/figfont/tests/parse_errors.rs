use figfont::{test_support::FontSource, Font, FontError, Layout, LayoutMode, PrintDirection};

fn parse(text: &str) -> Result<Font, FontError> {
    Font::parse("fixture", text.as_bytes())
}

#[test]
fn empty_stream() {
    assert!(matches!(parse(""), Err(FontError::EmptyFont)));
}

#[test]
fn missing_signature_is_malformed_header() {
    let source = FontSource::new(1).build().replacen("flf2a", "xxx2a", 1);
    assert!(matches!(parse(&source), Err(FontError::MalformedHeader(_))));
    assert!(matches!(
        parse("just some text\n"),
        Err(FontError::MalformedHeader(_))
    ));
}

#[test]
fn truncated_comments() {
    let err = parse("flf2a$ 1 1 3 -1 3\nonly one comment\n").unwrap_err();
    match err {
        FontError::UnexpectedEndOfFont(what) => assert!(what.contains("comment line 2"), "{what}"),
        other => panic!("expected UnexpectedEndOfFont, got {other:?}"),
    }
}

#[test]
fn truncated_glyph_body() {
    let full = FontSource::new(2).build();
    let cut: String = full.lines().take(40).map(|l| format!("{l}\n")).collect();
    assert!(matches!(
        parse(&cut),
        Err(FontError::UnexpectedEndOfFont(_))
    ));
}

#[test]
fn garbage_code_tag_is_fatal() {
    let source = FontSource::new(1).tagged("Hello", &["?"]).build();
    match parse(&source) {
        Err(FontError::InvalidCodeTag(line)) => assert_eq!(line, "Hello"),
        other => panic!("expected InvalidCodeTag, got {other:?}"),
    }
}

#[test]
fn minus_one_code_tag_is_rejected() {
    let source = FontSource::new(1).tagged("-1 not allowed", &["?"]).build();
    assert!(matches!(parse(&source), Err(FontError::InvalidCodeTag(_))));
}

#[test]
fn code_tag_literals() {
    let source = FontSource::new(1)
        .tagged("  0x100  ", &["h"])
        .tagged("0h101", &["H"])
        .tagged("-300 negative", &["n"])
        .tagged("1234", &["d"]);
    let mut text = source.build();
    // blank lines between tagged glyphs are skipped
    text.push_str("\n   \n");
    let font = parse(&text).unwrap();
    assert_eq!(font.tagged_glyph_count(), 4);
    assert!(font.glyph(0x100).is_some());
    assert!(font.glyph(0x101).is_some());
    assert_eq!(font.glyph(-300).and_then(|g| g.description()), Some("negative"));
    assert!(font.glyph(1234).is_some());
}

#[test]
fn crlf_and_latin1_sources() {
    let text = FontSource::new(1).comment("comment").build().replace('\n', "\r\n");
    let font = parse(&text).unwrap();
    assert_eq!(font.comments(), ["comment"]);
    assert_eq!(font.glyph_for('A').unwrap().rows()[0].text(), "A");

    let mut bytes = b"flf2a\xa0 1 1 3 -1 0\n".to_vec();
    for code in figfont::REQUIRED_CODES {
        let mark = if code == b'@' { b'#' } else { b'@' };
        bytes.extend_from_slice(&[code, mark, mark, b'\n']);
    }
    let font = Font::parse("latin1", bytes.as_slice()).unwrap();
    assert_eq!(font.hard_blank(), '\u{a0}');
    assert_eq!(font.glyph_for('ß').unwrap().rows()[0].text(), "ß");
}

#[test]
fn header_fields_reach_the_font() {
    let font = FontSource::new(3)
        .hard_blank('#')
        .layout(Layout::SMUSHING | Layout::BIG_X)
        .right_to_left()
        .parse("fields")
        .unwrap();
    assert_eq!(font.hard_blank(), '#');
    assert_eq!(font.height(), 3);
    assert_eq!(font.baseline(), 3);
    assert_eq!(font.direction(), PrintDirection::RightToLeft);
    assert_eq!(font.layout().mode(), LayoutMode::Smushing);
    assert_eq!(font.layout().rules(), Layout::BIG_X);
    assert_eq!(font.header().legacy_layout, -1);
}
