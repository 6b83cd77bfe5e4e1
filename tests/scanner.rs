use std::io::Cursor as IoCursor;

use webster_reader::{
    classify, join_aliases, parse_encoding, split_aliases, validate, CorpusMarkers, Cursor,
    EntryParser, IntegrityViolation, LineKind, LineSource, ReaderOptions, TextEncoding,
    TextLineSource, WebsterError,
};

type MemoryParser = EntryParser<TextLineSource<IoCursor<Vec<u8>>>>;

fn parser_for(text: &str) -> MemoryParser {
    parser_with(text, ReaderOptions::default())
}

fn parser_with(text: &str, options: ReaderOptions) -> MemoryParser {
    let source = TextLineSource::new(IoCursor::new(text.as_bytes().to_vec()), options.encoding);
    EntryParser::new(source, options)
}

fn headword(tokens: &[&str]) -> LineKind {
    LineKind::Headword(tokens.iter().map(|t| t.to_string()).collect())
}

#[test]
fn classifier_rejects_body_shapes() {
    let lines = [
        "",
        "E.G.",
        "123",
        "--",
        "--FOO",
        "a quiet room.",
        "FOO (BAR)",
        "FOO, BAR",
        "C++",
        "[A]",
        "ABC1",
    ];
    for line in lines {
        assert_eq!(classify(line), LineKind::Body, "{:?} classified as headword", line);
    }
    // Lowercase outside ASCII counts too.
    assert_eq!(classify("CAFé"), LineKind::Body);
}

#[test]
fn classifier_splits_aliases() {
    assert_eq!(classify("FOO; BAR"), headword(&["FOO", "BAR"]));
    assert_eq!(classify("HOME"), headword(&["HOME"]));
    assert_eq!(classify("  SPACED ;LEFT"), headword(&["SPACED", "LEFT"]));
    assert_eq!(classify("FOO;;BAR"), headword(&["FOO", "", "BAR"]));
    assert_eq!(classify("CAFÉ"), headword(&["CAFÉ"]));
    assert_eq!(classify("A-B"), headword(&["A-B"]));
}

#[test]
fn alias_split_is_idempotent() {
    for line in ["FOO; BAR", "A ;B;  C", "X;;Y", "SOLO", "TRAILING;"] {
        let LineKind::Headword(aliases) = classify(line) else {
            panic!("{:?} should be a headword", line);
        };
        assert_eq!(split_aliases(&join_aliases(&aliases)), aliases, "for {:?}", line);
    }
}

#[test]
fn repeated_headword_yields_blocks_and_moves_cursor() {
    let mut parser = parser_for("HOME\nPlace of residence.\nHOME\n(informal)\nHONOR\nRespect.\n");

    let entry = parser.lookup("HOME").expect("lookup").expect("HOME entry");
    assert_eq!(entry.key, "HOME");
    assert_eq!(entry.aliases, ["HOME"]);
    assert_eq!(entry.blocks, ["HOME\nPlace of residence.", "HOME\n(informal)"]);
    assert_eq!(parser.cursor(), &Cursor::At("HONOR".to_string()));
}

#[test]
fn unknown_key_is_not_found() {
    let mut parser = parser_for("A\nFirst.\nB\nSecond.\n");
    assert!(parser.lookup("C").expect("lookup").is_none());
    assert!(parser.lookup("First.").expect("lookup").is_none());
    assert_eq!(parser.cursor(), &Cursor::Start);
}

#[test]
fn lowercase_line_never_starts_an_entry() {
    let mut parser = parser_for("A\nx.\n\na quiet room.\n\nLOUD\ny.\n");
    assert!(parser.lookup("a quiet room.").expect("lookup").is_none());
    let entry = parser.lookup("A").expect("lookup").expect("A entry");
    assert_eq!(entry.blocks, ["A\nx.\n\na quiet room.\n"]);
}

#[test]
fn non_adjacent_repeat_is_not_merged() {
    let text = "FOO\nfirst.\nBAR\nmiddle.\nFOO\nsecond.\nBAZ\nlast.\n";
    let mut parser = parser_with(text, ReaderOptions::default().with_first_key("FOO"));

    let entry = parser.lookup("FOO").expect("lookup").expect("FOO entry");
    assert_eq!(entry.blocks, ["FOO\nfirst."]);
    assert_eq!(parser.cursor(), &Cursor::At("BAR".to_string()));

    let report = validate(&mut parser).expect("validate");
    assert_eq!(report.entries, 2);
    assert_eq!(
        report.violation,
        Some(IntegrityViolation::DuplicateKey { key: "FOO".to_string() })
    );
    assert_eq!(report.violation.as_ref().map(IntegrityViolation::key), Some("FOO"));
}

#[test]
fn iterator_ends_when_a_headword_comes_round_again() {
    let text = "FOO\nfirst.\nBAR\nmiddle.\nFOO\nsecond.\nBAZ\nlast.\n";
    let mut parser = parser_with(text, ReaderOptions::default().with_first_key("FOO"));

    let keys: Vec<String> = parser.iter().map(|r| r.expect("entry ok").key).collect();
    assert_eq!(keys, ["FOO", "BAR"]);
}

#[test]
fn validate_stops_at_non_canonical_key() {
    let mut parser = parser_for("A\nx.\nFOO ;BAR\ny.\nZED\nz.\n");
    let report = validate(&mut parser).expect("validate");
    assert_eq!(report.entries, 1);
    assert_eq!(
        report.violation,
        Some(IntegrityViolation::KeyMismatch {
            key: "FOO ;BAR".to_string(),
            display_key: "FOO; BAR".to_string(),
        })
    );
    let err = report.into_result().expect_err("violation should be an error");
    assert!(matches!(err, WebsterError::Integrity(IntegrityViolation::KeyMismatch { .. })));
}

#[test]
fn walk_ends_when_first_key_is_missing() {
    let mut parser = parser_for("B\nx.\n");
    assert!(parser.next_entry().expect("next").is_none());
    assert_eq!(parser.cursor(), &Cursor::Exhausted);
    assert!(parser.next_entry().expect("next").is_none());
}

#[test]
fn footer_seals_the_open_entry() {
    let text = "A\nx.\n\
                End of Project Gutenberg's Webster's Unabridged Dictionary, by Various\n\
                TAIL\n";
    let mut parser = parser_for(text);

    assert!(parser.lookup("TAIL").expect("lookup").is_none());

    let entry = parser.next_entry().expect("next").expect("A entry");
    assert_eq!(entry.blocks, ["A\nx."]);
    assert_eq!(parser.cursor(), &Cursor::Exhausted);
}

#[test]
fn terminal_text_guards_the_last_entry() {
    let text = "ZYTHUM\nZy\"thum, n.\n\
                A kind of ancient malt beverage; a liquor made from malt and wheat.\n\
                THE END\n";
    let mut parser = parser_for(text);
    let entry = parser.lookup("ZYTHUM").expect("lookup").expect("ZYTHUM entry");
    assert_eq!(
        entry.blocks,
        ["ZYTHUM\nZy\"thum, n.\n\
          A kind of ancient malt beverage; a liquor made from malt and wheat."]
    );
    assert_eq!(parser.cursor(), &Cursor::Start);
}

#[test]
fn terminal_text_ignored_outside_the_last_entry() {
    let text = "BEER\nBeer, n.\nSometimes called a liquor made from malt and wheat.\n\
                (Obs.)\nBEET\nBeet, n.\n";
    let mut parser = parser_for(text);
    let entry = parser.lookup("BEER").expect("lookup").expect("BEER entry");
    assert_eq!(
        entry.blocks,
        ["BEER\nBeer, n.\nSometimes called a liquor made from malt and wheat.\n(Obs.)"]
    );
    assert_eq!(parser.cursor(), &Cursor::At("BEET".to_string()));
}

#[test]
fn custom_markers_and_first_key() {
    let markers = CorpusMarkers {
        footer: "*** END".to_string(),
        last_headword: "OMEGA".to_string(),
        last_headword_terminal: "final letter".to_string(),
    };
    let options = ReaderOptions::default()
        .with_first_key("ALPHA")
        .with_markers(markers);
    let text = "ALPHA\nfirst letter\nOMEGA\nthe final letter\nNOT REACHED\n*** END\n";
    let mut parser = parser_with(text, options);

    let keys: Vec<String> = parser.iter().map(|r| r.expect("entry ok").key).collect();
    assert_eq!(keys, ["ALPHA", "OMEGA"]);
    assert_eq!(parser.cursor(), &Cursor::Exhausted);
}

#[test]
fn end_of_input_closes_the_last_block() {
    let mut parser = parser_for("A\nx.\nB\ny.\nB\nz.");
    let entry = parser.lookup("B").expect("lookup").expect("B entry");
    assert_eq!(entry.blocks, ["B\ny.", "B\nz."]);
}

#[test]
fn crlf_and_latin1_bytes() {
    let bytes = b"CAF\xC9\r\nCa`f\xE9, n.\r\nNEXT\r\n".to_vec();
    let options = ReaderOptions::default();
    let source = TextLineSource::new(IoCursor::new(bytes), options.encoding);
    let mut parser = EntryParser::new(source, options);

    let entry = parser.lookup("CAFÉ").expect("lookup").expect("CAFÉ entry");
    assert_eq!(entry.blocks, ["CAFÉ\nCa`fé, n."]);
    assert_eq!(parser.cursor(), &Cursor::At("NEXT".to_string()));
}

#[test]
fn latin1_keeps_c1_bytes() {
    let options = ReaderOptions::default();
    assert_eq!(options.encoding, TextEncoding::Latin1);
    let mut source = TextLineSource::new(IoCursor::new(b"FOO\x9A\r\n".to_vec()), options.encoding);

    let line = source.next_line().expect("read").expect("one line");
    assert_eq!(line, "FOO\u{9A}");
    assert_eq!(classify(&line), headword(&["FOO\u{9A}"]));

    // windows-1252 turns the same byte into a lowercase letter.
    let cp1252 = parse_encoding("windows-1252").expect("windows-1252");
    let mut source = TextLineSource::new(IoCursor::new(b"FOO\x9A\n".to_vec()), cp1252);
    let line = source.next_line().expect("read").expect("one line");
    assert_eq!(line, "FOO\u{161}");
    assert_eq!(classify(&line), LineKind::Body);
}

#[test]
fn encoding_labels() {
    assert_eq!(parse_encoding("latin1").expect("latin1"), TextEncoding::Latin1);
    assert_eq!(parse_encoding(" ISO-8859-1 ").expect("iso"), TextEncoding::Latin1);
    assert_eq!(parse_encoding("windows-1252").expect("cp1252").name(), "windows-1252");
    assert_eq!(parse_encoding("koi8-r").expect("koi8-r").name(), "KOI8-R");
    assert!(matches!(parse_encoding("utf-8"), Err(WebsterError::MultiByteEncoding(_))));
    assert!(matches!(parse_encoding("klingon"), Err(WebsterError::UnknownEncoding(_))));
}
