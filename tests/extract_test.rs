//! Integration tests for HTML extraction from RTF.

use unrtf::{
    extract_bytes, extract_document, extract_document_parallel, extract_line, extract_lines,
    Error,
};

/// An Outlook-style RTF-wrapped HTML message, one wrapper construct per line.
fn sample_rtf() -> String {
    [
        r"{\rtf1\ansi\ansicpg1252\fromhtml1 \deff0",
        r"{\fonttbl{\f0\fswiss\fcharset0;}}",
        r"{\colortbl\red0\green0\blue0;\red0\green0\blue255;}",
        r"{\*\htmltag19 <html>}",
        r"{\*\htmltag34 <head>}",
        r"{\*\htmltag161 <title>}\htmlrtf0 Weekly Report{\*\htmltag169 </title>}",
        r"{\*\htmltag41 </head>}",
        r"{\*\htmltag50 <body>}",
        r"{\*\htmltag96 <p>}\htmlrtf0 Hello from Outlook",
        r"{\*\htmltag4 \par}",
        r#"{\*\htmltag84 <a href="https://example.com/status">}\htmlrtf {\field{\*\fldinst{HYPERLINK "https://example.com/status"}}{\fldrslt\cf1\ul \htmlrtf0 status page\htmlrtf }}\htmlrtf0 {\*\htmltag92 </a>}"#,
        r"{\*\htmltag104 </p>}",
        r"{\*\htmltag58 </body>}",
        r"{\*\htmltag27 </html>}",
        r"}",
    ]
    .join("\n")
}

fn sample_html() -> String {
    concat!(
        "<html><head><title>Weekly Report</title></head><body>",
        "<p>Hello from Outlook\n",
        "<a href=\"https://example.com/status\">status page</a>",
        "</p></body></html>"
    )
    .to_string()
}

#[test]
fn extracts_full_outlook_message() {
    assert_eq!(extract_document(&sample_rtf()).unwrap(), sample_html());
}

#[test]
fn extraction_is_idempotent_on_extracted_html() {
    // the extracted document is plain HTML; running the extractor over its
    // lines must reproduce it (the newline re-joins at the line split)
    let html = extract_document(&sample_rtf()).unwrap();
    let again = extract_document(&html).unwrap();
    assert_eq!(again.replace('\n', ""), html.replace('\n', ""));
}

#[test]
fn parallel_extraction_matches_sequential() {
    let rtf = sample_rtf();
    assert_eq!(
        extract_document_parallel(&rtf).unwrap(),
        extract_document(&rtf).unwrap()
    );
}

#[test]
fn extract_bytes_checks_the_magic() {
    let rtf = sample_rtf();
    assert_eq!(extract_bytes(rtf.as_bytes()).unwrap(), sample_html());

    let not_rtf = b"<html><body>plain html</body></html>";
    assert!(matches!(
        extract_bytes(not_rtf),
        Err(Error::UnknownFormat)
    ));
}

#[test]
fn whitespace_only_lines_pass_through_unit_api() {
    for line in ["", " ", "\t", "   \t  "] {
        assert_eq!(extract_line(line).unwrap(), line);
    }
}

#[test]
fn hyperlink_field_alone_produces_nothing() {
    assert_eq!(extract_line(r#"HYPERLINK "http://x""#).unwrap(), "");
}

#[test]
fn content_marker_preserves_internal_spacing() {
    assert_eq!(
        extract_line(r"\htmlrtf0 Hello   World").unwrap(),
        "Hello   World"
    );
}

#[test]
fn ext_control_tag_and_trailing_text() {
    assert_eq!(
        extract_line(r"{\*\htmltag1 <p>}Hello").unwrap(),
        "<p>Hello"
    );
}

#[test]
fn ext_control_par_becomes_newline() {
    assert_eq!(extract_line(r"{\*\htmltag2 \par}").unwrap(), "\n");
}

#[test]
fn failure_reports_the_line_index() {
    let rtf = [
        r"{\rtf1\ansi",
        r"{\*\htmltag19 <html>}",
        r"\=not rtf at all",
        r"}",
    ]
    .join("\n");

    match extract_document(&rtf).unwrap_err() {
        Error::Line { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(*source, Error::Parse { .. }));
        }
        other => panic!("expected line-wrapped failure, got {other:?}"),
    }
}

#[test]
fn extractor_yields_one_string_per_content_line() {
    let lines = [
        r"{\*\htmltag19 <html>}",
        r"\htmlrtf0 first",
        "",
        r"{\f0\fs20}",
        r"\htmlrtf0 second",
        r"{\*\htmltag27 </html>}",
    ];
    let pieces: Vec<String> = extract_lines(lines).collect::<unrtf::Result<_>>().unwrap();
    assert_eq!(pieces, ["<html>", "first", "second", "</html>"]);
}

#[test]
fn extractor_stops_after_first_failure() {
    let lines = [r"\htmlrtf0 ok", r"\=bad", r"\htmlrtf0 unreachable"];
    let mut extractor = extract_lines(lines);
    assert!(extractor.next().unwrap().is_ok());
    assert!(extractor.next().unwrap().is_err());
    assert!(extractor.next().is_none());
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("message.rtf");
    let output = dir.path().join("message.html");

    std::fs::write(&input, sample_rtf()).unwrap();
    unrtf::convert_file(&input, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, unrtf::extract_file(&input).unwrap());
    assert_eq!(written, sample_html());
}
