//! Integration tests for document loading and the text/JSON hosts.

use std::io::Write;

use richstack::model::{sample, Document, InlineText, RichTextBlock, TextAttribute};
use richstack::render::{self, JsonFormat, PresentationUnit, RenderOptions, Renderer};
use richstack::Error;

const SAMPLE_JSON: &str = r#"{
    "title": "Loaded",
    "blocks": [
        {"type": "plain_text", "runs": [
            {"text": "Hi", "attributes": ""},
            {"text": " there", "attributes": "ITALIC"}
        ]},
        {"type": "quote", "children": [
            {"type": "plain_text", "runs": [{"text": "X"}]},
            {"type": "quote", "children": [
                {"type": "plain_text", "runs": [{"text": "Y", "attributes": "BOLD | HEADING"}]}
            ]},
            {"type": "plain_text", "runs": [{"text": "Z"}]}
        ]}
    ]
}"#;

#[test]
fn test_parse_json_document() {
    let doc = richstack::parse_json(SAMPLE_JSON).unwrap();
    assert_eq!(doc.title.as_deref(), Some("Loaded"));
    assert_eq!(doc.blocks().len(), 2);

    let expected_first = RichTextBlock::plain_text([
        InlineText::plain("Hi"),
        InlineText::italic(" there"),
    ]);
    assert_eq!(doc.blocks()[0], expected_first);

    match &doc.blocks()[1] {
        RichTextBlock::Quote { children } => {
            assert_eq!(children.len(), 3);
            assert_eq!(
                children[1],
                RichTextBlock::quote([RichTextBlock::plain_text([InlineText::new(
                    "Y",
                    TextAttribute::BOLD | TextAttribute::HEADING
                )])])
            );
        }
        other => panic!("Expected quote, got {:?}", other),
    }
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_JSON.as_bytes()).unwrap();

    let doc = richstack::parse_file(file.path()).unwrap();
    assert_eq!(doc, richstack::parse_json(SAMPLE_JSON).unwrap());
}

#[test]
fn test_parse_file_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"blocks\": [").unwrap();

    let result = richstack::parse_file(file.path());
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_document_json_round_trip() {
    let doc = sample::demo_document();
    let json = serde_json::to_string(&doc).unwrap();
    let parsed = richstack::parse_json(&json).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn test_to_text_of_loaded_document() {
    let doc = richstack::parse_json(SAMPLE_JSON).unwrap();
    let text = richstack::to_text(&doc, &RenderOptions::default());
    assert_eq!(text, "Hi there\n> X\n> > Y\n> Z");
}

#[test]
fn test_to_json_of_loaded_document() {
    let doc = richstack::parse_json(SAMPLE_JSON).unwrap();
    let json = richstack::to_json(&doc, &RenderOptions::default(), JsonFormat::Pretty).unwrap();

    let units: Vec<PresentationUnit> = serde_json::from_str(&json).unwrap();
    assert_eq!(units, richstack::render_document(&doc, &RenderOptions::default()));
    assert_eq!(units[1].as_container().unwrap().len(), 3);
}

#[test]
fn test_render_with_stats_on_demo() {
    let doc: Document = sample::demo_document();
    let result = Renderer::default().render_with_stats(doc.blocks());

    assert_eq!(result.units.len(), 4);
    assert_eq!(result.stats.plain_text_blocks, 5);
    assert_eq!(result.stats.quote_blocks, 3);
    assert_eq!(result.stats.block_count(), 8);
    assert_eq!(result.stats.max_depth, 2);
    assert_eq!(result.stats.run_count, result.stats.fragment_count);
}

#[test]
fn test_merged_runs_keep_visible_text() {
    let doc = sample::demo_document();
    let plain = richstack::to_text(&doc, &RenderOptions::default());
    let merged = richstack::to_text(&doc, &RenderOptions::new().with_merged_runs(true));
    assert_eq!(plain, merged);

    let units = render::render_children(doc.blocks());
    let merged_units = Renderer::new(RenderOptions::new().with_merged_runs(true))
        .render_children(doc.blocks());
    assert_eq!(units.len(), merged_units.len());
}

fn nested_quotes_json(depth: usize) -> String {
    let mut block = r#"{"type": "plain_text", "runs": [{"text": "core"}]}"#.to_string();
    for _ in 0..depth {
        block = format!(r#"{{"type": "quote", "children": [{}]}}"#, block);
    }
    format!(r#"{{"blocks": [{}]}}"#, block)
}

#[test]
fn test_parse_json_nesting_limit() {
    let doc = richstack::parse_json(&nested_quotes_json(40)).unwrap();
    assert_eq!(doc.max_depth(), 40);

    let result = richstack::parse_json(&nested_quotes_json(100));
    match result {
        Err(Error::Json(err)) => assert!(err.to_string().contains("recursion limit")),
        Err(other) => panic!("Expected JSON error, got {:?}", other),
        Ok(doc) => panic!("Expected recursion limit error, got {} blocks", doc.blocks().len()),
    }
}
