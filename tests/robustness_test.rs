use article_extract::{extract, extract_document, extract_sections, Document, Error, Options};

const ARTICLE: &str = r##"
    <html><head><meta name="citation_title" content="Stable Output"></head><body>
      <nav>Journal home</nav>
      <article>
        <div data-core-wrapper="header"><h1>Stable Output</h1></div>
        <div data-core-wrapper="content">
          <h2>Results</h2>
          <p>Rates rose<a role="doc-biblioref" href="#bib1"><sup>1</sup></a>.</p>
          <button>Show more</button>
          <figure><figcaption><p>Rates per group over time.</p>
            <div class="dropBlock__holder">Popup citation</div></figcaption></figure>
        </div>
      </article>
      <section id="references"><ol><li id="bib1">Smith J. First paper.</li></ol></section>
    </body></html>
"##;

#[test]
fn malformed_html_does_not_panic() {
    let inputs = [
        "<<<>>>",
        "\0\0\0",
        "<article><div data-core-wrapper=\"content\"><p>Unclosed",
        "<table><tr><td><table><tr><td>x",
        "</div></div></article>",
        "<ul><li><ol><li><ul><li>",
        "<sup><a role=\"doc-biblioref\"><sup></sup></a></sup>",
    ];
    for html in inputs {
        let result = extract(html);
        assert!(
            matches!(result, Ok(_) | Err(Error::NoContent)),
            "{html:?} gave {result:?}"
        );
    }
}

#[test]
fn deeply_nested_markup_does_not_overflow() {
    const LEVELS: usize = 20_000;
    let mut html = String::from(
        r#"<html><body><article><div data-core-wrapper="content"><p>Lead paragraph.</p>"#,
    );
    html.push_str(&"<div>".repeat(LEVELS));
    html.push_str("Buried block text");
    html.push_str(&"</div>".repeat(LEVELS));
    html.push_str("<p>Inline ");
    html.push_str(&"<span>".repeat(LEVELS));
    html.push_str("buried");
    html.push_str(&"</span>".repeat(LEVELS));
    html.push_str(" tail.</p>");
    html.push_str("<ul>");
    html.push_str(&"<li>Item<ul>".repeat(LEVELS / 10));
    html.push_str(&"</ul></li>".repeat(LEVELS / 10));
    html.push_str("</ul></div></article></body></html>");

    let result = extract(&html);
    assert!(matches!(result, Ok(_) | Err(Error::NoContent)), "{result:?}");

    let result = result.unwrap();
    let header = result.section("header").unwrap();
    assert!(header.starts_with("Lead paragraph."));
    assert!(header.contains("Inline tail."));
    assert!(!header.contains("Buried block text"));
}

#[test]
fn unclosed_markup_is_still_read() {
    let html = "<article><div data-core-wrapper=\"content\"><p>Unclosed paragraph text";
    let result = extract(html).unwrap();
    assert_eq!(result.section("header"), Some("Unclosed paragraph text"));
}

#[test]
fn extraction_is_idempotent() {
    let first = extract(ARTICLE).unwrap();
    let second = extract(ARTICLE).unwrap();
    assert_eq!(first.sections, second.sections);
    assert_eq!(first.text, second.text);
    assert_eq!(first.references, second.references);
    assert_eq!(first.figures, second.figures);
}

#[test]
fn caller_document_is_not_modified() {
    let doc = Document::from(ARTICLE);
    let before = doc.html().to_string();

    let result = extract_document(&doc, &Options::default()).unwrap();
    assert_eq!(result.section("results"), Some("Rates rose (Ref: 1)."));

    assert_eq!(doc.html().to_string(), before);
    assert_eq!(doc.select("button").length(), 1);
    assert_eq!(doc.select("div.dropBlock__holder").length(), 1);
}

#[test]
fn chrome_is_pruned() {
    let result = extract(ARTICLE).unwrap();
    assert!(!result.text.contains("Journal home"));
    assert!(!result.text.contains("Show more"));
    assert!(!result.text.contains("Popup citation"));
}

#[test]
fn extract_sections_convenience() {
    let sections = extract_sections(ARTICLE, "https://journal.example.org/article/42").unwrap();
    assert!(sections.contains_key("results"));
    assert!(sections.contains_key("references"));

    assert!(extract_sections("<html></html>", "not a url").is_none());
}

#[test]
fn error_messages() {
    assert_eq!(Error::NoContent.to_string(), "No extractable content found");
    assert!(Error::ExtractionError("boom".into()).to_string().contains("boom"));
}
