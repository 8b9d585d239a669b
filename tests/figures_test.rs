use article_extract::{extract, extract_with_options, Options, FIGURES_SECTION};

const FIGURE_PAGE: &str = r#"
    <html><body><article><div data-core-wrapper="content">
      <p>Body paragraph.</p>
      <figure>
        <img src="f1.png">
        <figcaption>
          <span class="label">Figure 1</span>
          <span class="figure__title__text">Tumor growth</span>
          <div class="figure__caption__text__content">
            <div role="paragraph">(A) Volumes were measured weekly.</div>
            <div role="paragraph">Hide caption</div>
          </div>
        </figcaption>
      </figure>
      <figure><figcaption><p>Schematic of the sampling protocol.</p></figcaption></figure>
    </div></article></body></html>
"#;

#[test]
fn figure_captions_get_their_own_section() {
    let result = extract(FIGURE_PAGE).unwrap();

    assert_eq!(result.figures.len(), 2);
    assert_eq!(result.figures[0].label.as_deref(), Some("Figure 1"));
    assert_eq!(result.figures[0].title.as_deref(), Some("Tumor growth"));
    assert_eq!(
        result.figures[0].paragraphs,
        vec!["(A) Volumes were measured weekly."]
    );
    assert_eq!(result.figures[1].label, None);

    assert_eq!(
        result.section(FIGURES_SECTION),
        Some(
            "Figure 1: Tumor growth\n(A) Volumes were measured weekly.\n\n\
             Schematic of the sampling protocol."
        )
    );
    assert!(result
        .text
        .contains("\n### Figure 1: Tumor growth\n\n(A) Volumes were measured weekly.\n\n"));
    assert!(result.text.contains("FIGURES\n"));
}

#[test]
fn captions_are_not_part_of_the_body() {
    let result = extract(FIGURE_PAGE).unwrap();
    assert_eq!(result.section("header"), Some("Body paragraph."));
}

#[test]
fn figures_can_be_disabled() {
    let options = Options {
        include_figures: false,
        ..Options::default()
    };
    let result = extract_with_options(FIGURE_PAGE, &options).unwrap();
    assert!(result.figures.is_empty());
    assert!(result.section(FIGURES_SECTION).is_none());
    assert!(!result.text.contains("FIGURES"));
}

#[test]
fn figure_without_caption_adds_nothing() {
    let html = r#"
        <article><div data-core-wrapper="content">
          <p>Body paragraph.</p><figure><img src="f.png"></figure>
        </div></article>
    "#;
    let result = extract(html).unwrap();
    assert!(result.figures.is_empty());
    assert!(!result.text.contains("FIGURES"));
}

#[test]
fn caption_citations_keep_markers_only() {
    let html = r##"
        <article><div data-core-wrapper="content"><p>Body paragraph.</p>
          <figure><figcaption>
            <p>Signal rises over time<span class="dropBlock"><a role="doc-biblioref" href="#bib4"><sup>4</sup></a></span> in all groups
            <span class="dropBlock"><span>Smith J. Full citation text</span></span></p>
          </figcaption></figure>
        </div></article>
    "##;
    let result = extract(html).unwrap();
    let para = &result.figures[0].paragraphs[0];
    assert!(para.contains("(Ref: 4)"), "got {para:?}");
    assert!(!para.contains("Full citation text"));
}
