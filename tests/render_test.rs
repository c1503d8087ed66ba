use carousel::{markup, render_file, render_markup, BootstrapOptions, SliderError};
use std::fs;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Gallery</title></head>
<body>
<div class="slider auto-play">
  <div class="slides-container">
    <div class="slide">One</div>
    <div class="slide">Two</div>
    <div class="slide">Three</div>
  </div>
</div>
</body>
</html>"#;

#[test]
fn test_render_bakes_controls_and_initial_state() {
    let rendered = render_markup(PAGE, &BootstrapOptions::default()).expect("render succeeds");

    assert!(rendered.starts_with("<!DOCTYPE html>"));
    assert!(rendered.contains(r#"<div class="arrow arrow-left"><svg"#));
    assert!(rendered.contains(r#"<div class="arrow arrow-right"><svg"#));
    assert!(rendered.contains(
        r#"<div class="dots-container"><span class="dot active"></span><span class="dot"></span><span class="dot"></span></div>"#
    ));
    assert!(rendered.contains(
        r#"<div class="slide active" style="transform: translateX(0%)">One</div>"#
    ));
    assert!(rendered.contains(
        r#"<div class="slide forward" style="transform: translateX(0%)">Two</div>"#
    ));
}

#[test]
fn test_render_is_stable_to_parse_again() {
    let rendered = render_markup(PAGE, &BootstrapOptions::default()).unwrap();
    let doc = markup::parse(&rendered).expect("rendered markup parses");

    let slider = doc.elements_by_class("slider")[0];
    assert_eq!(doc.elements_by_class("dot").len(), 3);
    assert_eq!(doc.elements_by_class("active").len(), 2);
    assert!(doc.find_descendant_by_class(slider, "arrow-left").is_some());
}

#[test]
fn test_render_without_sliders_leaves_page_alone() {
    let page = "<html><body><p>Nothing to see</p></body></html>";
    assert_eq!(render_markup(page, &BootstrapOptions::default()).unwrap(), page);
}

#[test]
fn test_render_file_creates_output_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("page.xhtml");
    let output = temp_dir.path().join("out").join("page.xhtml");
    fs::write(&input, PAGE).expect("Failed to write input");

    render_file(&input, &output, &BootstrapOptions::default()).expect("render succeeds");

    let written = fs::read_to_string(&output).expect("Failed to read output");
    assert!(written.contains("dots-container"));
}

#[test]
fn test_render_file_missing_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = render_file(
        &temp_dir.path().join("missing.xhtml"),
        &temp_dir.path().join("out.xhtml"),
        &BootstrapOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SliderError::PathNotFoundError(_)));
}

#[test]
fn test_render_rejects_malformed_markup() {
    let err = render_markup("<div class=\"slider\"><p></div>", &BootstrapOptions::default())
        .unwrap_err();
    assert!(matches!(err, SliderError::MarkupError { .. }));
}
