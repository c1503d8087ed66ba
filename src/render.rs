// ABOUTME: Render module for baking slider controls and initial state into markup
// ABOUTME: Parses a page, attaches controllers, tears them down and writes the result

use crate::config::BootstrapOptions;
use crate::errors::{Result, SliderError};
use crate::markup;
use crate::page::Page;
use log::info;
use std::fs;
use std::path::Path;

/// Render a page with every slider's controls, indicators and initial
/// presentation state in place.
pub fn render_markup(source: &str, options: &BootstrapOptions) -> Result<String> {
    let document = markup::parse(source)?;
    let mut page = Page::load(document, options);
    info!("Rendering {} slider(s)", page.sliders().len());
    page.unload();
    Ok(markup::to_string(page.document()))
}

pub fn read_markup(input: &Path) -> Result<String> {
    if !input.is_file() {
        return Err(SliderError::PathNotFoundError(input.to_path_buf()));
    }
    fs::read_to_string(input).map_err(SliderError::FileReadError)
}

pub fn write_markup(content: &str, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(SliderError::FileReadError)?;
        }
    }
    fs::write(output, content).map_err(SliderError::FileReadError)
}

/// Render `input` into `output`, returning the rendered markup.
pub fn render_file(input: &Path, output: &Path, options: &BootstrapOptions) -> Result<String> {
    info!("Rendering {:?} -> {:?}", input, output);
    let source = read_markup(input)?;
    let rendered = render_markup(&source, options)?;
    write_markup(&rendered, output)?;
    Ok(rendered)
}
