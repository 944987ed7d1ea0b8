use rnaarc_core::PlotOptions;
use wasm_bindgen::prelude::*;

/// Lay out a structure file's text and return the scene as JSON.
#[wasm_bindgen]
pub fn draw_scene(input: &str) -> String {
    rnaarc_core::draw_scene(input)
}

/// Render a structure file's text as SVG with JSON options.
///
/// `opts_json` is parsed as `PlotOptions` with `#[serde(default)]`,
/// so any omitted field uses the default value.
#[wasm_bindgen]
pub fn draw_svg(input: &str, opts_json: &str) -> String {
    let opts: PlotOptions = serde_json::from_str(opts_json).unwrap_or_default();
    rnaarc_core::draw_svg(input, &opts)
}
