mod error;
mod layout;
pub mod output;
mod parser;
pub mod render;
mod types;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

pub use error::{Error, ParseError, Result};
pub use layout::layout;
pub use output::{output_path, Format, DEFAULT_OUTPUT_DIR};
pub use parser::{parse, read_structure};
pub use render::{PlotOptions, DEFAULT_TITLE};
pub use types::*;

/// Read a structure file and write its arc diagram into `out_dir`.
///
/// The figure is named after the sequence (see [`output_path`]). Returns the
/// path written.
#[cfg(not(target_arch = "wasm32"))]
pub fn plot_file(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    format: Format,
    opts: &PlotOptions,
) -> Result<PathBuf> {
    let structure = read_structure(input)?;
    let scene = layout(&structure, &opts.title);
    let path = output_path(out_dir, &structure, format);
    output::save(&scene, &path, format, opts)?;
    Ok(path)
}

/// Lay out structure-file text and return the scene as JSON.
///
/// Returns an empty string if the input does not parse.
pub fn draw_scene(input: &str) -> String {
    parse(input)
        .ok()
        .and_then(|s| output::to_json(&layout(&s, DEFAULT_TITLE)).ok())
        .unwrap_or_default()
}

/// Render structure-file text as SVG. Returns an empty string on any error.
pub fn draw_svg(input: &str, opts: &PlotOptions) -> String {
    parse(input)
        .ok()
        .and_then(|s| output::to_svg(&layout(&s, &opts.title), opts).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> PlotOptions {
        PlotOptions {
            dpi: 50.0,
            ..PlotOptions::default()
        }
    }

    #[test]
    fn test_draw_scene_json() {
        let json = draw_scene("ACGU\n1\n0 3 A U\n");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["markers"].as_array().unwrap().len(), 4);
        assert_eq!(v["markers"][2]["fill"], "orange");
        assert_eq!(v["pair_arcs"][0]["style"], "dashed");
        assert_eq!(v["x_range"], serde_json::json!([-1.0, 4.0]));
    }

    #[test]
    fn test_draw_scene_invalid_input() {
        assert!(draw_scene("").is_empty());
        assert!(draw_scene("ACGX\n0\n").is_empty());
    }

    #[test]
    fn test_draw_svg() {
        let svg = draw_svg("ACGU\n1\n0 3 A U\n", &small());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Secondary Structure for RNA Sequence"));
        // title + one label per base
        assert_eq!(svg.matches("<text").count(), 5);
        let lower = svg.to_lowercase();
        assert!(lower.contains("#ffa500"));
        assert!(lower.contains("#008000"));
    }

    #[test]
    fn test_draw_svg_invalid_input() {
        assert!(draw_svg("ACGU\n2\n0 3 A U\n", &small()).is_empty());
    }
}
