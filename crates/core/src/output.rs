use std::path::{Path, PathBuf};

use plotters::prelude::{IntoDrawingArea, SVGBackend};

use crate::error::{Error, Result};
use crate::render::{self, PlotOptions};
use crate::types::{Scene, Structure};

/// Directory figures are written to unless told otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "./visualization/examples";

/// Output file format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Png,
    Svg,
    Json,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
            Format::Json => "json",
        }
    }
}

/// Path of the figure for `structure`: `<dir>/<sequence>.<ext>`.
///
/// The sequence text is used verbatim as the file stem; very long sequences
/// can exceed the platform's file name limit.
pub fn output_path(dir: impl AsRef<Path>, structure: &Structure, format: Format) -> PathBuf {
    dir.as_ref()
        .join(format!("{}.{}", structure.raw, format.extension()))
}

/// Render `scene` to `path` in the given format.
///
/// The parent directory must already exist.
#[cfg(not(target_arch = "wasm32"))]
pub fn save(scene: &Scene, path: &Path, format: Format, opts: &PlotOptions) -> Result<()> {
    use plotters::prelude::BitMapBackend;
    use std::fs;
    use tracing::info;

    match format {
        Format::Png => {
            let root = BitMapBackend::new(path, opts.pixel_size()).into_drawing_area();
            render::draw(&root, scene, opts)?;
            root.present()
                .map_err(|e| Error::Render(format!("{}: {e}", path.display())))?;
        }
        Format::Svg => {
            let root = SVGBackend::new(path, opts.pixel_size()).into_drawing_area();
            render::draw(&root, scene, opts)?;
            root.present()
                .map_err(|e| Error::Render(format!("{}: {e}", path.display())))?;
        }
        Format::Json => {
            fs::write(path, to_json(scene)?).map_err(|e| Error::io(path, e))?;
        }
    }
    info!(path = %path.display(), ?format, "wrote figure");
    Ok(())
}

/// Render `scene` as an SVG document in memory.
pub fn to_svg(scene: &Scene, opts: &PlotOptions) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, opts.pixel_size()).into_drawing_area();
        render::draw(&root, scene, opts)?;
        root.present().map_err(|e| Error::Render(e.to_string()))?;
    }
    Ok(buf)
}

pub fn to_json(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string(scene)?)
}
