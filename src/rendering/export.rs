// src/rendering/export.rs

use super::painter;
use super::scene::DiagramFrame;
use crate::config::DiagramStyle;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Pdf,
    Svg,
}

impl ExportFormat {
    /// Picks the format from the file extension; PNG when unknown.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => ExportFormat::Pdf,
            Some("svg") => ExportFormat::Svg,
            _ => ExportFormat::Png,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Svg => "svg",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export size must be positive, got {0}")]
    InvalidSize(u32),
    #[error("drawing failed: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("could not write PNG: {0}")]
    Png(#[from] cairo::IoError),
    #[error("could not create file: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the diagram frame to `path` as a `size` x `size` image.
pub fn export_diagram(
    path: &Path,
    frame: &DiagramFrame,
    style: &DiagramStyle,
    size: u32,
) -> Result<ExportFormat, ExportError> {
    if size == 0 || size > i32::MAX as u32 {
        return Err(ExportError::InvalidSize(size));
    }
    let format = ExportFormat::from_path(path);
    let edge = size as f64;

    match format {
        ExportFormat::Pdf => {
            let surface = cairo::PdfSurface::new(edge, edge, path)?;
            let cr = cairo::Context::new(&surface)?;
            painter::draw_diagram(&cr, frame, style, edge, edge)?;
            surface.finish();
        }
        ExportFormat::Svg => {
            let surface = cairo::SvgSurface::new(edge, edge, Some(path))?;
            let cr = cairo::Context::new(&surface)?;
            painter::draw_diagram(&cr, frame, style, edge, edge)?;
            surface.finish();
        }
        ExportFormat::Png => {
            let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size as i32, size as i32)?;
            {
                let cr = cairo::Context::new(&surface)?;
                painter::draw_diagram(&cr, frame, style, edge, edge)?;
            }
            let mut file = File::create(path)?;
            surface.write_to_png(&mut file)?;
        }
    }

    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{shells, ElementTable};
    use crate::rendering::scene::Rotation;

    fn neon_frame() -> DiagramFrame {
        let table = ElementTable::builtin().unwrap();
        let el = table.get(10).unwrap().clone();
        let sh = shells::derive(&el.electron_configuration, el.atomic_number);
        DiagramFrame {
            element: el,
            shells: sh,
            rotation: Rotation::new(0.01),
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.PDF")), ExportFormat::Pdf);
        assert_eq!(ExportFormat::from_path(Path::new("a.svg")), ExportFormat::Svg);
        assert_eq!(ExportFormat::from_path(Path::new("a.png")), ExportFormat::Png);
        assert_eq!(ExportFormat::from_path(Path::new("noext")), ExportFormat::Png);
    }

    #[test]
    fn test_png_export_writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neon.png");
        let fmt = export_diagram(&path, &neon_frame(), &DiagramStyle::default(), 120).unwrap();
        assert_eq!(fmt, ExportFormat::Png);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_svg_export_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neon.svg");
        export_diagram(&path, &neon_frame(), &DiagramStyle::default(), 200).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let res = export_diagram(&dir.path().join("x.png"), &neon_frame(), &DiagramStyle::default(), 0);
        assert!(matches!(res, Err(ExportError::InvalidSize(0))));
    }
}
