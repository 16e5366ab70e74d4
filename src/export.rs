//! PNG and RLE export.
//!
//! Rasterizing is not done here: the PNG path asks a [`RasterSurface`] (the
//! canvas the UI draws on) for a snapshot.

use egui::{Color32, Rect};
use log::{error, info};

use crate::element::Element;
use crate::error::{ExportError, SurfaceError};
use crate::file_format;

pub const PNG_FILE_NAME: &str = "binart.png";
pub const RLE_FILE_NAME: &str = "binart-rle.txt";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// A finished file, ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// The rendering surface's snapshot capability
pub trait RasterSurface {
    /// Put an opaque fill under everything else inside `region`
    fn insert_background(&mut self, region: Rect, color: Color32) -> Result<(), SurfaceError>;

    /// Remove the fill added by [`RasterSurface::insert_background`]
    fn remove_background(&mut self);

    /// Encode `region` as PNG at `pixel_ratio` pixels per canvas unit
    fn snapshot_png(&mut self, region: Rect, pixel_ratio: f32) -> Result<Vec<u8>, SurfaceError>;
}

/// Snapshot `region` with an opaque background so transparent areas do not
/// come out black. The background is removed again whatever happens.
pub fn export_png(
    surface: &mut dyn RasterSurface,
    region: Rect,
    pixel_ratio: f32,
    background: Color32,
) -> Result<ExportArtifact, ExportError> {
    surface.insert_background(region, background).inspect_err(|err| {
        error!("Failed to add export background: {err}");
    })?;
    let snapshot = surface.snapshot_png(region, pixel_ratio);
    surface.remove_background();

    let bytes = snapshot.inspect_err(|err| error!("PNG snapshot failed: {err}"))?;
    if bytes.is_empty() {
        return Err(ExportError::EmptySnapshot);
    }
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(ExportError::NotPng);
    }

    info!("Exported {} bytes of PNG", bytes.len());
    Ok(ExportArtifact {
        file_name: PNG_FILE_NAME.to_owned(),
        mime: "image/png",
        bytes,
    })
}

/// Serialize, compress and tag the drawing. `progress` sees 0, 50 and 100.
pub fn export_rle(elements: &[Element], mut progress: impl FnMut(u8)) -> Result<ExportArtifact, ExportError> {
    progress(0);
    let contents = file_format::encode_document(elements).inspect_err(|err| {
        error!("Failed to serialize drawing: {err}");
    })?;
    progress(50);

    info!(
        "Exported {} elements as {} bytes of RLE",
        elements.len(),
        contents.len()
    );
    let artifact = ExportArtifact {
        file_name: RLE_FILE_NAME.to_owned(),
        mime: "text/plain",
        bytes: contents.into_bytes(),
    };
    progress(100);
    Ok(artifact)
}
