use egui::{Pos2, Rect, Vec2};
use image::{GrayImage, Luma};
use log::debug;

use crate::element::common::BINARY_CELL_SIZE;
use crate::id_generator::ElementId;

/// 1-bit raster stored as a string of `'0'`/`'1'` characters, row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryImage {
    id: ElementId,
    bits: String,
    row_width: usize,
    x: f32,
    y: f32,
}

impl BinaryImage {
    /// Returns `None` if `row_width` is zero or `bits` holds anything but `0`/`1`.
    pub fn new(id: ElementId, bits: impl Into<String>, row_width: usize, anchor: Pos2) -> Option<Self> {
        let bits = bits.into();
        if row_width == 0 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        Some(Self {
            id,
            bits,
            row_width,
            x: anchor.x,
            y: anchor.y,
        })
    }

    /// Threshold a decoded PNG into a bit string. Pixels darker than
    /// `threshold` become `1`.
    pub fn from_png(id: ElementId, bytes: &[u8], threshold: u8, anchor: Pos2) -> Result<Self, image::ImageError> {
        let gray = image::load_from_memory(bytes)?.to_luma8();
        debug!("Thresholding {}x{} image into bits", gray.width(), gray.height());

        let bits: String = gray
            .pixels()
            .map(|Luma([level])| if *level < threshold { '1' } else { '0' })
            .collect();

        Ok(Self {
            id,
            bits,
            row_width: gray.width().max(1) as usize,
            x: anchor.x,
            y: anchor.y,
        })
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn row_width(&self) -> usize {
        self.row_width
    }

    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// Number of rows; a trailing partial row counts.
    pub fn rows(&self) -> usize {
        self.bits.len().div_ceil(self.row_width)
    }

    pub fn bit(&self, col: usize, row: usize) -> bool {
        if col >= self.row_width {
            return false;
        }
        self.bits.as_bytes().get(row * self.row_width + col) == Some(&b'1')
    }

    pub fn with_position(&self, pos: Pos2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..self.clone()
        }
    }

    pub fn rect(&self) -> Rect {
        let size = Vec2::new(self.row_width as f32, self.rows() as f32) * BINARY_CELL_SIZE;
        Rect::from_min_size(self.position(), size)
    }

    /// One pixel per bit: set bits are black, everything else white.
    pub fn to_gray_image(&self) -> GrayImage {
        let width = self.row_width as u32;
        let height = self.rows() as u32;
        GrayImage::from_fn(width, height, |col, row| {
            if self.bit(col as usize, row as usize) {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }
}
