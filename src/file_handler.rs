use std::path::Path;

use futures::io::{AsyncRead, AsyncReadExt};
use log::{info, warn};

use crate::element::Element;
use crate::error::ImportError;
use crate::file_format;

/// What an uploaded file is, judged by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `KONVA_RLE_V1` or legacy JSON drawing
    Drawing,
    /// Raster to be thresholded into a binary image
    Png,
}

impl ImportKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "txt" | "rle" | "json" => Some(Self::Drawing),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Proof that an import was started; hand it back to finish or cancel it.
#[derive(Debug, PartialEq, Eq)]
pub struct ImportTicket(u64);

/// Serializes imports: only one may be in flight at a time.
#[derive(Debug)]
pub struct FileHandler {
    in_flight: Option<u64>,
    next_ticket: u64,
    max_chars: usize,
}

impl FileHandler {
    pub fn new(max_chars: usize) -> Self {
        Self {
            in_flight: None,
            next_ticket: 0,
            max_chars,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Claim the import slot. Fails while another import is running.
    pub fn begin_import(&mut self) -> Result<ImportTicket, ImportError> {
        if self.in_flight.is_some() {
            warn!("Import requested while another is in flight");
            return Err(ImportError::Busy);
        }
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        Ok(ImportTicket(self.next_ticket))
    }

    /// Release the slot without decoding anything.
    pub fn cancel_import(&mut self, ticket: ImportTicket) {
        if self.in_flight == Some(ticket.0) {
            self.in_flight = None;
        }
    }

    /// Decode the file contents and release the slot, successful or not.
    pub fn finish_import(&mut self, ticket: ImportTicket, contents: &str) -> Result<Vec<Element>, ImportError> {
        if self.in_flight != Some(ticket.0) {
            return Err(ImportError::StaleTicket);
        }
        self.in_flight = None;

        let elements = file_format::decode_document(contents, self.max_chars)?;
        info!("Decoded {} elements", elements.len());
        Ok(elements)
    }
}

/// Read an uploaded file as UTF-8 text without blocking the caller's executor.
pub async fn read_text<R: AsyncRead + Unpin>(mut reader: R) -> Result<String, ImportError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents).await?;
    Ok(contents)
}

/// Read an uploaded file as raw bytes.
pub async fn read_bytes<R: AsyncRead + Unpin>(mut reader: R) -> Result<Vec<u8>, ImportError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    Ok(bytes)
}
