use crate::{ExtractError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;

// ── PageContent ──────────────────────────────────────────────────────────────

/// One page of the scanned document: its plain extracted text plus the raw
/// payload of every embedded raster image, in page-resource order.
///
/// The text keeps the line breaks produced by the PDF text extraction; a
/// page with no extractable text carries an empty string, which downstream
/// line splitting turns into an empty line sequence rather than an error.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number in document order.
    pub page_number: u32,

    /// Plain extracted text with embedded line breaks.
    pub text: String,

    /// Raw image payloads, decompressed where the stream filter allows it,
    /// otherwise as stored in the file (e.g. JPEG data under DCTDecode).
    pub images: Vec<Vec<u8>>,
}

impl PageContent {
    /// The page text split into lines.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

// ── PdfScanner ───────────────────────────────────────────────────────────────

/// Opens a PDF once and materialises per-page text and image content for
/// every extractor to consume.
///
/// # Creating a scanner
///
/// ```no_run
/// use extractcatalogpdf::PdfScanner;
///
/// // From a file path
/// let scanner = PdfScanner::from_path("catalog.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("catalog.pdf").unwrap();
/// let scanner = PdfScanner::from_bytes(&bytes).unwrap();
///
/// for page in scanner.pages() {
///     println!("page {}: {} image(s)", page.page_number, page.images.len());
/// }
/// ```
pub struct PdfScanner {
    document: Document,
}

impl PdfScanner {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    ///
    /// Fails with [`ExtractError::DocumentUnreadable`] when the file is
    /// missing, not a valid PDF, or encrypted without a usable password.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document = Document::load(&path)
            .map_err(|e| ExtractError::DocumentUnreadable(e.to_string()))?;
        Self::from_document(document)
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data)
            .map_err(|e| ExtractError::DocumentUnreadable(e.to_string()))?;
        Self::from_document(document)
    }

    fn from_document(document: Document) -> Result<Self> {
        if document.is_encrypted() {
            return Err(ExtractError::DocumentUnreadable(
                "document is encrypted".into(),
            ));
        }
        Ok(Self { document })
    }

    // ── Scanning ──────────────────────────────────────────────────────────────

    /// Materialise every page's text and images, in document order.
    ///
    /// A page whose text cannot be decoded contributes an empty string; a
    /// page without image resources contributes an empty image list. Neither
    /// is an error.
    pub fn pages(&self) -> Vec<PageContent> {
        self.document
            .get_pages()
            .into_iter()
            .map(|(page_number, page_id)| PageContent {
                page_number,
                text: self
                    .document
                    .extract_text(&[page_number])
                    .unwrap_or_default(),
                images: self.page_images(page_id),
            })
            .collect()
    }

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    // ── Private: image enumeration ───────────────────────────────────────────

    /// Collect the raw payload of every image XObject on a page, in the
    /// order the resource dictionary lists them.
    fn page_images(&self, page_id: ObjectId) -> Vec<Vec<u8>> {
        let mut out = Vec::new();

        let Some(resources) = self.page_resources(page_id) else {
            return out;
        };

        // /XObject may be an inline dict or an indirect reference
        let Some(xobjects) = self.resolve_dict(resources.get(b"XObject").ok()) else {
            return out;
        };

        for (_name, value) in xobjects.iter() {
            let stream = match value.as_reference() {
                Ok(id) => match self.document.get_object(id).and_then(Object::as_stream) {
                    Ok(s) => s.clone(),
                    Err(_) => continue,
                },
                // Some producers inline the stream directly
                Err(_) => match value.as_stream() {
                    Ok(s) => s.clone(),
                    Err(_) => continue,
                },
            };

            let is_image = stream
                .dict
                .get(b"Subtype")
                .and_then(Object::as_name)
                .map(|n| n == b"Image")
                .unwrap_or(false);
            if !is_image {
                continue;
            }

            // Image filters (DCTDecode etc.) cannot be undone here; fall
            // back to the stored bytes, matching the legacy behaviour of
            // writing the stream payload as-is.
            let data = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            out.push(data);
        }

        out
    }

    /// Resolve a page's /Resources entry, which may be inline or indirect.
    fn page_resources(&self, page_id: ObjectId) -> Option<Dictionary> {
        let page_dict = self
            .document
            .get_object(page_id)
            .ok()?
            .as_dict()
            .ok()?
            .clone();
        self.resolve_dict(page_dict.get(b"Resources").ok())
    }

    /// Resolve an object that is either a dictionary or a reference to one.
    fn resolve_dict(&self, value: Option<&Object>) -> Option<Dictionary> {
        let value = value?;
        if let Ok(id) = value.as_reference() {
            self.document
                .get_object(id)
                .ok()
                .and_then(|o| o.as_dict().ok().cloned())
        } else {
            value.as_dict().ok().cloned()
        }
    }
}
