//! Static extension-priority table.
//!
//! Maps a lowercase file extension (no leading dot) to the ordered list of
//! converters preferred for it. File-specific tools come first (marker for
//! PDF, mammoth for DOCX), universal converters after. Extensions with no
//! entry are handled by the directory's load-order fallback; the table only
//! encodes explicit preferences.

use doc2md_core::ConverterKind;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Image extensions routed through OCR-capable converters.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "heic"];

/// Audio extensions; only markitdown transcribes.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "flac"];

static PRIORITY: LazyLock<HashMap<&'static str, Vec<ConverterKind>>> = LazyLock::new(|| {
    use ConverterKind::{
        Docling, Html2text, Mammoth, Marker, Markitdown, Pandoc, Unstructured,
    };

    let mut table: HashMap<&'static str, Vec<ConverterKind>> = HashMap::new();

    table.insert("pdf", vec![Marker, Docling, Markitdown, Pandoc, Unstructured]);
    table.insert("docx", vec![Mammoth, Markitdown, Docling, Pandoc, Unstructured]);
    table.insert("doc", vec![Markitdown, Pandoc, Unstructured]);
    table.insert("pptx", vec![Docling, Markitdown, Unstructured]);
    table.insert("ppt", vec![Markitdown, Unstructured]);
    table.insert("xlsx", vec![Docling, Markitdown, Unstructured]);
    table.insert("xls", vec![Markitdown, Unstructured]);
    table.insert("html", vec![Html2text, Markitdown, Pandoc, Unstructured]);
    table.insert("htm", vec![Html2text, Markitdown, Pandoc, Unstructured]);
    table.insert("csv", vec![Markitdown, Unstructured]);
    table.insert("json", vec![Markitdown, Pandoc]);
    table.insert("xml", vec![Markitdown, Html2text, Unstructured]);
    table.insert("tex", vec![Pandoc]);
    table.insert("latex", vec![Pandoc]);
    table.insert("rst", vec![Pandoc, Unstructured]);
    table.insert("epub", vec![Pandoc, Markitdown]);
    table.insert("ipynb", vec![Pandoc]);

    for &ext in IMAGE_EXTENSIONS {
        table.insert(ext, vec![Markitdown, Docling, Unstructured]);
    }

    for &ext in AUDIO_EXTENSIONS {
        table.insert(ext, vec![Markitdown]);
    }

    table
});

/// Preferred converter order for an extension, or `None` when the extension
/// has no entry. `ext` must already be lowercase without the leading dot.
#[must_use = "returns the preference list for this extension"]
pub fn priority_for(ext: &str) -> Option<&'static [ConverterKind]> {
    PRIORITY.get(ext).map(Vec::as_slice)
}
