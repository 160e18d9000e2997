//! Two-column PDF rendering of introspected records.

use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SerializerError, SerializerResult};
use crate::introspect::Introspect;

const PT_TO_MM: f32 = 25.4 / 72.0;

// A4 geometry in points: field names occupy the left band, values the right
// band, row N of both bands at the same height.
const PAGE_WIDTH_PT: f32 = 595.0;
const NAMES_X_PT: f32 = 36.0;
const VALUES_X_PT: f32 = 305.0;
const TITLE_Y_PT: f32 = 770.0;
const FIRST_ROW_Y_PT: f32 = 700.0;
const BOTTOM_MARGIN_PT: f32 = 36.0;
const ROW_HEIGHT_PT: f32 = 16.0;

fn mm(pt: f32) -> Mm {
    Mm(pt * PT_TO_MM)
}

/// Writes an introspected record into a fresh, timestamp-named PDF file.
///
/// Every call produces a new file `<TypeName>_<yyyyMMdd_HHmmss>.pdf` in the
/// output directory (created on demand). Two calls for the same type within
/// the same second collide; accepted limitation of the naming scheme.
#[derive(Debug, Clone)]
pub struct PdfSerializer {
    output_dir: PathBuf,
}

impl Default for PdfSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSerializer {
    /// Serializer writing into the conventional `pdf/` directory.
    pub fn new() -> Self {
        Self::with_output_dir("pdf")
    }

    pub fn with_output_dir(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Renders the record and returns the path of the written file.
    pub fn serialize<T: Introspect>(&self, record: &T) -> SerializerResult<PathBuf> {
        let type_name = T::type_name();
        let path = self.document_path(type_name)?;

        let (doc, page, layer) = PdfDocument::new(
            format!("Data of class {}", type_name),
            mm(PAGE_WIDTH_PT),
            Mm(297.0),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| SerializerError::Pdf(e.to_string()))?;

        let mut current = doc.get_page(page).get_layer(layer);

        let title = format!("Data of class {}:", type_name);
        current.use_text(title.as_str(), 14.0, centered_x(&title, 14.0), mm(TITLE_Y_PT), &font);

        let mut y_pt = FIRST_ROW_Y_PT;
        for field in record.fields() {
            if y_pt < BOTTOM_MARGIN_PT {
                current = add_page(&doc);
                y_pt = FIRST_ROW_Y_PT;
            }
            current.use_text(field.name, 11.0, mm(NAMES_X_PT), mm(y_pt), &font);
            current.use_text(field.value.as_str(), 11.0, mm(VALUES_X_PT), mm(y_pt), &font);
            y_pt -= ROW_HEIGHT_PT;
        }

        let file = File::create(&path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| SerializerError::Pdf(e.to_string()))?;

        debug!(path = %path.display(), "Wrote PDF document");
        Ok(path)
    }

    fn document_path(&self, type_name: &str) -> SerializerResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        Ok(self.output_dir.join(format!("{}_{}.pdf", type_name, stamp)))
    }
}

fn add_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(mm(PAGE_WIDTH_PT), Mm(297.0), "Layer 1");
    doc.get_page(page).get_layer(layer)
}

// Helvetica has no fixed advance width; half the font size per glyph is a
// close enough estimate to centre a short title line.
fn centered_x(text: &str, font_size: f32) -> Mm {
    let width_pt = text.chars().count() as f32 * font_size * 0.5;
    mm(((PAGE_WIDTH_PT - width_pt) / 2.0).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use introspect_derive::Introspect;
    use regex::Regex;

    #[derive(Introspect)]
    struct Sample {
        id: u64,
        label: String,
        ratio: f64,
        note: Option<String>,
    }

    fn sample() -> Sample {
        Sample {
            id: 7,
            label: "widget".to_string(),
            ratio: 0.5,
            note: None,
        }
    }

    #[test]
    fn writes_a_timestamped_file_for_the_record_type() {
        let dir = tempfile::tempdir().unwrap();
        let serializer = PdfSerializer::with_output_dir(dir.path());

        let path = serializer.serialize(&sample()).unwrap();

        let file_name = path.file_name().unwrap().to_str().unwrap();
        let pattern = Regex::new(r"^Sample_\d{8}_\d{6}\.pdf$").unwrap();
        assert!(pattern.is_match(file_name), "unexpected name: {file_name}");
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn creates_the_output_directory_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("pdf");
        let serializer = PdfSerializer::with_output_dir(&nested);

        let path = serializer.serialize(&sample()).unwrap();

        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));
    }
}
