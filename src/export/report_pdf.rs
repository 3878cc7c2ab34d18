use crate::core::report::Block;
use crate::errors::{AppError, AppResult};
use crate::export::pdf::{Align, PdfManager};

/// Lay the blocks out on A4 pages and return the PDF bytes.
pub fn render_blocks(blocks: &[Block]) -> AppResult<Vec<u8>> {
    let mut pdf = PdfManager::new();

    for block in blocks {
        match block {
            Block::HeaderImage(img) => {
                pdf.add_image(img, 180.0, 90.0)
                    .map_err(|e| AppError::Pdf(format!("header image: {e}")))?;
                pdf.add_spacer(8.0);
            }
            Block::Title(text) => {
                pdf.add_paragraph(text, 16.0, Align::Center, true);
                pdf.add_spacer(12.0);
            }
            Block::Field { label, value } => {
                pdf.add_paragraph(&format!("{label}: {value}"), 11.0, Align::Left, false);
            }
            Block::Narrative(text) => {
                pdf.add_spacer(12.0);
                pdf.add_paragraph(text, 11.0, Align::Left, false);
            }
            Block::PhotoCaption(text) => {
                pdf.add_spacer(12.0);
                pdf.add_paragraph(text, 10.0, Align::Left, true);
            }
            Block::Photo(img) => {
                pdf.add_image(img, 320.0, 260.0)
                    .map_err(|e| AppError::Pdf(format!("photo: {e}")))?;
            }
            Block::Footer(text) => {
                pdf.add_spacer(18.0);
                pdf.add_paragraph(text, 9.0, Align::Center, false);
            }
        }
    }

    Ok(pdf.finish())
}
