use pdfium_render::prelude::*;

/// Initialize Pdfium, trying the vendored library first, then falling back to system
pub fn init_pdfium() -> Result<Pdfium, PdfiumError> {
    // Relative to the working directory, which is the workspace root under cargo
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// A rasterized preview page
pub struct RenderedPreview {
    pub rgba_data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

/// Rasterize the first page of an in-memory PDF.
///
/// `scale` is relative to 72 DPI.
pub fn render_first_page(pdf_bytes: &[u8], scale: f32) -> Result<RenderedPreview, PdfiumError> {
    let pdfium = init_pdfium()?;
    let document = pdfium.load_pdf_from_byte_slice(pdf_bytes, None)?;
    let page = document.pages().get(0)?;

    let config = PdfRenderConfig::new().scale_page_by_factor(scale);
    let bitmap = page.render_with_config(&config)?;

    Ok(RenderedPreview {
        rgba_data: bitmap.as_rgba_bytes().to_vec(),
        width: bitmap.width() as usize,
        height: bitmap.height() as usize,
    })
}
