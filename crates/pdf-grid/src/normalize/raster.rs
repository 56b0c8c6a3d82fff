//! Raster image to single-page PDF conversion

use crate::constants::{IMAGE_RESOLUTION_DPI, POINTS_PER_INCH};
use crate::render::finish_page_tree;
use crate::types::*;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{DynamicImage, RgbImage};
use lopdf::{Dictionary, Document, Object, Stream};
use std::io::Write;

/// Resource name of the embedded image on its page
const IMAGE_RESOURCE_NAME: &str = "Im0";

/// Page size in points for an image of the given pixel size
pub fn image_page_size(width_px: u32, height_px: u32) -> (f32, f32) {
    let points_per_pixel = POINTS_PER_INCH / IMAGE_RESOLUTION_DPI;
    (
        width_px as f32 * points_per_pixel,
        height_px as f32 * points_per_pixel,
    )
}

/// Composite the image over white and drop the alpha channel.
///
/// Images without alpha are converted to 8-bit RGB unchanged.
pub fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());

    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let alpha = src[3] as u32;
        for channel in 0..3 {
            let blended = (src[channel] as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
            dst[channel] = blended as u8;
        }
    }

    rgb
}

/// Decode an image and embed it as one full-bleed page at 300 DPI.
pub fn image_document(bytes: &[u8]) -> Result<Document> {
    let img = image::load_from_memory(bytes)?;
    let (width_px, height_px) = (img.width(), img.height());

    if width_px == 0 || height_px == 0 {
        return Err(GridError::Layout("image has no pixels".to_string()));
    }

    let rgb = flatten_onto_white(&img);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(rgb.as_raw())?;
    let data = encoder.finish()?;

    let (width_pt, height_pt) = image_page_size(width_px, height_px);

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(width_px as i64));
    image_dict.set("Height", Object::Integer(height_px as i64));
    image_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    image_dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
    let mut image_stream = Stream::new(image_dict, data);
    image_stream.allows_compression = false;
    let image_id = output.add_object(image_stream);

    let content = format!(
        "q {} 0 0 {} 0 0 cm /{} Do Q\n",
        width_pt, height_pt, IMAGE_RESOURCE_NAME
    );
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_RESOURCE_NAME, Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let page_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_tree_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width_pt),
                Object::Real(height_pt),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]));

    finish_page_tree(&mut output, pages_tree_id, &[page_id]);

    Ok(output)
}
