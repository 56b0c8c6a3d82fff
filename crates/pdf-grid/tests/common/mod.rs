#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, Stream};
use std::path::Path;

/// Build a document with one page per entry of `sizes` (width, height in points)
pub fn create_test_pdf(sizes: &[(i64, i64)]) -> Document {
    let mut doc = Document::with_version("1.7");

    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for &(width, height) in sizes {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            b"0 0 1 rg 10 10 50 50 re f".to_vec(),
        ));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(height),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(sizes.len() as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a test PDF to `path`
pub fn write_test_pdf(path: &Path, sizes: &[(i64, i64)]) {
    let mut doc = create_test_pdf(sizes);
    doc.save(path).unwrap();
}

/// Write a solid-color PNG to `path`
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
    img.save(path).unwrap();
}

/// Page dimensions of a MediaBox as (width, height)
pub fn media_box_size(doc: &Document, page_id: lopdf::ObjectId) -> (f32, f32) {
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let num = |obj: &Object| match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        _ => panic!("MediaBox entry is not a number"),
    };
    (
        num(&media_box[2]) - num(&media_box[0]),
        num(&media_box[3]) - num(&media_box[1]),
    )
}
