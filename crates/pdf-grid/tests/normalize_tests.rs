mod common;

use common::{create_test_pdf, media_box_size, write_test_pdf, write_test_png};
use pdf_grid::normalize::{image_page_size, normalize_bytes};
use pdf_grid::render::first_page_id;
use pdf_grid::*;

#[tokio::test]
async fn test_image_embedded_at_300_dpi() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    write_test_png(&path, 600, 300);

    let doc = normalize_item(&path).await.unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    let page_id = first_page_id(&doc).unwrap();
    let (w, h) = media_box_size(&doc, page_id);
    assert!((w - 144.0).abs() < 0.01);
    assert!((h - 72.0).abs() < 0.01);
}

#[test]
fn test_image_page_size() {
    let close = |(a, b): (f32, f32), (x, y): (f32, f32)| (a - x).abs() < 0.01 && (b - y).abs() < 0.01;
    assert!(close(image_page_size(300, 600), (72.0, 144.0)));
    assert!(close(image_page_size(2550, 3300), (612.0, 792.0)));
}

#[test]
fn test_pdf_keeps_only_first_page() {
    let mut source = create_test_pdf(&[(200, 100), (612, 792), (612, 792)]);
    let mut bytes = Vec::new();
    source.save_to(&mut bytes).unwrap();

    let doc = normalize_bytes(ItemKind::Pdf, &bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    let page_id = first_page_id(&doc).unwrap();
    assert_eq!(media_box_size(&doc, page_id), (200.0, 100.0));
}

#[test]
fn test_pdf_without_pages_is_rejected() {
    let mut source = create_test_pdf(&[]);
    let mut bytes = Vec::new();
    source.save_to(&mut bytes).unwrap();

    assert!(matches!(
        normalize_bytes(ItemKind::Pdf, &bytes),
        Err(GridError::EmptyPdf)
    ));
}

#[tokio::test]
async fn test_unreadable_image_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    tokio::fs::write(&path, b"definitely not a png").await.unwrap();

    assert!(matches!(
        normalize_item(&path).await,
        Err(GridError::Image(_))
    ));
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = normalize_item(dir.path().join("missing.pdf")).await;
    assert!(matches!(result, Err(GridError::Io(_))));
}

#[tokio::test]
async fn test_normalize_items_skips_failures() {
    let dir = tempfile::tempdir().unwrap();
    let good_png = dir.path().join("good.png");
    let bad_png = dir.path().join("bad.png");
    let good_pdf = dir.path().join("good.pdf");
    write_test_png(&good_png, 30, 30);
    tokio::fs::write(&bad_png, b"garbage").await.unwrap();
    write_test_pdf(&good_pdf, &[(612, 792)]);

    let mut progress = Vec::new();
    let outcome = normalize_items(&[&good_png, &bad_png, &good_pdf], |done, total| {
        progress.push((done, total))
    })
    .await;

    assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);

    let indices: Vec<usize> = outcome.items.iter().map(|item| item.item_index).collect();
    assert_eq!(indices, vec![0, 2]);

    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].item_index, 1);
    assert_eq!(outcome.failures[0].file_name(), "bad.png");
}

#[tokio::test]
async fn test_normalized_item_dimensions_follow_rotation() {
    let mut source = create_test_pdf(&[(200, 100)]);
    let page_id = first_page_id(&source).unwrap();
    source
        .get_dictionary_mut(page_id)
        .unwrap()
        .set("Rotate", lopdf::Object::Integer(90));
    let mut bytes = Vec::new();
    source.save_to(&mut bytes).unwrap();

    let item = NormalizedItem {
        item_index: 0,
        path: "rotated.pdf".into(),
        document: normalize_bytes(ItemKind::Pdf, &bytes).unwrap(),
    };
    let (w, h) = item.dimensions().unwrap();
    assert!((w - 100.0).abs() < 0.01);
    assert!((h - 200.0).abs() < 0.01);
}

fn numbers(obj: &lopdf::Object) -> Vec<f32> {
    obj.as_array()
        .unwrap()
        .iter()
        .map(|n| match n {
            lopdf::Object::Integer(i) => *i as f32,
            lopdf::Object::Real(r) => *r,
            _ => panic!("not a number"),
        })
        .collect()
}

/// A compressed one-page PDF whose MediaBox, Resources and optional Rotate
/// sit on the parent Pages node, with a CropBox of [50 50 250 450] on the page
fn inherited_box_pdf(rotate: Option<i64>) -> Vec<u8> {
    use lopdf::{Dictionary, Object};

    let mut source = create_test_pdf(&[(300, 500)]);
    let page_id = first_page_id(&source).unwrap();
    let pages_id = source
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Parent")
        .unwrap()
        .as_reference()
        .unwrap();

    let page = source.get_dictionary_mut(page_id).unwrap();
    let media_box = page.remove(b"MediaBox").unwrap();
    page.remove(b"Resources");
    page.set(
        "CropBox",
        Object::Array(vec![
            Object::Integer(50),
            Object::Integer(50),
            Object::Integer(250),
            Object::Integer(450),
        ]),
    );

    let graphics_state = Dictionary::from_iter(vec![("CA", Object::Real(0.5))]);
    let ext_g_state = Dictionary::from_iter(vec![("GS0", Object::Dictionary(graphics_state))]);
    let resources = Dictionary::from_iter(vec![("ExtGState", Object::Dictionary(ext_g_state))]);

    let pages = source.get_dictionary_mut(pages_id).unwrap();
    pages.set("MediaBox", media_box);
    pages.set("Resources", Object::Dictionary(resources));
    if let Some(rotate) = rotate {
        pages.set("Rotate", Object::Integer(rotate));
    }

    source.compress();
    let mut bytes = Vec::new();
    source.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_inherited_attributes_resolved_onto_page() {
    let doc = normalize_bytes(ItemKind::Pdf, &inherited_box_pdf(None)).unwrap();
    let page_id = first_page_id(&doc).unwrap();
    let page = doc.get_dictionary(page_id).unwrap();

    assert_eq!(
        numbers(page.get(b"MediaBox").unwrap()),
        vec![50.0, 50.0, 250.0, 450.0]
    );
    let resources = page.get_deref(b"Resources", &doc).unwrap().as_dict().unwrap();
    assert!(resources.has(b"ExtGState"));
    assert!(page.get(b"Rotate").is_err());

    let item = NormalizedItem {
        item_index: 0,
        path: "cropped.pdf".into(),
        document: doc,
    };
    let (w, h) = item.dimensions().unwrap();
    assert!((w - 200.0).abs() < 0.01);
    assert!((h - 400.0).abs() < 0.01);
}

#[test]
fn test_inherited_rotation_swaps_dimensions() {
    let doc = normalize_bytes(ItemKind::Pdf, &inherited_box_pdf(Some(90))).unwrap();
    let page_id = first_page_id(&doc).unwrap();
    let rotate = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Rotate")
        .unwrap()
        .as_i64()
        .unwrap();
    assert_eq!(rotate, 90);

    let item = NormalizedItem {
        item_index: 0,
        path: "turned.pdf".into(),
        document: doc,
    };
    let (w, h) = item.dimensions().unwrap();
    assert!((w - 400.0).abs() < 0.01);
    assert!((h - 200.0).abs() < 0.01);
}

#[test]
fn test_cropped_item_placed_with_crop_box_bounds() {
    let item = NormalizedItem {
        item_index: 0,
        path: "cropped.pdf".into(),
        document: normalize_bytes(ItemKind::Pdf, &inherited_box_pdf(None)).unwrap(),
    };

    let composed = compose_sync(&[item], &GridOptions::default(), |_, _| {}).unwrap();
    assert!(composed.warnings.is_empty());

    let doc = &composed.document;
    let page_id = doc.get_pages()[&1];
    let resources = doc
        .get_dictionary(page_id)
        .unwrap()
        .get_deref(b"Resources", doc)
        .unwrap()
        .as_dict()
        .unwrap();
    let xobjects = resources.get_deref(b"XObject", doc).unwrap().as_dict().unwrap();
    let (_, placed) = doc.dereference(xobjects.get(b"P0").unwrap()).unwrap();
    let bbox = placed.as_stream().unwrap().dict.get(b"BBox").unwrap();

    assert_eq!(numbers(bbox), vec![50.0, 50.0, 250.0, 450.0]);
}
