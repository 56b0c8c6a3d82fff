mod common;

use common::{create_test_pdf, media_box_size};
use lopdf::Document;
use pdf_grid::render::first_page_id;
use pdf_grid::*;
use std::path::PathBuf;

fn test_items(sizes: &[(i64, i64)]) -> Vec<NormalizedItem> {
    sizes
        .iter()
        .enumerate()
        .map(|(item_index, &size)| NormalizedItem {
            item_index,
            path: PathBuf::from(format!("item{}.pdf", item_index)),
            document: create_test_pdf(&[size]),
        })
        .collect()
}

fn page_content(doc: &Document, page_number: u32) -> String {
    let page_id = doc.get_pages()[&page_number];
    String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap()
}

#[tokio::test]
async fn test_items_fill_pages_in_order() {
    let items = test_items(&[(612, 792); 7]);
    let composed = compose(items, GridOptions::default(), |_, _| {})
        .await
        .unwrap();

    assert_eq!(composed.page_count, 2);
    assert_eq!(composed.document.get_pages().len(), 2);
    assert!(composed.warnings.is_empty());

    let first = page_content(&composed.document, 1);
    assert_eq!(first.matches(" Do Q").count(), 6);
    assert!(first.contains("/P5 Do"));

    let second = page_content(&composed.document, 2);
    assert_eq!(second.matches(" Do Q").count(), 1);
    assert!(second.contains("/P0 Do"));
}

#[test]
fn test_output_page_size_follows_layout() {
    let items = test_items(&[(100, 100)]);

    let portrait = compose_sync(&items, &GridOptions::default(), |_, _| {}).unwrap();
    let page_id = first_page_id(&portrait.document).unwrap();
    let (w, h) = media_box_size(&portrait.document, page_id);
    assert!((w - 595.3).abs() < 0.1);
    assert!((h - 841.9).abs() < 0.1);

    let options = GridOptions {
        orientation: Orientation::Landscape,
        paper_size: PaperSize::Letter,
        ..Default::default()
    };
    let landscape = compose_sync(&items, &options, |_, _| {}).unwrap();
    let page_id = first_page_id(&landscape.document).unwrap();
    let (w, h) = media_box_size(&landscape.document, page_id);
    assert!((w - 792.0).abs() < 0.1);
    assert!((h - 612.0).abs() < 0.1);
}

#[test]
fn test_progress_reports_every_item() {
    let items = test_items(&[(612, 792); 5]);
    let options = GridOptions {
        rows: 2,
        cols: 2,
        ..Default::default()
    };

    let mut progress = Vec::new();
    let composed = compose_sync(&items, &options, |done, total| progress.push((done, total))).unwrap();

    assert_eq!(composed.page_count, 2);
    assert_eq!(progress, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
}

#[test]
fn test_unplaceable_item_leaves_empty_cell() {
    let mut items = test_items(&[(612, 792); 3]);
    items[1].document = create_test_pdf(&[]);

    let composed = compose_sync(&items, &GridOptions::default(), |_, _| {}).unwrap();

    assert_eq!(composed.page_count, 1);
    assert_eq!(composed.warnings.len(), 1);
    assert_eq!(composed.warnings[0].item_index, 1);

    let content = page_content(&composed.document, 1);
    assert!(content.contains("/P0 Do"));
    assert!(!content.contains("/P1 Do"));
    assert!(content.contains("/P2 Do"));
}

#[test]
fn test_compose_requires_items() {
    assert!(matches!(
        compose_sync(&[], &GridOptions::default(), |_, _| {}),
        Err(GridError::NoItems)
    ));
}

#[test]
fn test_compose_rejects_invalid_layout() {
    let items = test_items(&[(612, 792)]);
    let options = GridOptions {
        rows: 0,
        ..Default::default()
    };
    assert!(matches!(
        compose_sync(&items, &options, |_, _| {}),
        Err(GridError::Config(_))
    ));
}

#[tokio::test]
async fn test_preview_has_one_page() {
    let items = test_items(&[(612, 792); 9]);
    let options = GridOptions {
        rows: 2,
        cols: 2,
        ..Default::default()
    };

    let preview = generate_preview(&items, &options).await.unwrap();
    assert_eq!(preview.page_count, 1);
    assert_eq!(page_content(&preview.document, 1).matches(" Do Q").count(), 4);
}

#[tokio::test]
async fn test_save_and_reload_composed_document() {
    let items = test_items(&[(612, 792), (792, 612), (300, 300)]);
    let options = GridOptions {
        rows: 1,
        cols: 2,
        ..Default::default()
    };
    let composed = compose(items, options, |_, _| {}).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("merged.pdf");
    save_pdf(composed.document, &path).await.unwrap();

    let reloaded = load_pdf(&path).await.unwrap();
    assert_eq!(reloaded.get_pages().len(), 2);
}
