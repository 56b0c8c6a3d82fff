use pdf_grid::*;
use std::path::PathBuf;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_paper_size_with_orientation() {
    let a4 = PaperSize::A4;
    assert_eq!(
        a4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
    assert_eq!(
        a4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
}

#[test]
fn test_paper_size_in_points() {
    let (w, h) = PaperSize::Letter.dimensions_pt(Orientation::Portrait);
    assert!((w - 612.0).abs() < 0.1);
    assert!((h - 792.0).abs() < 0.1);

    let (w, h) = PaperSize::A4.dimensions_pt(Orientation::Landscape);
    assert!((w - 841.9).abs() < 0.1);
    assert!((h - 595.3).abs() < 0.1);
}

#[test]
fn test_item_kind_from_extension() {
    assert_eq!(ItemKind::from_path("a.pdf"), ItemKind::Pdf);
    assert_eq!(ItemKind::from_path("scan.PDF"), ItemKind::Pdf);
    assert_eq!(ItemKind::from_path("photo.jpg"), ItemKind::Image);
    assert_eq!(ItemKind::from_path("photo.tiff"), ItemKind::Image);
    assert_eq!(ItemKind::from_path("no_extension"), ItemKind::Image);
}

#[test]
fn test_item_failure_display() {
    let failure = ItemFailure {
        item_index: 2,
        path: PathBuf::from("/tmp/input/broken.pdf"),
        error: GridError::EmptyPdf,
    };
    assert_eq!(failure.file_name(), "broken.pdf");
    assert_eq!(
        failure.to_string(),
        "PDF processing failed (broken.pdf): PDF file has no pages"
    );

    let failure = ItemFailure {
        item_index: 0,
        path: PathBuf::from("cat.png"),
        error: GridError::Layout("image has no pixels".to_string()),
    };
    assert!(failure.to_string().starts_with("Image conversion failed (cat.png)"));
}

#[test]
fn test_defaults() {
    assert_eq!(Orientation::default(), Orientation::Portrait);
    assert_eq!(PaperSize::default(), PaperSize::A4);
}
