use pdf_grid::*;

#[test]
fn test_statistics_partial_last_page() {
    let options = GridOptions::default();
    let stats = calculate_statistics(7, &options).unwrap();

    assert_eq!(stats.items, 7);
    assert_eq!(stats.items_per_page, 6);
    assert_eq!(stats.output_pages, 2);
    assert_eq!(stats.empty_cells, 5);
}

#[test]
fn test_statistics_exact_fill() {
    let options = GridOptions {
        rows: 2,
        cols: 2,
        ..Default::default()
    };
    let stats = calculate_statistics(8, &options).unwrap();

    assert_eq!(stats.output_pages, 2);
    assert_eq!(stats.empty_cells, 0);
}

#[test]
fn test_statistics_single_cell() {
    let options = GridOptions {
        rows: 1,
        cols: 1,
        ..Default::default()
    };
    let stats = calculate_statistics(3, &options).unwrap();
    assert_eq!(stats.output_pages, 3);
}

#[test]
fn test_statistics_errors() {
    let options = GridOptions::default();
    assert!(matches!(
        calculate_statistics(0, &options),
        Err(GridError::NoItems)
    ));

    let invalid = GridOptions {
        cols: 0,
        ..Default::default()
    };
    assert!(matches!(
        calculate_statistics(4, &invalid),
        Err(GridError::Config(_))
    ));
}
