use crate::options::GridOptions;
use crate::types::*;

/// Calculate statistics for merging `item_count` items with the given layout
pub fn calculate_statistics(item_count: usize, options: &GridOptions) -> Result<MergeStatistics> {
    options.validate_layout()?;

    if item_count == 0 {
        return Err(GridError::NoItems);
    }

    let items_per_page = options.items_per_page();
    let output_pages = item_count.div_ceil(items_per_page);
    let empty_cells = output_pages * items_per_page - item_count;

    Ok(MergeStatistics {
        items: item_count,
        items_per_page,
        output_pages,
        empty_cells,
    })
}
