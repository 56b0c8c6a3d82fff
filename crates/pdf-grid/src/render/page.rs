//! Output page rendering for grid composition

use super::xobject::{create_page_xobject, page_item_box, rect_to_object};
use super::first_page_id;
use crate::layout::{
    GridLayout, Placement, Rect, cell_bounds, grid_position, place_item, placement_matrix,
};
use crate::normalize::NormalizedItem;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// An output page and what happened to the items assigned to it
#[derive(Debug)]
pub struct RenderedPage {
    /// Object ID of the new page
    pub page_id: ObjectId,
    /// Items that were drawn
    pub placements: Vec<Placement>,
    /// Items that could not be drawn; their cells stay empty
    pub failures: Vec<ItemFailure>,
}

/// Render one output page holding up to `grid.cell_count()` items.
///
/// Items are assigned to cells in order, row-major from the top left.
///
/// # Arguments
/// * `output` - The output document
/// * `items` - The items for this page, at most one per cell
/// * `grid` - The grid layout
/// * `parent_pages_id` - The parent Pages object ID
/// * `on_item` - Called after each item, whether or not it could be drawn
pub fn render_grid_page<F>(
    output: &mut Document,
    items: &[&NormalizedItem],
    grid: &GridLayout,
    parent_pages_id: ObjectId,
    mut on_item: F,
) -> Result<RenderedPage>
where
    F: FnMut(),
{
    let mut content_ops = String::new();
    let mut xobjects = Dictionary::new();
    let mut placements = Vec::new();
    let mut failures = Vec::new();

    for (slot, item) in items.iter().enumerate().take(grid.cell_count()) {
        let cell = cell_bounds(grid, grid_position(grid, slot));
        let xobject_name = format!("P{}", slot);

        match place_on_cell(output, item, cell) {
            Ok((xobject_id, placement, matrix)) => {
                xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
                content_ops.push_str(&generate_placement_command(&xobject_name, &matrix));
                placements.push(placement);
            }
            Err(error) => {
                log::warn!(
                    "Skipping {} on output page: {}",
                    item.path.display(),
                    error
                );
                failures.push(ItemFailure {
                    item_index: item.item_index,
                    path: item.path.clone(),
                    error,
                });
            }
        }

        on_item();
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content_id = output.add_object(Stream::new(Dictionary::new(), content_ops.into_bytes()));

    let page_rect = Rect::new(0.0, 0.0, grid.page_width_pt, grid.page_height_pt);
    let page_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(parent_pages_id)),
        ("MediaBox", rect_to_object(&page_rect)),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]);

    Ok(RenderedPage {
        page_id: output.add_object(page_dict),
        placements,
        failures,
    })
}

/// Copy an item into the output as an XObject and compute where it goes
fn place_on_cell(
    output: &mut Document,
    item: &NormalizedItem,
    cell: Rect,
) -> Result<(ObjectId, Placement, [f32; 6])> {
    let source = &item.document;
    let page_id = first_page_id(source).ok_or(GridError::EmptyPdf)?;
    let item_box = page_item_box(source, page_id)?;

    let (width, height) = item_box.display_size();
    let placement = place_item(item.item_index, cell, width, height);
    let matrix = placement_matrix(&placement, &item_box);

    // Object IDs are only unique within one source document
    let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();
    let xobject_id = create_page_xobject(output, source, page_id, &mut cache)?;

    Ok((xobject_id, placement, matrix))
}

/// Generate the PDF content stream command to place an item.
fn generate_placement_command(xobject_name: &str, matrix: &[f32; 6]) -> String {
    format!(
        "q {} {} {} {} {} {} cm /{} Do Q\n",
        matrix[0], matrix[1], matrix[2], matrix[3], matrix[4], matrix[5], xobject_name
    )
}
