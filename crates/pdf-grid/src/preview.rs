use crate::compose::{Composed, compose};
use crate::normalize::NormalizedItem;
use crate::options::GridOptions;
use crate::types::*;

/// Generate a preview of the merge.
///
/// Only the items that land on the first output page are composed, so the
/// result always has exactly one page.
pub async fn generate_preview(items: &[NormalizedItem], options: &GridOptions) -> Result<Composed> {
    options.validate_layout()?;

    let first_page: Vec<NormalizedItem> = items
        .iter()
        .take(options.items_per_page())
        .cloned()
        .collect();

    compose(first_page, options.clone(), |_, _| {}).await
}
