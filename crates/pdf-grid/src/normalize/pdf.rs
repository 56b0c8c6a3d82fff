//! First-page extraction from PDF inputs

use crate::render::{
    copy_object_deep, finish_page_tree, first_page_id, inherited_attribute, page_item_box,
    rect_to_object,
};
use crate::types::*;
use lopdf::{Dictionary, Document, Object};
use std::collections::HashMap;

/// Build a single-page document holding a copy of the first page of `source`.
///
/// Inherited attributes are resolved onto the copied page, and the visible
/// box becomes the new MediaBox. Annotations are left behind.
pub fn first_page_document(source: &Document) -> Result<Document> {
    let page_id = first_page_id(source).ok_or(GridError::EmptyPdf)?;
    let item = page_item_box(source, page_id)?;

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut cache = HashMap::new();

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_tree_id));
    page_dict.set("MediaBox", rect_to_object(&item.bounds));

    if item.rotation != 0 {
        page_dict.set("Rotate", Object::Integer(item.rotation as i64));
    }

    let resources = inherited_attribute(source, page_id, b"Resources")?
        .map(|res| copy_object_deep(&mut output, source, &res, &mut cache))
        .transpose()?
        .unwrap_or_else(|| Object::Dictionary(Dictionary::new()));
    page_dict.set("Resources", resources);

    if let Ok(contents) = source.get_dictionary(page_id)?.get(b"Contents") {
        let contents = copy_object_deep(&mut output, source, contents, &mut cache)?;
        page_dict.set("Contents", contents);
    }

    let new_page_id = output.add_object(page_dict);
    finish_page_tree(&mut output, pages_tree_id, &[new_page_id]);

    Ok(output)
}
