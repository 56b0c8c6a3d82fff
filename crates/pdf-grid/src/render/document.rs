//! Page tree and catalog assembly

use lopdf::{Dictionary, Document, Object, ObjectId};

/// Install the Pages tree and Catalog for an output document.
///
/// `pages_tree_id` must have been reserved with `new_object_id` and used
/// as the `Parent` of every page in `page_ids`.
pub fn finish_page_tree(
    output: &mut Document,
    pages_tree_id: ObjectId,
    page_ids: &[ObjectId],
) {
    let kids: Vec<Object> = page_ids.iter().copied().map(Object::Reference).collect();

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_ids.len() as i64)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

/// Object ID of the first page of a document
pub fn first_page_id(doc: &Document) -> Option<ObjectId> {
    doc.get_pages().values().next().copied()
}
