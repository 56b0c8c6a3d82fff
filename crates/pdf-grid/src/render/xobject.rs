//! XObject creation for grid composition
//!
//! This module handles creating Form XObjects from intermediate pages,
//! which are then placed onto output pages with transformations.

use crate::constants::{DEFAULT_PAGE_DIMENSIONS, MAX_PAGE_TREE_DEPTH};
use crate::layout::{ItemBox, Rect};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a page.
///
/// The XObject's bounding box is the page's visible box, so content
/// outside the CropBox is clipped just as a viewer would clip it.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The document containing the page
/// * `page_id` - The object ID of the page
/// * `cache` - Maps object IDs of `source` to their copies in `output`;
///   must not be shared between different source documents
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let item = page_item_box(source, page_id)?;

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", rect_to_object(&item.bounds));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => get_single_content_stream(doc, *id),
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        Object::Stream(stream) => Ok(stream_content(stream)),
        _ => Ok(Vec::new()),
    }
}

fn stream_content(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

/// Get content from a single content stream reference
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    match doc.get_object(id)? {
        Object::Stream(stream) => Ok(stream_content(stream)),
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                result.extend_from_slice(&stream_content(stream));
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// `Parent` entries are dropped so copying a page or a resource that points
/// back into the page tree does not drag the whole tree along.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID before recursing so reference cycles terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let new_dict = copy_dictionary(output, source, &stream.dict, cache)?;
            let mut copied = Stream::new(new_dict, stream.content.clone());
            copied.allows_compression = stream.allows_compression;
            Ok(Object::Stream(copied))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, walking up the page tree for inheritable keys.
///
/// Reference values are resolved one level so callers get the dictionary
/// or array itself.
pub fn inherited_attribute(
    doc: &Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<Object>> {
    let mut current = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = current.get(key) {
            let resolved = match value {
                Object::Reference(id) => doc.get_object(*id)?.clone(),
                other => other.clone(),
            };
            return Ok(Some(resolved));
        }

        match current.get(b"Parent").and_then(|p| p.as_reference()) {
            Ok(parent_id) => current = doc.get_dictionary(parent_id)?,
            Err(_) => break,
        }
    }

    Ok(None)
}

/// Visible box and rotation of a page.
///
/// Uses the CropBox when present, otherwise the MediaBox, falling back to
/// US Letter when neither is usable.
pub fn page_item_box(doc: &Document, page_id: ObjectId) -> Result<ItemBox> {
    let media_box = inherited_attribute(doc, page_id, b"MediaBox")?
        .and_then(|obj| rect_from_object(&obj))
        .unwrap_or_else(default_media_box);

    let bounds = inherited_attribute(doc, page_id, b"CropBox")?
        .and_then(|obj| rect_from_object(&obj))
        .unwrap_or(media_box);

    let rotation = inherited_attribute(doc, page_id, b"Rotate")?
        .and_then(|obj| obj.as_i64().ok())
        .unwrap_or(0);

    Ok(ItemBox::new(bounds, rotation as i32))
}

/// Get page dimensions (width, height) in points as displayed
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    Ok(page_item_box(doc, page_id)?.display_size())
}

/// Default box for US Letter size
fn default_media_box() -> Rect {
    Rect::new(0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1)
}

/// Parse a PDF rectangle array `[llx lly urx ury]`, normalizing corner order
fn rect_from_object(obj: &Object) -> Option<Rect> {
    let arr = obj.as_array().ok()?;
    if arr.len() != 4 {
        return None;
    }

    let coords: Vec<f32> = arr.iter().filter_map(extract_number).collect();
    if coords.len() != 4 {
        return None;
    }

    let (x0, x1) = (coords[0].min(coords[2]), coords[0].max(coords[2]));
    let (y0, y1) = (coords[1].min(coords[3]), coords[1].max(coords[3]));

    if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
        return None;
    }

    Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

pub(crate) fn rect_to_object(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.x),
        Object::Real(rect.y),
        Object::Real(rect.right()),
        Object::Real(rect.top()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_object_normalizes_corners() {
        let obj = Object::Array(vec![
            Object::Integer(100),
            Object::Real(200.0),
            Object::Integer(0),
            Object::Integer(50),
        ]);
        let rect = rect_from_object(&obj).unwrap();
        assert_eq!(rect, Rect::new(0.0, 50.0, 100.0, 150.0));
    }

    #[test]
    fn test_rect_from_object_rejects_bad_boxes() {
        assert!(rect_from_object(&Object::Integer(3)).is_none());
        assert!(rect_from_object(&Object::Array(vec![Object::Integer(0); 3])).is_none());
        assert!(rect_from_object(&Object::Array(vec![Object::Integer(0); 4])).is_none());
    }
}
