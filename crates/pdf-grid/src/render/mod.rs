//! PDF rendering modules for grid composition
//!
//! This module handles all PDF-specific operations:
//! - Creating Form XObjects from intermediate pages
//! - Building composed output pages
//! - Deep copying PDF objects between documents
//! - Assembling the page tree

mod document;
mod page;
mod xobject;

pub use document::{finish_page_tree, first_page_id};
pub use page::*;
pub use xobject::{
    copy_object_deep, create_page_xobject, get_page_dimensions, inherited_attribute,
    page_item_box,
};
pub(crate) use xobject::rect_to_object;
