pub mod document_descriptor;
pub mod endpoint;
pub mod entry_map;
pub mod page_descriptor;
