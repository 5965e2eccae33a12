pub mod list;
pub mod sortable_header;
