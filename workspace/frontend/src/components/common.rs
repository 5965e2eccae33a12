pub mod pagination;
pub mod tabs;
