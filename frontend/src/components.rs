pub mod footer;
pub mod nav_link;
