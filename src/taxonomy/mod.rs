mod table;
mod validate;

pub use table::{CATEGORIES, SUBCATEGORIES, is_category, parent_category};
pub use validate::{CategoryAssignment, validate_category};
