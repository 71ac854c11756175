mod create_category;
mod delete_category;
mod get_categories;

pub use create_category::{
    __path_create_category_handler, create_category_handler, CreateCategoryRequest,
};
pub use delete_category::{
    __path_delete_category_handler, delete_category_handler, DeleteCategoryResponse,
};
pub use get_categories::{__path_get_categories_handler, get_categories_handler};
