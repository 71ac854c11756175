mod create_category;
mod delete_category;
mod get_categories;

pub use create_category::{CreateCategoryError, CreateCategoryUseCase};
pub use delete_category::{DeleteCategoryError, DeleteCategoryUseCase};
pub use get_categories::{GetCategoriesError, GetCategoriesUseCase};
