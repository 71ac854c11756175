mod likes;
pub mod post_query_postgres;
pub mod post_repository_postgres;
pub mod sea_orm_entity;

pub use post_query_postgres::PostQueryPostgres;
pub use post_repository_postgres::PostRepositoryPostgres;
