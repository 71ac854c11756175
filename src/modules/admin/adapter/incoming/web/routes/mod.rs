mod get_admin_stats;

pub use get_admin_stats::{__path_get_admin_stats_handler, get_admin_stats_handler};
