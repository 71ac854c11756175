mod get_admin_stats;

pub use get_admin_stats::{AdminStats, GetAdminStatsError, GetAdminStatsUseCase};
