mod get_admin_stats_service;

pub use get_admin_stats_service::GetAdminStatsService;
