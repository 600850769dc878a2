pub mod chart_service;
pub mod rate_service;
pub mod sample_service;
