//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the mock
//! store and external systems.

pub mod dashboard;
pub mod insights;
pub mod live;
pub mod profile;

pub use dashboard::DashboardService;
pub use insights::InsightService;
pub use profile::ProfileService;
