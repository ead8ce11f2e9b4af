//! Repository implementations for domain entities
//!
//! Each repository encapsulates the SQL for one aggregate and maps
//! database rows into domain types. The runtime query API is used
//! throughout so the crate builds without a live database; queries are
//! exercised by the integration suite instead.

pub mod bill;
pub mod points;
pub mod stats;
pub mod wireman;

pub use bill::BillRepository;
pub use points::PointsRepository;
pub use stats::StatsRepository;
pub use wireman::WiremanRepository;
