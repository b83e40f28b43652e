pub mod purge_coordinator;

pub use purge_coordinator::PurgeCoordinator;
