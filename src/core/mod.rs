pub mod backup;
pub mod log;
pub mod materialize;
pub mod reconcile;
pub mod store;
