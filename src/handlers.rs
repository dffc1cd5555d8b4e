pub mod dashboard;
pub mod stores;
