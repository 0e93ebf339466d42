pub mod index;
pub mod search;
pub mod show;
pub mod store;
