pub mod list;
pub mod search;
pub mod shorten;
pub mod status;
pub mod visit;
