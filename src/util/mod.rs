pub mod human;
pub mod shorten;
