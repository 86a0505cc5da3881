pub mod generate;
pub mod sessions;
