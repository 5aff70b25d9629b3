pub mod failed;
pub mod loading;
pub mod quiz;
pub mod summary;
