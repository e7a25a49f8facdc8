pub mod api;
pub mod score;
