pub mod score_retention;
