pub mod boundaries;
