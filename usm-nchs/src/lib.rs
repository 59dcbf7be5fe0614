pub mod category;
pub mod dataset;
pub mod metric;
pub mod record;
