pub mod item;
pub mod schema;
