pub mod changeset;
pub mod player;
pub mod result;
pub mod schema;
pub mod value;
