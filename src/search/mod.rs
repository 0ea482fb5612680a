pub mod coordinate;
pub mod error;
pub mod filters;
pub mod flow;
pub mod location;
pub mod query;
pub mod record;
pub mod screen;
pub mod selection;
