pub mod cache;
pub mod model;
pub mod parser;
pub mod parts;
pub mod routes;
pub mod source;
