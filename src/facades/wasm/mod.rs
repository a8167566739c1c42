pub mod admin;
pub mod converters;
