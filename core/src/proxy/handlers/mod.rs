pub mod apod;
pub mod demo;
pub mod translate;
