pub mod authoring;
pub mod quality;
