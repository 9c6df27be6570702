pub mod builder;
pub mod console;
pub mod html;
pub mod json;
pub mod section_model;
pub mod sink;
