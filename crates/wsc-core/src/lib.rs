pub mod config;
pub mod logging;

pub mod generate;
pub mod license;
pub mod project;
pub mod table;
pub mod template;
pub mod url_label;
