pub mod cli_options;
pub mod menu;
pub mod render;

mod tests;
