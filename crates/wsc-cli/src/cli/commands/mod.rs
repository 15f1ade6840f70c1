//! CLI command handlers, one file per subcommand.

mod generate;
mod licenses;

pub use generate::run_generate;
#[cfg(test)]
pub(crate) use generate::resolve_paths;
pub use licenses::run_licenses;
