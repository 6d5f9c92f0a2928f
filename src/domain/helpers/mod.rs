pub mod fake;
mod macros;
