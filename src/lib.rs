pub mod app;
pub mod config;
pub mod truncate;
pub mod utils;

pub use truncate::{
    parse_limit, parse_separator, truncate, truncate_with, try_truncate, InvalidArgument,
    TruncateError, TruncateOptions, Truncator,
};
