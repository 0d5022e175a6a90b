mod args;
mod parsers;
mod value_enum;

pub use args::Args;
pub use parsers::MoneyArg;
pub use value_enum::CliOutputFormat;
