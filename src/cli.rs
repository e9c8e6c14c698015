//! Defines the command-line interface for the application.

use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "urls2md",
    version,
    about = "Convert a list of URL/description lines into Markdown bullet links."
)]
pub struct Cli {
    /// The text file listing one `URL "description"` pair per line.
    #[arg(value_name = "FILE_PATH")]
    pub file: Option<OsString>,

    /// Any further arguments are accepted and ignored.
    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "IGNORED"
    )]
    pub rest: Vec<OsString>,
}
