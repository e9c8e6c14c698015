use crate::cli::Cli;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use urls2md::convert_file;
use urls2md::error::Urls2MdError;

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli { file, rest } = Cli::parse();

    if !rest.is_empty() {
        log::debug!("Ignoring {} extra argument(s)", rest.len());
    }

    let file = file
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .ok_or(Urls2MdError::MissingArgument)?;
    let markdown = convert_file(&file)?;

    write_output(markdown)
}

fn write_output(mut markdown: String) -> anyhow::Result<()> {
    markdown.push('\n');

    let mut stdout = io::stdout().lock();
    stdout.write_all(markdown.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
