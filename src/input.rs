use std::io::{BufRead, Write};

use crate::error::Result;

pub const URL_PROMPT: &str = "Enter the workbook URL: ";

/// Ask for the workbook URL and read one line. EOF yields an empty string.
pub fn prompt_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", URL_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_string())
}
