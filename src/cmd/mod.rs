pub mod crack;
pub mod interactive;
pub mod transform;

use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use vigenere::VgResult;

/// Where the message text comes from: the positional argument, `--file`, or stdin.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to process. Read from stdin when neither this nor --file is given.
    pub text: Option<String>,

    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> VgResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return Ok(fs::read_to_string(path)?);
        }
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
