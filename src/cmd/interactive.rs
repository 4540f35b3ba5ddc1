use crate::reports;
use clap::Args;
use std::io::{self, BufRead, Write};
use vigenere::analysis::Cryptanalyst;
use vigenere::cipher::{self, Direction};
use vigenere::config::AnalysisConfig;
use vigenere::profile::Language;
use vigenere::{VgResult, VigenereError};

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run(config: AnalysisConfig) -> VgResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(stdin.lock(), stdout.lock(), &config)
}

/// Reads one line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> VgResult<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// The numbered menu loop. Bad choices and empty keys are reported and the loop continues;
/// only I/O failures end it with an error.
pub fn run_menu<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    config: &AnalysisConfig,
) -> VgResult<()> {
    loop {
        writeln!(out, "\n=== Vigenere Cipher Tool ===")?;
        writeln!(out, "1. Encrypt text")?;
        writeln!(out, "2. Decrypt text")?;
        writeln!(out, "3. Break cipher")?;
        writeln!(out, "4. Exit")?;

        let Some(choice) = prompt(&mut input, &mut out, "Enter your choice: ")? else {
            return Ok(());
        };

        match choice.trim() {
            c @ ("1" | "2") => {
                let direction = if c == "1" {
                    Direction::Encrypt
                } else {
                    Direction::Decrypt
                };
                let Some(text) = prompt(&mut input, &mut out, &format!("Text to {}: ", direction))?
                else {
                    return Ok(());
                };
                let Some(key) = prompt(&mut input, &mut out, "Key: ")? else {
                    return Ok(());
                };
                match cipher::transform(&text, &key, direction) {
                    Ok(result) => writeln!(out, "\nResult: {}", result)?,
                    Err(VigenereError::EmptyKey) => {
                        writeln!(out, "Error: {}", VigenereError::EmptyKey)?
                    }
                    Err(e) => return Err(e),
                }
            }
            "3" => {
                let Some(text) = prompt(&mut input, &mut out, "Ciphertext to break: ")? else {
                    return Ok(());
                };
                let Some(lang) = prompt(
                    &mut input,
                    &mut out,
                    "Select language (1-Portuguese, 2-English): ",
                )?
                else {
                    return Ok(());
                };
                let language = match Language::from_selection(&lang) {
                    Ok(l) => l,
                    Err(_) => {
                        writeln!(out, "Invalid language choice!")?;
                        continue;
                    }
                };
                let analyst = Cryptanalyst::new(language.profile(), config.clone())?;
                match analyst.run(&text) {
                    Ok(report) => reports::write_attack_report(&mut out, &report, config)?,
                    Err(e @ VigenereError::TextTooLong { .. }) => writeln!(out, "Error: {}", e)?,
                    Err(e) => return Err(e),
                }
            }
            "4" => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice!")?,
        }
    }
}
