use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::engine::{CipherEngine, Report};
use crate::errors::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Encrypt,
    Decrypt,
    BruteForce,
    StatisticalAnalysis,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::Encrypt),
            2 => Some(MenuChoice::Decrypt),
            3 => Some(MenuChoice::BruteForce),
            4 => Some(MenuChoice::StatisticalAnalysis),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
Choose an operation:
1. Encrypt
2. Decrypt with key
3. Brute force
4. Statistical analysis
0. Exit";

/// Run the numbered menu until the user picks `0` or input ends.
///
/// Operation errors are printed and the menu is shown again; only failures
/// of the terminal streams themselves are returned.
pub fn run_menu<R, W>(engine: &CipherEngine, mut input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(line) = prompt(&mut input, &mut out, "> ")? else {
            break;
        };

        let choice = match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => {
                writeln!(out, "Bye.")?;
                break;
            }
            Some(choice) => choice,
            None => {
                writeln!(out, "Invalid choice '{}'. Please choose 0 to 4.", line.trim())?;
                continue;
            }
        };

        match run_choice(engine, choice, &mut input, &mut out)? {
            Some(Ok(report)) => writeln!(out, "{}", report)?,
            Some(Err(e)) => writeln!(out, "Error: {}", e)?,
            None => break,
        }
    }
    out.flush()
}

/// Collect the parameters for `choice` and run it. `None` means input ended
/// part-way through the prompts.
fn run_choice<R: BufRead, W: Write>(
    engine: &CipherEngine,
    choice: MenuChoice,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<Result<Report, CipherError>>> {
    let Some(source) = prompt(input, out, "Input file: ")? else {
        return Ok(None);
    };
    let Some(target) = prompt(input, out, "Output file: ")? else {
        return Ok(None);
    };
    let (source, target) = (PathBuf::from(source), PathBuf::from(target));

    let result = match choice {
        MenuChoice::Encrypt | MenuChoice::Decrypt => {
            let Some(raw_key) = prompt(input, out, "Key (integer): ")? else {
                return Ok(None);
            };
            let key = match raw_key.trim().parse::<i64>() {
                Ok(key) => key,
                Err(_) if !source.exists() => {
                    return Ok(Some(Err(CipherError::InputNotFound(source))))
                }
                Err(_) => return Ok(Some(Err(CipherError::MalformedKey(raw_key)))),
            };
            if choice == MenuChoice::Encrypt {
                engine.encrypt_file(&source, &target, key)
            } else {
                engine.decrypt_file(&source, &target, key)
            }
        }
        MenuChoice::BruteForce => {
            let Some(sample) = prompt(input, out, "Sample file (optional, Enter to skip): ")?
            else {
                return Ok(None);
            };
            let sample = (!sample.trim().is_empty()).then(|| PathBuf::from(sample));
            engine.brute_force_file(&source, &target, sample.as_deref())
        }
        MenuChoice::StatisticalAnalysis => {
            let Some(sample) = prompt(input, out, "Sample file: ")? else {
                return Ok(None);
            };
            let sample = (!sample.trim().is_empty()).then(|| PathBuf::from(sample));
            engine.statistical_analysis_file(&source, &target, sample.as_deref())
        }
        MenuChoice::Exit => return Ok(None),
    };
    Ok(Some(result))
}

/// Print `label` and read one line without its line ending. `None` on end of
/// input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
