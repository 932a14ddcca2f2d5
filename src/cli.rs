//! Command-line argument parsing for the mask driver
//!
//! Supports:
//! - Masks given inline or by preset name from the config file
//! - An initial unmasked value
//! - A key script mixing typed characters and edit keys
//! - Plain or JSON output

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use serde::Serialize;

use inputmask::config::{ConfigError, MaskConfig};
use inputmask::field::{EditIntent, MaskedInput, MoveTarget, TextField};

/// Apply keystrokes to an input mask and print the result
#[derive(Parser, Debug)]
#[command(name = "inputmask", version, about = "Drive an input mask from the command line")]
#[command(group(ArgGroup::new("source").required(true).args(["mask", "preset"])))]
pub struct CliArgs {
    /// Mask pattern, e.g. "+1 (000) 000-0000"
    #[arg(short, long)]
    pub mask: Option<String>,

    /// Named mask from the config file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Glyph for unfilled slots (overrides the config file)
    #[arg(long, value_name = "CHAR")]
    pub placeholder: Option<char>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Unmasked value to start from
    #[arg(long)]
    pub value: Option<String>,

    /// Keys to type. `{bs}`, `{del}`, `{left}`, `{right}`, `{home}`, `{end}`,
    /// `{first}` and `{clear}` are edit keys; `{{` types a brace
    #[arg(short, long, default_value = "")]
    pub keys: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write debug logs under the config directory
    #[arg(long)]
    pub log_file: bool,
}

impl CliArgs {
    /// The pattern to use: `--mask` wins over `--preset`
    pub fn resolve_mask(&self, config: &MaskConfig) -> Result<String, ConfigError> {
        match (&self.mask, &self.preset) {
            (Some(mask), _) => Ok(mask.clone()),
            (None, Some(name)) => config.preset(name).map(str::to_string),
            (None, None) => Err(ConfigError::UnknownPreset(String::new())),
        }
    }
}

// =============================================================================
// Key scripts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyScriptError {
    UnknownKey(String),
    /// `{` at this char offset has no closing brace
    Unterminated(usize),
}

impl std::fmt::Display for KeyScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyScriptError::UnknownKey(k) => write!(f, "Unknown key: {{{}}}", k),
            KeyScriptError::Unterminated(pos) => write!(f, "Unterminated key at offset {}", pos),
        }
    }
}

impl std::error::Error for KeyScriptError {}

/// Parse a key script like `555{bs}1234{home}` into edit intents
pub fn parse_key_script(script: &str) -> Result<Vec<EditIntent>, KeyScriptError> {
    let mut intents = Vec::new();
    let mut chars = script.chars().enumerate().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '{' {
            intents.push(EditIntent::InsertChar(ch));
            continue;
        }

        if chars.next_if(|&(_, next)| next == '{').is_some() {
            intents.push(EditIntent::InsertChar('{'));
            continue;
        }

        let mut name = String::new();
        loop {
            match chars.next() {
                Some((_, '}')) => break,
                Some((_, c)) => name.push(c),
                None => return Err(KeyScriptError::Unterminated(pos)),
            }
        }
        intents.push(key_intent(&name)?);
    }

    Ok(intents)
}

fn key_intent(name: &str) -> Result<EditIntent, KeyScriptError> {
    let intent = match name.to_ascii_lowercase().as_str() {
        "bs" | "backspace" => EditIntent::DeleteBackward,
        "del" | "delete" => EditIntent::DeleteForward,
        "left" => EditIntent::Move(MoveTarget::Left),
        "right" => EditIntent::Move(MoveTarget::Right),
        "home" => EditIntent::Move(MoveTarget::Home),
        "end" => EditIntent::Move(MoveTarget::End),
        "first" => EditIntent::Move(MoveTarget::FirstEditable),
        "clear" => EditIntent::Clear,
        _ => return Err(KeyScriptError::UnknownKey(name.to_string())),
    };
    Ok(intent)
}

// =============================================================================
// Output
// =============================================================================

/// Final state of the masked field
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mask: String,
    pub text: String,
    pub value: String,
    pub caret: usize,
    pub valid: bool,
    pub complete: bool,
}

impl Report {
    pub fn from_input<F: TextField>(input: &MaskedInput<F>) -> Self {
        Self {
            mask: input.pattern().to_string(),
            text: input.text(),
            value: input.value(),
            caret: input.caret(),
            valid: input.is_valid(),
            complete: input.is_complete(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "text:     {}", self.text)?;
        writeln!(f, "value:    {:?}", self.value)?;
        writeln!(f, "caret:    {}", self.caret)?;
        writeln!(f, "valid:    {}", self.valid)?;
        writeln!(f, "complete: {}", self.complete)
    }
}
