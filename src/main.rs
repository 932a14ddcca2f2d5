use anyhow::{bail, Context, Result};
use clap::Parser;

use inputmask::config::MaskConfig;
use inputmask::field::{MaskedInput, StringField};
use inputmask::mask::ESCAPE_CHAR;

mod cli;

use cli::{parse_key_script, CliArgs, Report};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    inputmask::tracing::init(args.log_file);

    let config = match &args.config {
        Some(path) => MaskConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => MaskConfig::load(),
    };

    let pattern = args.resolve_mask(&config)?;
    let placeholder = args.placeholder.unwrap_or(config.placeholder);
    if placeholder == ESCAPE_CHAR {
        bail!("{:?} cannot be used as a placeholder", ESCAPE_CHAR);
    }

    let intents = parse_key_script(&args.keys).context("Invalid --keys script")?;

    let mut input = MaskedInput::with_rules(
        StringField::new(),
        &pattern,
        config.rule_table(),
        placeholder,
    );
    if let Some(value) = &args.value {
        input.set_value(value);
    }

    let total = intents.len();
    let changed = intents
        .into_iter()
        .map(|intent| input.apply(intent))
        .filter(|&changed| changed)
        .count();
    tracing::debug!(total, changed, "key script applied");

    let report = Report::from_input(&input);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
