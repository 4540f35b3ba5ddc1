use super::InputArgs;
use crate::reports;
use clap::Args;
use std::path::PathBuf;
use vigenere::analysis::Cryptanalyst;
use vigenere::config::AnalysisConfig;
use vigenere::profile::{Language, ReferenceProfile};
use vigenere::VgResult;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Reference language: english, portuguese, or the menu numbers 1 / 2
    #[arg(short, long, default_value = "english", value_parser = Language::from_selection)]
    pub language: Language,

    /// Custom `letter<TAB>percent` table used instead of --language
    #[arg(long)]
    pub profile_file: Option<PathBuf>,

    /// Emit the full report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run(args: &CrackArgs, config: AnalysisConfig) -> VgResult<()> {
    let profile = match &args.profile_file {
        Some(path) => ReferenceProfile::load_from_tsv(path)?,
        None => args.language.profile(),
    };

    let text = args.input.read()?;
    let analyst = Cryptanalyst::new(profile, config)?;
    let report = analyst.run(&text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_attack_report(&report, analyst.config());
    }
    Ok(())
}
