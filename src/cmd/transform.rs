use super::InputArgs;
use clap::Args;
use vigenere::cipher::{self, Direction};
use vigenere::VgResult;

#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    #[arg(short, long)]
    pub key: String,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: &TransformArgs, direction: Direction) -> VgResult<()> {
    let text = args.input.read()?;
    let output = cipher::transform(&text, &args.key, direction)?;
    println!("{}", output);
    Ok(())
}
