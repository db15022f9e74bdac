use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bingo-card")]
#[command(author, version, about = "Generate bingo card images from word lists")]
pub struct Args {
    /// Input word-list file: first line is the center label
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PNG path (defaults to input with .png extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TTF font file (defaults to a probed system font)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Logo image file
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Get the output path, defaulting to input with .png extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("png"))
    }
}
