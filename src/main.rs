use clap::Parser;

use coco::cli::Cli;
use coco::commands::run_count;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_count(&cli));
}
