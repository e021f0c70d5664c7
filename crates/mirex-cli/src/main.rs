mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mirex",
    version,
    about = "Convert Word quiz documents into Mirapolis Excel import files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single docx quiz into an xlsx import file
    Convert {
        /// Path to the docx file
        input_file: PathBuf,

        /// Output path (default: the input path with an .xlsx extension)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Convert every docx quiz in a directory, one xlsx per document
    Batch {
        /// Directory containing docx files
        input_dir: PathBuf,
    },
    /// Show the extracted answer key and rows without writing an xlsx
    Inspect {
        /// Path to the docx file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { input_file, out } => commands::convert::run(input_file, out),
        Commands::Batch { input_dir } => commands::batch::run(input_dir),
        Commands::Inspect { input_file, output } => commands::inspect::run(input_file, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
