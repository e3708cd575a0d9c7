use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "table2csv",
    version,
    about = "Convert pipe-delimited text tables into CSV"
)]
pub struct Cli {
    /// Table-formatted text file to read.
    pub input_path: PathBuf,

    /// CSV file to create (overwritten if present).
    pub output_path: PathBuf,

    /// Longest accepted input line in bytes, excluding the line terminator.
    #[arg(long, default_value_t = 65_536)]
    pub max_line_length: usize,

    /// Widest accepted header, in columns.
    #[arg(long, default_value_t = 1_024)]
    pub max_columns: usize,

    /// Write a JSON run manifest to this path.
    #[arg(long)]
    pub summary_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub limits: ConvertLimits,
    pub summary_path: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ConvertLimits {
    pub max_line_length: usize,
    pub max_columns: usize,
}

impl Default for ConvertLimits {
    fn default() -> Self {
        Self {
            max_line_length: 65_536,
            max_columns: 1_024,
        }
    }
}

impl From<Cli> for ConvertArgs {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input_path,
            output_path: cli.output_path,
            limits: ConvertLimits {
                max_line_length: cli.max_line_length,
                max_columns: cli.max_columns,
            },
            summary_path: cli.summary_path,
        }
    }
}
