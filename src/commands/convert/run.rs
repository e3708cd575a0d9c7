use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::converter::convert_stream;
use crate::cli::ConvertArgs;
use crate::model::ConversionManifest;
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

const MANIFEST_VERSION: u32 = 1;

pub fn run(args: ConvertArgs) -> Result<()> {
    info!(
        input = %args.input_path.display(),
        output = %args.output_path.display(),
        "starting conversion"
    );

    let input = File::open(&args.input_path).with_context(|| {
        format!(
            "failed to open input file: {}",
            args.input_path.display()
        )
    })?;
    let output = File::create(&args.output_path).with_context(|| {
        format!(
            "failed to create output file: {}",
            args.output_path.display()
        )
    })?;

    let (_, report) = convert_stream(BufReader::new(input), BufWriter::new(output), args.limits)
        .with_context(|| {
            format!(
                "failed to convert {} into {}",
                args.input_path.display(),
                args.output_path.display()
            )
        })?;
    let counts = &report.counts;

    if counts.column_count == 0 {
        warn!(
            input = %args.input_path.display(),
            lines_read = counts.lines_read,
            "no header line found, output is empty"
        );
    }
    if counts.excess_fields_dropped > 0 {
        warn!(
            excess_fields = counts.excess_fields_dropped,
            columns = counts.column_count,
            "dropped cells beyond header width"
        );
    }

    info!(
        lines_read = counts.lines_read,
        lines_skipped = counts.lines_skipped,
        header_candidates_rejected = counts.header_candidates_rejected,
        rows_written = counts.rows_written,
        rows_dropped = counts.rows_dropped,
        rows_padded = counts.rows_padded,
        columns = counts.column_count,
        "conversion completed"
    );

    println!(
        "conversion complete: {} lines written to {}",
        counts.output_lines(),
        args.output_path.display()
    );
    println!("column count: {}", counts.column_count);

    if let Some(summary_path) = &args.summary_path {
        let manifest = ConversionManifest {
            manifest_version: MANIFEST_VERSION,
            generated_at: now_utc_string(),
            input_path: args.input_path.display().to_string(),
            input_sha256: sha256_file(&args.input_path)?,
            output_path: args.output_path.display().to_string(),
            columns: report.columns.clone(),
            counts: report.counts.clone(),
        };

        write_json_pretty(summary_path, &manifest)?;
        info!(path = %summary_path.display(), "wrote run manifest");
    }

    Ok(())
}
