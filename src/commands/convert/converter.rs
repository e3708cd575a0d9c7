use std::io::{BufRead, Read, Write};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::csv_encode::encode_csv_record;
use super::header::{ColumnSchema, resolve_header};
use super::rows::{RowOutcome, normalize_row};
use super::text_rules::is_border_or_blank;
use super::tokenize::split_cells;
use crate::cli::ConvertLimits;
use crate::model::ConversionCounts;

#[derive(Debug)]
enum ConverterState {
    AwaitingHeader,
    Emitting(ColumnSchema),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConversionReport {
    pub columns: Vec<String>,
    pub counts: ConversionCounts,
}

/// Line-at-a-time table to CSV conversion. The column schema lives in the
/// converter, so every run starts from `AwaitingHeader`.
pub(crate) struct TableConverter<W: Write> {
    writer: W,
    limits: ConvertLimits,
    state: ConverterState,
    counts: ConversionCounts,
}

impl<W: Write> TableConverter<W> {
    pub(crate) fn new(writer: W, limits: ConvertLimits) -> Self {
        Self {
            writer,
            limits,
            state: ConverterState::AwaitingHeader,
            counts: ConversionCounts::default(),
        }
    }

    /// Consumes one line without its terminator.
    pub(crate) fn push_line(&mut self, line: &str) -> Result<()> {
        self.push_measured_line(line.len(), line)
    }

    /// `raw_len` is the line's size in the source, before any decoding.
    fn push_measured_line(&mut self, raw_len: usize, line: &str) -> Result<()> {
        self.counts.lines_read += 1;
        let line_number = self.counts.lines_read;

        if raw_len > self.limits.max_line_length {
            bail!(
                "line {} has more than the limit of {} bytes",
                line_number,
                self.limits.max_line_length
            );
        }

        if is_border_or_blank(line) {
            self.counts.lines_skipped += 1;
            return Ok(());
        }

        let cells = split_cells(line);

        match &self.state {
            ConverterState::AwaitingHeader => {
                let resolved = resolve_header(&cells, self.limits.max_columns)
                    .with_context(|| format!("failed to resolve header on line {line_number}"))?;

                let Some(schema) = resolved else {
                    self.counts.header_candidates_rejected += 1;
                    debug!(line = line_number, "no column names found, still awaiting header");
                    return Ok(());
                };

                write_record(&mut self.writer, schema.names())?;
                self.counts.column_count = schema.width();
                debug!(line = line_number, columns = ?schema.names(), "resolved header");
                self.state = ConverterState::Emitting(schema);
            }
            ConverterState::Emitting(schema) => match normalize_row(&cells, schema) {
                RowOutcome::Accepted(row) => {
                    write_record(&mut self.writer, &row.fields)?;
                    self.counts.rows_written += 1;
                    if row.padded_fields > 0 {
                        self.counts.rows_padded += 1;
                    }
                    if row.excess_fields > 0 {
                        self.counts.excess_fields_dropped += row.excess_fields;
                        debug!(
                            line = line_number,
                            excess_fields = row.excess_fields,
                            "dropped cells beyond header width"
                        );
                    }
                }
                RowOutcome::Dropped => {
                    self.counts.rows_dropped += 1;
                    debug!(line = line_number, "dropped row without content");
                }
            },
        }

        Ok(())
    }

    pub(crate) fn lines_read(&self) -> usize {
        self.counts.lines_read
    }

    /// Flushes the writer and hands it back with the run totals.
    pub(crate) fn finish(mut self) -> Result<(W, ConversionReport)> {
        self.writer.flush().context("failed to flush CSV output")?;

        let columns = match self.state {
            ConverterState::AwaitingHeader => Vec::new(),
            ConverterState::Emitting(schema) => schema.into_names(),
        };

        Ok((
            self.writer,
            ConversionReport {
                columns,
                counts: self.counts,
            },
        ))
    }
}

fn write_record<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> Result<()> {
    writer
        .write_all(encode_csv_record(fields).as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .context("failed to write CSV record")
}

/// Feeds every line of `reader` through a fresh converter. `\n` and `\r\n`
/// terminators are both accepted and invalid UTF-8 is replaced, not rejected.
/// At most `max_line_length` bytes plus a terminator are buffered per line.
pub(crate) fn convert_stream<R: BufRead, W: Write>(
    mut reader: R,
    writer: W,
    limits: ConvertLimits,
) -> Result<(W, ConversionReport)> {
    let mut converter = TableConverter::new(writer, limits);
    let mut buf = Vec::<u8>::new();
    let read_cap = (limits.max_line_length as u64).saturating_add(2);

    loop {
        buf.clear();
        let read = reader
            .by_ref()
            .take(read_cap)
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read line {}", converter.lines_read() + 1))?;
        if read == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        converter.push_measured_line(buf.len(), &String::from_utf8_lossy(&buf))?;
    }

    converter.finish()
}
