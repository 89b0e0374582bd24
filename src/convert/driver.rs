//! Line-at-a-time conversion state machine

use crate::config::ConvertConfig;
use crate::error::{Error, Result};
use crate::render::{render_create_table, render_insert_header, render_value_tuple};
use crate::schema::{build_type_mapping, TypeMapping};
use crate::types::JsonObject;
use std::io::{BufRead, Write};
use tracing::debug;

/// Summary of a finished conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Number of records rendered as value tuples
    pub records: usize,
}

/// Where the converter is in the input stream
enum LoopState {
    /// Nothing read yet; the next record fixes the schema
    AwaitingFirstLine,
    /// Header written; records are rendered with the first record's mapping
    Streaming(TypeMapping),
    /// End of input reached
    Done,
}

/// Converts newline-delimited JSON objects into one INSERT statement
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter for the given config
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// The config this converter was built with
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Read every line of `input` and write SQL to `output`.
    ///
    /// Stops at the first decode or type error; anything already written
    /// stays written. Record-level errors carry the 1-based input line.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<ConvertStats> {
        let mut reader = LineReader::new(&mut input);
        let mut stats = ConvertStats::default();
        let mut state = LoopState::AwaitingFirstLine;

        loop {
            state = match state {
                LoopState::AwaitingFirstLine => match reader.next_record()? {
                    None => LoopState::Done,
                    Some(record) => {
                        let mapping = build_type_mapping(&record);
                        debug!(
                            columns = mapping.len(),
                            mapping = %serde_json::to_string(&mapping).unwrap_or_default(),
                            "Inferred type mapping from first record"
                        );

                        let table = &self.config.table;
                        if self.config.create {
                            writeln!(output, "{}", render_create_table(table, &mapping))?;
                        }
                        writeln!(output, "{}", render_insert_header(table, &record))?;

                        emit_tuple(&mut reader, &mut output, &record, &mapping)?;
                        stats.records += 1;
                        LoopState::Streaming(mapping)
                    }
                },
                LoopState::Streaming(mapping) => match reader.next_record()? {
                    None => LoopState::Done,
                    Some(record) => {
                        if self.config.strict {
                            check_field_set(reader.line_number(), &record, &mapping)?;
                        }
                        emit_tuple(&mut reader, &mut output, &record, &mapping)?;
                        stats.records += 1;
                        LoopState::Streaming(mapping)
                    }
                },
                LoopState::Done => break,
            };
        }

        writeln!(output, ";")?;
        output.flush()?;

        debug!(records = stats.records, "Conversion finished");
        Ok(stats)
    }
}

/// Convert `input` to SQL on `output` using `config`
pub fn convert<R: BufRead, W: Write>(
    config: &ConvertConfig,
    input: R,
    output: W,
) -> Result<ConvertStats> {
    Converter::new(config.clone()).run(input, output)
}

/// Write one tuple, followed by `,` if more input follows
fn emit_tuple<R: BufRead, W: Write>(
    reader: &mut LineReader<'_, R>,
    output: &mut W,
    record: &JsonObject,
    mapping: &TypeMapping,
) -> Result<()> {
    let tuple = render_value_tuple(record, mapping)
        .map_err(|e| Error::at_line(reader.line_number(), e))?;
    write!(output, "{tuple}")?;

    if reader.has_more()? {
        writeln!(output, ",")?;
    } else {
        writeln!(output)?;
    }

    debug!(line = reader.line_number(), "Rendered record");
    Ok(())
}

/// Reject a record whose fields differ from the mapping's columns
fn check_field_set(line: usize, record: &JsonObject, mapping: &TypeMapping) -> Result<()> {
    let unexpected = mapping.unknown_fields(record);
    let missing = mapping.missing_fields(record);

    if unexpected.is_empty() && missing.is_empty() {
        return Ok(());
    }

    let mut problems = Vec::new();
    if !unexpected.is_empty() {
        problems.push(format!("unexpected fields [{}]", unexpected.join(", ")));
    }
    if !missing.is_empty() {
        problems.push(format!("missing fields [{}]", missing.join(", ")));
    }
    Err(Error::schema_mismatch(line, problems.join(", ")))
}

/// Reads one JSON object per line, with one byte of look-ahead.
///
/// Lines are read as raw bytes; invalid UTF-8 is replaced with U+FFFD
/// before decoding so a stray byte in a string value does not abort the run.
struct LineReader<'a, R> {
    input: &'a mut R,
    buf: Vec<u8>,
    line: usize,
}

impl<'a, R: BufRead> LineReader<'a, R> {
    fn new(input: &'a mut R) -> Self {
        Self {
            input,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// 1-based number of the last line read
    fn line_number(&self) -> usize {
        self.line
    }

    /// Decode the next line, `None` at end of input
    fn next_record(&mut self) -> Result<Option<JsonObject>> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let text = String::from_utf8_lossy(&self.buf);
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| Error::decode(self.line, e.to_string()))
    }

    /// Whether any input remains after the current line
    fn has_more(&mut self) -> Result<bool> {
        Ok(!self.input.fill_buf()?.is_empty())
    }
}
