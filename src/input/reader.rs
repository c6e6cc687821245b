//! Line-oriented address input.
//!
//! One address per line; lines that do not parse are skipped.

use crate::models::{parse_ipv4, AddressError};
use colored::Colorize;
use std::io::{self, BufRead};
use std::net::Ipv4Addr;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: AddressError,
    },
    #[error("error reading input: {0}")]
    Io(#[from] io::Error),
}

/// Lazy sequence of per-line parse results.
///
/// Lines end at `\n`, a trailing `\r` is dropped. Bytes that are not UTF-8
/// make the line invalid, not the stream. The first I/O error ends the
/// sequence.
pub struct AddressLines<R> {
    lines: io::Split<R>,
    line: usize,
    done: bool,
}

impl<R: BufRead> AddressLines<R> {
    pub fn new(reader: R) -> Self {
        AddressLines {
            lines: reader.split(b'\n'),
            line: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for AddressLines<R> {
    type Item = Result<Ipv4Addr, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bytes = match self.lines.next()? {
            Ok(bytes) => bytes,
            Err(e) => {
                self.done = true;
                return Some(Err(ReadError::Io(e)));
            }
        };
        self.line += 1;
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes);
        let text = String::from_utf8_lossy(bytes);
        Some(parse_ipv4(&text).map_err(|source| ReadError::Parse {
            line: self.line,
            source,
        }))
    }
}

/// Collect the valid addresses of `reader`, in input order.
///
/// Invalid lines are skipped, and logged when `report_invalid` is set.
/// An I/O error stops reading.
pub fn read_addresses<R: BufRead>(
    reader: R,
    report_invalid: bool,
) -> Result<Vec<Ipv4Addr>, io::Error> {
    let mut ips = Vec::new();
    for result in AddressLines::new(reader) {
        match result {
            Ok(ip) => ips.push(ip),
            Err(ReadError::Parse { line, source }) => {
                if report_invalid {
                    let text = match &source {
                        AddressError::Invalid { input } => input.as_str(),
                        _ => "",
                    };
                    log::warn!("Invalid IP: {} (line {line})", text.yellow());
                }
            }
            Err(ReadError::Io(e)) => {
                log::debug!("read failed after {} addresses: {e}", ips.len());
                return Err(e);
            }
        }
    }
    log::debug!("read {} addresses", ips.len());
    Ok(ips)
}
