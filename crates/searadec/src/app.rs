//! Per-line decoding loop

use std::io::BufRead;

use chrono::Utc;
use log::{error, info};
use searadar::{Mr231Converter, StationMessage};

use crate::cli::Args;

/// Counters for one decoding run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Non-empty input lines seen
    pub lines: usize,
    /// Typed messages decoded
    pub decoded: usize,
    /// Semantically rejected sentences
    pub invalid: usize,
    /// Lines that were not sentences at all
    pub failed: usize,
}

/// Run the decoding loop
///
/// Reads sentences from `input` one per line until it is exhausted.
/// Decoded messages are printed with a UTC receive-time prefix
/// unless `--quiet`. Structural failures are logged and skipped;
/// the stream keeps going. Returns the run counters.
pub fn run<R>(args: &Args, converter: &Mr231Converter, input: R) -> Stats
where
    R: BufRead,
{
    let mut stats = Stats::default();

    for (number, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("read failure on line {}: {}", number + 1, err);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.lines += 1;

        let messages = match converter.convert(line) {
            Ok(messages) => messages,
            Err(err) => {
                stats.failed += 1;
                error!("line {}: {}", number + 1, err);
                continue;
            }
        };

        for message in messages {
            match message {
                StationMessage::Invalid(_) => stats.invalid += 1,
                _ => stats.decoded += 1,
            }

            if !args.quiet {
                println!("{} {}", Utc::now().format("%Y-%m-%dT%H:%M:%SZ"), message);
            }
        }
    }

    info!(
        "{} sentences: {} decoded, {} invalid, {} failed",
        stats.lines, stats.decoded, stats.invalid, stats.failed
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn quiet_args() -> Args {
        Args {
            verbose: 0,
            quiet: true,
            file: "-".to_string(),
        }
    }

    #[test]
    fn test_run_counts() {
        let input = Cursor::new(
            "$RATTM,23,13.88,137.2,T,63.8,094.3,T,9.2,79.4,N,b,T,,783344,А*42\n\
             \n\
             $RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,95.0,N,N,S*33\n\
             RAR\n\
             $RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S*33\n",
        );

        let stats = run(&quiet_args(), &Mr231Converter::new(), input);

        assert_eq!(4, stats.lines);
        assert_eq!(2, stats.decoded);
        assert_eq!(1, stats.invalid);
        assert_eq!(1, stats.failed);
    }

    #[test]
    fn test_run_empty_input() {
        let stats = run(&quiet_args(), &Mr231Converter::new(), Cursor::new(""));
        assert_eq!(Stats::default(), stats);
    }
}
