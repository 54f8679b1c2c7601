use crate::config::{Action, Config};
use anyhow::Context;
use chrono::{DateTime, SecondsFormat};
use serde::Serialize;
use std::io::Write;
use suid::{
    Alphabet, ParseOptions, ParsedSuid, RandSource, SuidGenerator, SuidOptions, TimeSource,
    Timestamp, parse_suid,
};

/// Executes the configured action, writing results to `out`.
pub fn run<T, R, W>(
    config: &Config,
    generator: &SuidGenerator<T, R>,
    out: &mut W,
) -> anyhow::Result<()>
where
    T: TimeSource,
    R: RandSource,
    W: Write,
{
    match &config.action {
        Action::Generate {
            count,
            timestamp,
            random_bytes,
        } => {
            for _ in 0..*count {
                let mut options = SuidOptions::new()
                    .with_random_source(*random_bytes)
                    .with_alphabet(config.alphabet)
                    .with_separator(config.separator);
                if let Some(millis) = timestamp {
                    options = options.with_timestamp(*millis);
                }
                let suid = generator
                    .generate(options)
                    .context("failed to generate SUID")?;
                writeln!(out, "{suid}")?;
            }
        }
        Action::Parse { suids, json } => {
            let options = ParseOptions::new()
                .with_alphabet(config.alphabet)
                .with_separator(config.separator);
            for suid in suids {
                let parsed = parse_suid(suid, options)
                    .with_context(|| format!("failed to parse {suid:?}"))?;
                tracing::debug!(suid = %suid, timestamp = %parsed.timestamp, "parsed");
                let record = ParsedRecord::new(suid, &parsed);
                if *json {
                    serde_json::to_writer(&mut *out, &record)?;
                    writeln!(out)?;
                } else {
                    record.write_text(out)?;
                }
            }
        }
    }
    Ok(())
}

/// Output shape of `suid parse`.
#[derive(Debug, Serialize)]
struct ParsedRecord<'a> {
    suid: &'a str,
    timestamp: Timestamp,
    date: Option<String>,
    random_bits: String,
    alphabet: Alphabet,
    separator: char,
}

impl<'a> ParsedRecord<'a> {
    fn new(suid: &'a str, parsed: &ParsedSuid) -> Self {
        Self {
            suid,
            timestamp: parsed.timestamp,
            date: rfc3339(parsed.timestamp),
            random_bits: hex::encode(&parsed.random_bits),
            alphabet: parsed.alphabet,
            separator: parsed.separator,
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.suid)?;
        match &self.date {
            Some(date) => writeln!(out, "  timestamp    {} ({date})", self.timestamp)?,
            None => writeln!(out, "  timestamp    {}", self.timestamp)?,
        }
        writeln!(
            out,
            "  random_bits  {} ({} bytes)",
            self.random_bits,
            self.random_bits.len() / 2
        )?;
        writeln!(out, "  alphabet     {}", self.alphabet)?;
        writeln!(out, "  separator    {}", self.separator)
    }
}

fn rfc3339(ts: Timestamp) -> Option<String> {
    let millis = i64::try_from(ts.as_millis()).ok()?;
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTime;

    impl TimeSource for FixedTime {
        fn current_millis(&self) -> u64 {
            1_734_076_800_000
        }
    }

    struct Zeroes;

    impl RandSource for Zeroes {
        fn fill(&self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    const GENERATOR: SuidGenerator<FixedTime, Zeroes> = SuidGenerator::new(FixedTime, Zeroes);

    fn run_to_string(config: &Config) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(config, &GENERATOR, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn generate(count: usize, timestamp: Option<i64>, random_bytes: usize) -> Config {
        Config {
            alphabet: Alphabet::Standard,
            separator: '.',
            action: Action::Generate {
                count,
                timestamp,
                random_bytes,
            },
        }
    }

    fn parse(suids: &[&str], json: bool) -> Config {
        Config {
            alphabet: Alphabet::Standard,
            separator: '.',
            action: Action::Parse {
                suids: suids.iter().map(|s| s.to_string()).collect(),
                json,
            },
        }
    }

    #[test]
    fn generates_count_lines() {
        let out = run_to_string(&generate(3, None, 12)).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, ["AZO/CBwA.AAAAAAAA.AAAAAAAA"; 3]);
    }

    #[test]
    fn generates_with_options() {
        let mut config = generate(1, Some(1), 4);
        config.alphabet = Alphabet::UrlSafe;
        config.separator = '~';
        assert_eq!(run_to_string(&config).unwrap(), "AAAAAAAB~AAA~AAA\n");
    }

    #[test]
    fn invalid_timestamp_is_an_error() {
        let err = run_to_string(&generate(1, Some(-1), 12)).unwrap_err();
        assert_eq!(err.to_string(), "failed to generate SUID");
        assert!(format!("{err:#}").contains("not a positive integer"));
    }

    #[test]
    fn parses_as_text() {
        let out = run_to_string(&parse(&["AZO/CBwA.7OVIxUqb.bwCQ9SsB"], false)).unwrap();
        assert_eq!(
            out,
            "AZO/CBwA.7OVIxUqb.bwCQ9SsB\n\
             \x20 timestamp    1734076800000 (2024-12-13T08:00:00.000Z)\n\
             \x20 random_bits  ece548c54a9b6f0090f52b01 (12 bytes)\n\
             \x20 alphabet     standard\n\
             \x20 separator    .\n"
        );
    }

    #[test]
    fn parses_as_json_lines() {
        let out = run_to_string(&parse(
            &["AZO/CBwA.7OVIxUqb.bwCQ9SsB", "AZO/CBwA.AA.AA"],
            true,
        ))
        .unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            serde_json::json!({
                "suid": "AZO/CBwA.7OVIxUqb.bwCQ9SsB",
                "timestamp": 1_734_076_800_000_u64,
                "date": "2024-12-13T08:00:00.000Z",
                "random_bits": "ece548c54a9b6f0090f52b01",
                "alphabet": "standard",
                "separator": ".",
            })
        );
        assert_eq!(lines[1]["random_bits"], "0000");
        assert_eq!(lines[1]["timestamp"], 1_734_076_800_000_u64);
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = run_to_string(&parse(&["AZO/CBwA.7OVIxUqb"], false)).unwrap_err();
        assert_eq!(err.to_string(), "failed to parse \"AZO/CBwA.7OVIxUqb\"");
    }
}
