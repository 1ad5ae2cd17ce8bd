#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailsift_lib::{EmailError, ErrorKind, ValidationResult, ValidationState};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct OutputRow {
    pub address: String,
    pub valid: bool,
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub result: Option<ValidationResult>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error_kind: Option<ErrorKind>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl OutputRow {
    pub fn new(address: &str, outcome: Result<ValidationResult, EmailError>) -> Self {
        match outcome {
            Ok(result) => Self {
                address: address.to_string(),
                valid: true,
                result: Some(result),
                error_kind: None,
                error: None,
            },
            Err(err) => Self {
                address: address.to_string(),
                valid: false,
                result: None,
                error_kind: Some(err.kind()),
                error: Some(err.to_string()),
            },
        }
    }
}

pub fn any_invalid(rows: &[OutputRow]) -> bool {
    rows.iter().any(|row| !row.valid)
}

pub fn write_reports(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

fn state_str(state: ValidationState) -> &'static str {
    match state {
        ValidationState::NotChecked => "-",
        ValidationState::True => "true",
        ValidationState::False => "false",
    }
}

fn write_human(rows: &[OutputRow]) -> Result<()> {
    for row in rows {
        match (&row.result, &row.error) {
            (Some(res), _) => println!(
                "[OK]    {}  free={} disposable={} blacklist={} mx={}",
                row.address,
                state_str(res.free_provider),
                state_str(res.disposable),
                state_str(res.blacklist),
                state_str(res.mail_exchange),
            ),
            (None, error) => println!(
                "[INVALID] {} :: {}",
                row.address,
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv_rows(&mut wtr, rows)?;
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        write_csv_rows(&mut wtr, rows)?;
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn write_csv_rows<W: std::io::Write>(wtr: &mut csv::Writer<W>, rows: &[OutputRow]) -> Result<()> {
    wtr.write_record([
        "address",
        "valid",
        "free_provider",
        "disposable",
        "black_list",
        "mx_validation",
        "error_kind",
        "error",
    ])?;
    for row in rows {
        let states = row
            .result
            .map(|res| [res.free_provider, res.disposable, res.blacklist, res.mail_exchange])
            .map(|states| states.map(|s| state_str(s).trim_start_matches('-')));
        let [free, disposable, blacklist, mx] = states.unwrap_or([""; 4]);
        wtr.write_record([
            row.address.as_str(),
            if row.valid { "true" } else { "false" },
            free,
            disposable,
            blacklist,
            mx,
            row.error_kind.map(ErrorKind::as_str).unwrap_or(""),
            row.error.as_deref().unwrap_or(""),
        ])?;
    }
    Ok(())
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
