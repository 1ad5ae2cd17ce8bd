use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mailsift_lib::{ClassificationTables, Options, load_domain_list};

#[derive(Parser)]
#[command(name = "mailsift-cli", version, about = "Classifie des adresses e-mail")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// vérifie que le domaine accepte du courrier (MX, puis A/AAAA)
    #[arg(long)]
    pub mx: bool,

    /// timeout de la vérification MX (ms)
    #[arg(long = "mx-timeout-ms", default_value_t = 2_000)]
    pub mx_timeout_ms: u64,

    /// vérifie le MX même pour les domaines jetables ou gratuits
    #[arg(long = "force-mx")]
    pub force_mx: bool,

    /// remplace la liste des domaines jetables
    #[arg(long = "disposable-list")]
    pub disposable_list: Option<PathBuf>,

    /// remplace la liste des suffixes jetables (wildcard)
    #[arg(long = "wildcard-list")]
    pub wildcard_list: Option<PathBuf>,

    /// remplace la liste des fournisseurs gratuits
    #[arg(long = "free-list")]
    pub free_list: Option<PathBuf>,

    /// remplace la liste des TLD
    #[arg(long = "tld-list")]
    pub tld_list: Option<PathBuf>,

    /// remplace la blacklist des parties locales
    #[arg(long = "blacklist")]
    pub blacklist: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        email: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn options(&self) -> Result<Options> {
        if !self.mx {
            return Ok(Options::default());
        }
        Options::with_mx_check(Duration::from_millis(self.mx_timeout_ms), self.force_mx)
            .context("--mx-timeout-ms")
    }

    /// Built-in tables, with each `--*-list` file replacing its table.
    pub fn tables(&self) -> Result<ClassificationTables> {
        let mut tables = ClassificationTables::builtin();
        let overrides = [
            (&self.disposable_list, &mut tables.disposable),
            (&self.wildcard_list, &mut tables.disposable_wildcard),
            (&self.free_list, &mut tables.free_provider),
            (&self.tld_list, &mut tables.tlds),
            (&self.blacklist, &mut tables.blacklist),
        ];
        for (path, slot) in overrides {
            if let Some(path) = path {
                *slot = load_domain_list(path)
                    .with_context(|| format!("read list {}", path.display()))?;
            }
        }
        Ok(tables)
    }
}
