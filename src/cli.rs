use anyhow::{Result, bail};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "insight-create",
    version,
    about = "Convert insight creation forms into canonical search-insight settings records (JSON)",
    long_about = None
)]
pub struct Cli {
  /// Creation form JSON (file path, or "-" for stdin)
  #[arg(long, default_value = "-")]
  pub form: String,

  /// Settings document to merge the new insight into; without it, only the
  /// canonical record is emitted
  #[arg(long)]
  pub settings: Option<PathBuf>,

  /// Output location: file path, or "-" for stdout
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Rewrite the settings document in place (requires --settings)
  #[arg(long)]
  pub in_place: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EffectiveConfig {
  pub form: String, // "-" or absolute path for stability
  pub settings: Option<String>,
  pub out: String,
  pub in_place: bool,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  // Validate destination selection
  if cli.in_place && cli.settings.is_none() {
    bail!("--in-place requires --settings");
  }

  if cli.in_place && cli.out != "-" {
    bail!("Ambiguous destination: choose one of --in-place | --out");
  }

  let form = if cli.form == "-" {
    cli.form.clone()
  } else {
    util::canonicalize_lossy(&cli.form)
  };

  let settings = cli.settings.as_deref().map(util::canonicalize_lossy);

  Ok(EffectiveConfig {
    form,
    settings,
    out: cli.out,
    in_place: cli.in_place,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn base_cli() -> Cli {
    Cli {
      form: "-".into(),
      settings: None,
      out: "-".into(),
      in_place: false,
      gen_man: false,
    }
  }

  #[test]
  fn normalize_defaults_to_stdin_and_stdout() {
    let cfg = normalize(base_cli()).unwrap();
    assert_eq!(cfg.form, "-");
    assert_eq!(cfg.out, "-");
    assert!(cfg.settings.is_none());
    assert!(!cfg.in_place);
  }

  #[test]
  fn normalize_rejects_in_place_without_settings() {
    let mut cli = base_cli();
    cli.in_place = true;
    assert!(normalize(cli).is_err());
  }

  #[test]
  fn normalize_rejects_in_place_with_explicit_out() {
    let mut cli = base_cli();
    cli.in_place = true;
    cli.settings = Some(PathBuf::from("settings.json"));
    cli.out = "merged.json".into();
    assert!(normalize(cli).is_err());
  }

  #[test]
  fn normalize_canonicalizes_form_and_settings_paths() {
    let mut cli = base_cli();
    cli.form = "form.json".into();
    cli.settings = Some(PathBuf::from("settings.json"));
    let cfg = normalize(cli).unwrap();
    assert!(cfg.form.starts_with('/'));
    assert!(cfg.settings.unwrap().starts_with('/'));
  }
}
