// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate the creation pipeline: read form, validate, sanitize, emit record or merged settings
// role: orchestration
// inputs: EffectiveConfig (input/output locations); creation form JSON
// outputs: Canonical record JSON on stdout/file, or the settings document with the insight merged in
// invariants: Validation always runs before sanitize; settings files are parsed before any write happens
// errors: All stages bubble with source context; no partial writes on failure
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};

use crate::cli::EffectiveConfig;
use crate::form::{self, CreationFormFields};
use crate::normalize::{RepositoryList, SeriesDefaults};
use crate::sanitize::sanitize_search_insight;
use crate::{settings, util};

/// Parse and validate a creation form from raw JSON text.
pub fn load_form(raw: &str) -> Result<CreationFormFields> {
  let fields: CreationFormFields = serde_json::from_str(raw).context("parsing creation form JSON")?;
  form::validate(&fields)?;
  Ok(fields)
}

/// Run the full creation flow for the given config.
pub fn process_creation(cfg: &EffectiveConfig) -> Result<()> {
  let raw = util::read_input(&cfg.form).with_context(|| format!("reading creation form from {}", cfg.form))?;
  let fields = load_form(&raw)?;
  let record = sanitize_search_insight(&fields, &RepositoryList, &SeriesDefaults)?;

  match cfg.settings.as_deref() {
    Some(path) => {
      let doc_text = std::fs::read_to_string(path).with_context(|| format!("reading settings document {path}"))?;
      let mut doc: serde_json::Value = serde_json::from_str(&doc_text).context("parsing settings document JSON")?;

      settings::merge_into_settings(&mut doc, &record)?;

      let rendered = serde_json::to_string_pretty(&doc)?;
      let dest = if cfg.in_place { path } else { cfg.out.as_str() };
      util::write_output(dest, &rendered)?;
    }
    None => {
      let rendered = serde_json::to_string_pretty(&record)?;
      util::write_output(&cfg.out, &rendered)?;
    }
  }

  Ok(())
}
