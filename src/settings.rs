// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive settings keys from insight titles and merge canonical records into settings documents
// role: persistence/settings
// inputs: Settings document as serde_json::Value; MinimalSearchBasedInsightData
// outputs: Document mutated with one new "searchInsights.insight.<key>" property; derived key returned
// invariants: Existing entries are never overwritten; key derivation is deterministic and ASCII-only
// errors: Non-object documents, unkeyable titles, and duplicate keys are rejected with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Result, anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ext::serde_json::JsonFetch;
use crate::model::MinimalSearchBasedInsightData;

/// Property-name prefix under which search insights live in a settings document.
pub const INSIGHT_KEY_PREFIX: &str = "searchInsights.insight.";

static KEY_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Derive the settings property name for an insight title.
///
/// Titles are camelCased word by word ("Migration to CSS modules" becomes
/// "searchInsights.insight.migrationToCssModules"); punctuation and
/// non-ASCII-alphanumeric characters only act as word separators.
pub fn insight_settings_key(title: &str) -> Result<String> {
  let mut key = String::new();

  for (i, word) in KEY_WORDS.find_iter(title).enumerate() {
    let lower = word.as_str().to_lowercase();

    if i == 0 {
      key.push_str(&lower);
    } else {
      let mut chars = lower.chars();
      if let Some(first) = chars.next() {
        key.extend(first.to_uppercase());
        key.push_str(chars.as_str());
      }
    }
  }

  if key.is_empty() {
    bail!("title {title:?} has no characters usable in a settings key");
  }

  Ok(format!("{INSIGHT_KEY_PREFIX}{key}"))
}

/// Look up an insight entry by its full settings key.
pub fn find_insight<'a>(doc: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
  doc.fetch(key).value()
}

/// All insight keys already present in the document, in document order.
pub fn existing_insight_keys(doc: &serde_json::Value) -> Vec<String> {
  doc
    .as_object()
    .map(|obj| {
      obj
        .keys()
        .filter(|k| k.starts_with(INSIGHT_KEY_PREFIX))
        .cloned()
        .collect()
    })
    .unwrap_or_default()
}

/// Insert the record into the settings document under its derived key.
///
/// Creation never overwrites: a document that already holds an insight with
/// the same derived key is rejected so the caller can surface a rename
/// prompt instead of silently clobbering a saved insight.
pub fn merge_into_settings(
  doc: &mut serde_json::Value,
  record: &MinimalSearchBasedInsightData,
) -> Result<String> {
  let key = insight_settings_key(&record.title)?;

  if find_insight(doc, &key).is_some() {
    bail!("an insight with key {key:?} already exists in the settings document");
  }

  let obj = doc
    .as_object_mut()
    .ok_or_else(|| anyhow!("settings document must be a JSON object"))?;

  obj.insert(key.clone(), serde_json::to_value(record)?);

  Ok(key)
}
