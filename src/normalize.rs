use std::collections::HashSet;

use anyhow::{Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::FormSeries;
use crate::model::InsightSeries;
use crate::sanitize::{RepositoryNormalizer, SeriesNormalizer};

/// Stroke assigned to a series when the form omits a color choice.
pub const DEFAULT_SERIES_STROKE: &str = "var(--blue)";

static QUERY_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Default repository normalizer: trims entries, drops empties, strips
/// trailing slashes, and de-duplicates while preserving first-occurrence
/// order.
pub struct RepositoryList;

impl RepositoryNormalizer for RepositoryList {
  fn normalize(&self, raw: &[String]) -> Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    for entry in raw {
      let repo = entry.trim().trim_end_matches('/');

      if repo.is_empty() {
        continue;
      }

      if seen.insert(repo.to_string()) {
        out.push(repo.to_string());
      }
    }

    Ok(out)
  }
}

/// Default series normalizer: trims labels, collapses runs of whitespace in
/// query text (multiline queries from the form editor become one line), and
/// fills in a default stroke. Rejects entries whose query is empty after
/// cleanup.
pub struct SeriesDefaults;

impl SeriesNormalizer for SeriesDefaults {
  fn normalize(&self, raw: &[FormSeries]) -> Result<Vec<InsightSeries>> {
    raw
      .iter()
      .map(|entry| {
        let query = QUERY_WHITESPACE.replace_all(entry.query.trim(), " ").to_string();

        if query.is_empty() {
          bail!("series {:?} has an empty query", entry.name);
        }

        Ok(InsightSeries {
          name: entry.name.trim().to_string(),
          query,
          stroke: entry
            .stroke
            .clone()
            .unwrap_or_else(|| DEFAULT_SERIES_STROKE.to_string()),
        })
      })
      .collect()
  }
}
