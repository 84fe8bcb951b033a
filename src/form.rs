use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::model::{InsightStep, StepUnit};

// Creation-form types live here to keep the sanitizer focused.

/// Raw creation-form state as submitted by the form layer (wire shape).
///
/// The form still carries the boolean-plus-list scope encoding; use
/// [`CreationFormFields::scope`] to get the tagged view and avoid reading
/// `repositories` directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationFormFields {
  pub title: String,
  #[serde(default)]
  pub all_repos: bool,
  #[serde(default)]
  pub repositories: Vec<String>,
  pub series: Vec<FormSeries>,
  pub step: StepUnit,
  pub step_value: String,
}

/// One series definition in form shape: label, query text, and an optional
/// display color chosen in the picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSeries {
  pub name: String,
  pub query: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stroke: Option<String>,
}

/// Scope selector as a tagged union. An all-repositories insight ignores
/// whatever repository list is left over in the form from a prior UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
  AllRepositories,
  Explicit(&'a [String]),
}

impl CreationFormFields {
  pub fn scope(&self) -> Scope<'_> {
    if self.all_repos {
      Scope::AllRepositories
    } else {
      Scope::Explicit(&self.repositories)
    }
  }
}

/// Form-level validation. The sanitizer assumes these invariants hold and
/// does not re-check them; every caller path must run this first.
pub fn validate(form: &CreationFormFields) -> Result<()> {
  if form.title.trim().is_empty() {
    bail!("insight title must not be empty");
  }

  if form.series.is_empty() {
    bail!("at least one data series is required");
  }

  for series in &form.series {
    if series.query.trim().is_empty() {
      bail!("series {:?} is missing a search query", series.name);
    }
  }

  if !form.all_repos && form.repositories.iter().all(|r| r.trim().is_empty()) {
    bail!("provide at least one repository or select the all-repositories scope");
  }

  // Surfaces bad step values at the form boundary instead of mid-pipeline.
  InsightStep::parse(form.step, &form.step_value)?;

  Ok(())
}
