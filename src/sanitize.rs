// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Convert validated creation-form state into the canonical search-insight record
// role: core/transformation
// inputs: CreationFormFields plus injected repository/series normalizers
// outputs: MinimalSearchBasedInsightData ready for settings persistence
// invariants: all-repositories scope yields empty repositories; fixed fields come from NewInsightDefaults; no partial records
// errors: collaborator and step-parse errors propagate unchanged; no recovery, no retries
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;

use crate::form::{CreationFormFields, FormSeries, Scope};
use crate::model::{InsightSeries, InsightStep, MinimalSearchBasedInsightData, NewInsightDefaults};

/// Normalizes the raw repository list from the form into a de-duplicated,
/// order-preserving sequence of repository names.
pub trait RepositoryNormalizer {
  fn normalize(&self, raw: &[String]) -> Result<Vec<String>>;
}

/// Normalizes raw form series definitions into persisted series shapes.
pub trait SeriesNormalizer {
  fn normalize(&self, raw: &[FormSeries]) -> Result<Vec<InsightSeries>>;
}

/// Converter from form-shape insight to the insight as it is persisted in
/// user/org settings.
///
/// Assumes `raw` already passed [`crate::form::validate`]; no re-validation
/// happens here. Pure and synchronous: reads only its arguments, returns a
/// fresh record on every call, and surfaces collaborator errors via `?`
/// without adding context.
pub fn sanitize_search_insight(
  raw: &CreationFormFields,
  repository_normalizer: &dyn RepositoryNormalizer,
  series_normalizer: &dyn SeriesNormalizer,
) -> Result<MinimalSearchBasedInsightData> {
  let repositories = match raw.scope() {
    Scope::AllRepositories => Vec::new(),
    Scope::Explicit(list) => repository_normalizer.normalize(list)?,
  };

  let series = series_normalizer.normalize(&raw.series)?;
  let step = InsightStep::parse(raw.step, &raw.step_value)?;
  let defaults = NewInsightDefaults::search_based();

  Ok(MinimalSearchBasedInsightData {
    execution_type: defaults.execution_type,
    r#type: defaults.r#type,
    title: raw.title.clone(),
    repositories,
    series,
    step,
    dashboards: defaults.dashboards,
    filters: defaults.filters,
  })
}
