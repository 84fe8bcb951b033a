// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the canonical search-insight record persisted into user/org settings documents
// role: model/types
// outputs: Serializable structs with stable camelCase field names; single-key step mapping
// invariants: executionType/type/dashboards/filters are fixed at creation; step serializes with exactly one key
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;

use anyhow::{Context, Result, bail};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How an insight's data points are computed. Creation always produces
/// backend-executed insights; other variants only appear in records written
/// by older clients.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightExecutionType {
  Backend,
  Runtime,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum InsightType {
  #[serde(rename = "search-based")]
  SearchBased,
  #[serde(rename = "lang-stats")]
  LangStats,
}

/// Time-bucketing unit for an insight's sampling interval.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepUnit {
  Day,
  Week,
  Month,
  Year,
}

impl StepUnit {
  pub fn as_str(&self) -> &'static str {
    match self {
      StepUnit::Day => "day",
      StepUnit::Week => "week",
      StepUnit::Month => "month",
      StepUnit::Year => "year",
    }
  }
}

/// Sampling interval as a (unit, magnitude) pair.
///
/// The settings wire shape is the single-key mapping `{"week": 2}`; that
/// encoding lives entirely in the Serialize/Deserialize impls so the rest of
/// the code works with plain fields.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct InsightStep {
  pub unit: StepUnit,
  pub magnitude: u32,
}

impl InsightStep {
  /// Typed parse of the form's string-valued magnitude. Rejects non-numeric
  /// and zero values loudly rather than carrying an unguarded number through
  /// to the settings document.
  pub fn parse(unit: StepUnit, raw: &str) -> Result<Self> {
    let magnitude: u32 = raw
      .trim()
      .parse()
      .with_context(|| format!("parsing step value {raw:?}"))?;

    if magnitude == 0 {
      bail!("step value must be a positive number");
    }

    Ok(InsightStep { unit, magnitude })
  }
}

impl Serialize for InsightStep {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(self.unit.as_str(), &self.magnitude)?;
    map.end()
  }
}

impl<'de> Deserialize<'de> for InsightStep {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct StepVisitor;

    impl<'de> Visitor<'de> for StepVisitor {
      type Value = InsightStep;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a single-entry map from step unit to magnitude")
      }

      fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<InsightStep, A::Error> {
        let (unit, magnitude): (StepUnit, u32) =
          map.next_entry()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;

        if map.next_entry::<StepUnit, u32>()?.is_some() {
          return Err(de::Error::custom("step mapping must contain exactly one entry"));
        }

        Ok(InsightStep { unit, magnitude })
      }
    }

    deserializer.deserialize_map(StepVisitor)
  }
}

/// One plotted line within an insight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InsightSeries {
  pub name: String,
  pub query: String,
  pub stroke: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsightFilters {
  pub exclude_repo_regexp: String,
  pub include_repo_regexp: String,
  pub context: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MinimalSearchBasedInsightData {
  pub execution_type: InsightExecutionType,
  pub r#type: InsightType,
  pub title: String,
  pub repositories: Vec<String>,
  pub series: Vec<InsightSeries>,
  pub step: InsightStep,
  pub dashboards: Vec<String>,
  pub filters: InsightFilters,
}

/// The fields every freshly created search insight carries regardless of
/// form input. Insights are created unattached to dashboards and with no
/// filters; both are populated by later edit flows, never here.
#[derive(Debug, Clone)]
pub struct NewInsightDefaults {
  pub execution_type: InsightExecutionType,
  pub r#type: InsightType,
  pub dashboards: Vec<String>,
  pub filters: InsightFilters,
}

impl NewInsightDefaults {
  pub fn search_based() -> Self {
    NewInsightDefaults {
      execution_type: InsightExecutionType::Backend,
      r#type: InsightType::SearchBased,
      dashboards: Vec::new(),
      filters: InsightFilters::default(),
    }
  }
}
