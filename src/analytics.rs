// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Boundary shapes for the read-only users-activity statistics query consumed from the analytics backend
// role: model/contract
// outputs: Serde types mirroring the request parameters and response payload; no computation
// invariants: Pure data contract; unrelated to insight creation and must stay that way
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// These types describe a query this tool consumes, not one it answers. The
// analytics engine computing the numbers lives elsewhere.

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyticsDateRange {
  LastWeek,
  LastMonth,
  LastThreeMonths,
  Custom,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyticsGrouping {
  Daily,
  Weekly,
}

/// Parameters of the users-statistics query.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersStatisticsParams {
  pub date_range: AnalyticsDateRange,
  pub grouping: AnalyticsGrouping,
}

/// Rolling-average active-user counts over the requested range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersSummary {
  #[serde(rename = "avgDAU")]
  pub avg_dau: f64,
  #[serde(rename = "avgWAU")]
  pub avg_wau: f64,
  #[serde(rename = "avgMAU")]
  pub avg_mau: f64,
}

/// One time bucket of user activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityNode {
  pub date: NaiveDate,
  pub count: i64,
  pub unique_users: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
  pub total_count: i64,
  pub total_unique_users: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersActivity {
  pub nodes: Vec<ActivityNode>,
  pub summary: ActivitySummary,
}

/// Usage-frequency histogram bucket: how many users were active on exactly
/// `days_used` days, as a count and as a percentage of active users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageFrequency {
  pub days_used: i64,
  pub frequency: i64,
  pub percentage: f64,
}

/// Full response payload of the users-statistics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersStatistics {
  pub summary: UsersSummary,
  pub activity: UsersActivity,
  pub frequencies: Vec<UsageFrequency>,
  /// Seat count from the product license; absent on unlicensed instances.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub license_user_count: Option<i64>,
  pub total_user_count: i64,
}
