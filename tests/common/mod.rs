use std::path::{Path, PathBuf};

/// Creation form covering the interesting cases: duplicate and untrimmed
/// repositories, a multiline query, one explicit stroke.
#[allow(dead_code)]
pub fn sample_form() -> serde_json::Value {
  serde_json::json!({
    "title": "Migration to CSS modules",
    "allRepos": false,
    "repositories": ["github.com/a/b", "github.com/a/b", " github.com/c/d "],
    "series": [
      { "name": "css modules", "query": "lang:SCSS\n  file:module" },
      { "name": "styled components", "query": "lang:TypeScript styled", "stroke": "var(--pink)" }
    ],
    "step": "week",
    "stepValue": "2"
  })
}

#[allow(dead_code)]
pub fn write_json(dir: &Path, name: &str, v: &serde_json::Value) -> PathBuf {
  let path = dir.join(name);
  std::fs::write(&path, serde_json::to_string_pretty(v).unwrap()).unwrap();
  path
}
