mod common;

use assert_cmd::Command;
use jsonschema::validator_for;

fn read_schema(name: &str) -> serde_json::Value {
  let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let path = manifest_dir.join("tests").join("schemas").join(name);
  let data = std::fs::read(&path).expect("schema file");
  serde_json::from_slice(&data).expect("valid schema JSON")
}

fn compile_schema(name: &str) -> jsonschema::Validator {
  let schema = read_schema(name);
  validator_for(&schema).expect("compile schema")
}

fn emit_record(form: &serde_json::Value) -> serde_json::Value {
  let out = Command::cargo_bin("insight-create")
    .unwrap()
    .write_stdin(form.to_string())
    .output()
    .unwrap();

  assert!(out.status.success());
  serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn explicit_scope_record_conforms_to_schema() {
  let record = emit_record(&common::sample_form());
  let compiled = compile_schema("search-insight.record.schema.json");
  compiled
    .validate(&record)
    .expect("schema validation failed for explicit-scope record");
}

#[test]
fn all_repos_record_conforms_to_schema() {
  let mut form = common::sample_form();
  form["allRepos"] = serde_json::json!(true);

  let record = emit_record(&form);
  let compiled = compile_schema("search-insight.record.schema.json");
  compiled
    .validate(&record)
    .expect("schema validation failed for all-repos record");

  assert_eq!(record["repositories"], serde_json::json!([]));
}
