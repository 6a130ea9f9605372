use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

const VOCABULARY: &str = include_str!("../../fairspace-shapes/tests/data/vocabulary.json");

const COLLECTION: &str = "https://fairspace.nl/ontology#Collection";
const COLLECTION_SHAPE: &str = "https://fairspace.nl/ontology#CollectionShape";
const SUBJECT: &str = "http://example.com/collections/1";

/// Helper to create a `fairspace` command that runs in an isolated temp directory.
/// Sets HOME to the temp dir so the `~/.fairspace/` fallback never leaks between tests.
fn fairspace_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("fairspace");
    cmd.current_dir(work_dir.path());
    cmd.env("HOME", work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Temp dir holding `vocabulary.json` and `metadata.json`.
fn workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("vocabulary.json"), VOCABULARY).unwrap();
    fs::write(
        tmp.path().join("metadata.json"),
        json!([
            {
                "@id": SUBJECT,
                "@type": [COLLECTION],
                "http://www.w3.org/2000/01/rdf-schema#label": [{"@value": "My collection"}],
                "https://fairspace.nl/ontology#hasFile": [
                    {"@id": "http://example.com/files/3"},
                    {"@id": "http://example.com/files/2"}
                ]
            },
            {
                "@id": "http://example.com/files/2",
                "@type": ["https://fairspace.nl/ontology#File"],
                "http://www.w3.org/2000/01/rdf-schema#label": [{"@value": "File 2"}]
            }
        ])
        .to_string(),
    )
    .unwrap();
    tmp
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn keys(properties: &Value) -> Vec<&str> {
    properties
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["key"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("fairspace")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fairspace"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("fairspace")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("combine"))
        .stdout(predicate::str::contains("empty"))
        .stdout(predicate::str::contains("classes"));
}

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("fairspace")
        .args(["--verbose", "--quiet", "classes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn read_only_requires_editing() {
    let tmp = workspace();
    fairspace_cmd(&tmp)
        .args(["--vocabulary", "vocabulary.json", "combine", "metadata.json", "--read-only"])
        .assert()
        .failure()
        .code(2);
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn combine_outputs_ordered_properties() {
    let tmp = workspace();
    let properties = stdout_json(fairspace_cmd(&tmp).args([
        "--vocabulary",
        "vocabulary.json",
        "combine",
        "metadata.json",
        "--subject",
        SUBJECT,
    ]));

    assert_eq!(
        keys(&properties),
        vec![
            "https://fairspace.nl/ontology#hasFile",
            "http://www.w3.org/2000/01/rdf-schema#label",
            "http://www.schema.org/creator",
            "http://www.w3.org/2000/01/rdf-schema#comment",
            "https://fairspace.nl/ontology#list",
            "@type",
        ]
    );
    assert_eq!(properties[0]["values"][0]["label"], json!("File 2"));
    assert_eq!(properties[0]["valueKind"], json!("referenceWithCreation"));
    assert_eq!(properties[1]["values"], json!([{"value": "My collection"}]));
}

#[test]
fn combine_reads_metadata_from_stdin() {
    let tmp = workspace();
    let metadata = json!([{
        "@id": SUBJECT,
        "@type": [COLLECTION],
        "http://www.w3.org/2000/01/rdf-schema#comment": [{"@value": "b"}, {"@value": "a"}]
    }]);

    let properties = stdout_json(
        fairspace_cmd(&tmp)
            .args(["--vocabulary", "vocabulary.json", "combine", "-"])
            .write_stdin(metadata.to_string()),
    );

    assert_eq!(
        properties[0]["values"],
        json!([{"value": "a"}, {"value": "b"}])
    );
}

#[test]
fn combine_ambiguous_graph_warns_and_prints_nothing() {
    let tmp = workspace();
    fairspace_cmd(&tmp)
        .args(["--vocabulary", "vocabulary.json", "combine", "metadata.json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"))
        .stderr(predicate::str::contains("exactly one node"));
}

#[test]
fn quiet_suppresses_warnings() {
    let tmp = workspace();
    fairspace_cmd(&tmp)
        .args(["-q", "--vocabulary", "vocabulary.json", "combine", "metadata.json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn combine_with_editing_info() {
    let tmp = workspace();
    fs::write(
        tmp.path().join("shacl.json"),
        json!([
            {
                "@id": "http://example.com/NodeShapeShape",
                "http://www.w3.org/ns/shacl#targetClass": [{"@id": "http://www.w3.org/ns/shacl#NodeShape"}],
                "http://www.w3.org/ns/shacl#name": [{"@value": "Shape"}],
                "http://www.w3.org/ns/shacl#property": [
                    {"@id": "http://example.com/nameShape"},
                    {"@id": "http://example.com/propertyShape"}
                ]
            },
            {
                "@id": "http://example.com/nameShape",
                "http://www.w3.org/ns/shacl#path": [{"@id": "http://www.w3.org/ns/shacl#name"}],
                "http://www.w3.org/ns/shacl#name": [{"@value": "Name"}]
            },
            {
                "@id": "http://example.com/propertyShape",
                "http://www.w3.org/ns/shacl#path": [{"@id": "http://www.w3.org/ns/shacl#property"}],
                "http://www.w3.org/ns/shacl#name": [{"@value": "Properties"}]
            }
        ])
        .to_string(),
    )
    .unwrap();

    let properties = stdout_json(fairspace_cmd(&tmp).args([
        "--vocabulary",
        "shacl.json",
        "combine",
        "vocabulary.json",
        "--subject",
        COLLECTION_SHAPE,
        "--editing",
    ]));

    assert_eq!(
        keys(&properties),
        vec![
            "http://www.w3.org/ns/shacl#name",
            "http://www.w3.org/ns/shacl#property",
            "@type"
        ]
    );
    assert_eq!(properties[0]["editable"], json!(false));
    assert_eq!(properties[1]["editable"], json!(true));
    assert_eq!(
        properties[1]["systemProperties"],
        json!([
            "https://fairspace.nl/ontology#labelShape",
            "https://fairspace.nl/ontology#hasFileShape"
        ])
    );
    assert_eq!(properties[1]["values"][0]["label"], json!("Creator"));
}

#[test]
fn empty_lists_all_properties_of_a_type() {
    let tmp = workspace();
    let properties = stdout_json(fairspace_cmd(&tmp).args([
        "--vocabulary",
        "vocabulary.json",
        "empty",
        "https://fairspace.nl/ontology#File",
    ]));

    assert_eq!(
        keys(&properties),
        vec![
            "http://www.w3.org/2000/01/rdf-schema#label",
            "https://fairspace.nl/ontology#fileSize",
            "https://fairspace.nl/ontology#status",
            "@type"
        ]
    );
}

#[test]
fn empty_unknown_type_fails() {
    let tmp = workspace();
    fairspace_cmd(&tmp)
        .args(["--vocabulary", "vocabulary.json", "empty", "http://example.com/Nothing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no shape targets class"));
}

#[test]
fn shapes_for_multiple_types() {
    let tmp = workspace();
    let shapes = stdout_json(fairspace_cmd(&tmp).args([
        "--vocabulary",
        "vocabulary.json",
        "shapes",
        "https://fairspace.nl/ontology#Dataset",
        "https://fairspace.nl/ontology#User",
    ]));

    let ids: Vec<_> = shapes
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["@id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "https://fairspace.nl/ontology#labelShape",
            "https://fairspace.nl/ontology#authorShape"
        ]
    );
}

#[test]
fn classes_as_table() {
    let tmp = workspace();
    fairspace_cmd(&tmp)
        .args(["--vocabulary", "vocabulary.json", "--format", "table", "classes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TARGET CLASS"))
        .stdout(predicate::str::contains("Collection"))
        .stdout(predicate::str::contains("File"))
        .stdout(predicate::str::contains("Dataset").not());
}

#[test]
fn label_falls_back_to_iri() {
    let tmp = workspace();
    fairspace_cmd(&tmp)
        .args([
            "--vocabulary",
            "vocabulary.json",
            "--format",
            "table",
            "label",
            "https://fairspace.nl/ontology#hasFile",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("Files\n"));

    fairspace_cmd(&tmp)
        .args(["--vocabulary", "vocabulary.json", "label", "http://example.com/unknown"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\"http://example.com/unknown\"\n"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_supplies_vocabulary_and_format() {
    let tmp = workspace();
    let config_dir = tmp.path().join(".fairspace");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("vocabulary.json"), VOCABULARY).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "vocabulary = \"vocabulary.json\"\nformat = \"table\"\n",
    )
    .unwrap();

    // discovered from a nested working directory
    let nested = tmp.path().join("projects/a");
    fs::create_dir_all(&nested).unwrap();

    fairspace_cmd(&tmp)
        .current_dir(&nested)
        .arg("classes")
        .assert()
        .success()
        .stdout(predicate::str::contains("TARGET CLASS"));

    // flag beats config
    fairspace_cmd(&tmp)
        .current_dir(&nested)
        .args(["--format", "json", "label", "http://www.w3.org/2000/01/rdf-schema#label"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\"Label\"\n"));
}

#[test]
fn explicit_config_path() {
    let tmp = workspace();
    fs::write(
        tmp.path().join("custom.toml"),
        "vocabulary = \"vocabulary.json\"\n",
    )
    .unwrap();

    fairspace_cmd(&tmp)
        .args(["--config", "custom.toml", "label", "http://www.schema.org/creator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creator"));
}

#[test]
fn invalid_config_is_reported() {
    let tmp = workspace();
    fs::write(tmp.path().join("bad.toml"), "unknown_key = 1\n").unwrap();

    fairspace_cmd(&tmp)
        .args(["--config", "bad.toml", "classes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn missing_vocabulary_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    fairspace_cmd(&tmp)
        .arg("classes")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no vocabulary given"));
}

#[test]
fn vocabulary_must_be_an_array() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("vocabulary.json"), "{\"@id\": \"x\"}").unwrap();

    fairspace_cmd(&tmp)
        .args(["--vocabulary", "vocabulary.json", "classes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid vocabulary"));
}

#[test]
fn both_inputs_from_stdin_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    fairspace_cmd(&tmp)
        .args(["--vocabulary", "-", "combine", "-"])
        .write_stdin("[]")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot both be read from stdin"));
}

#[test]
fn malformed_metadata_is_input_error() {
    let tmp = workspace();
    fs::write(tmp.path().join("broken.json"), "[{").unwrap();

    fairspace_cmd(&tmp)
        .args(["--vocabulary", "vocabulary.json", "combine", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse broken.json"));
}
