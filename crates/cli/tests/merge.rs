use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const PREFIXES: &str = "@prefix skos: <http://www.w3.org/2004/02/skos/core#> .\n";

#[allow(deprecated)]
fn merge_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("thesaurus-merge").expect("binary");
    cmd.current_dir(workdir).env_remove("RUST_LOG");
    cmd
}

fn setup_inputs() -> TempDir {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join("animals.ttl"),
        format!(
            "{PREFIXES}\
             <http://a.org/cat> skos:prefLabel \"Cat\" .\n\
             <http://a.org/dog> skos:prefLabel \"dog\" .\n"
        ),
    )
    .expect("write animals");
    fs::write(
        temp.path().join("pets.ttl"),
        format!(
            "{PREFIXES}\
             <http://b.org/feline> skos:prefLabel \"cat\" .\n\
             <http://b.org/kennel> skos:prefLabel \"dog house\" .\n"
        ),
    )
    .expect("write pets");
    temp
}

#[test]
fn prints_counts_and_writes_output() {
    let temp = setup_inputs();
    let root = temp.path();

    merge_cmd(root)
        .args(["animals.ttl", "pets.ttl", "-o", "merged.nt", "-f", "nt"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1  equals  found")
                .and(predicate::str::contains("0  substrings  found"))
                .and(predicate::str::contains("1  phrase  found"))
                .and(predicate::str::contains("0  related  found")),
        );

    let merged = fs::read_to_string(root.join("merged.nt")).expect("read output");
    assert!(merged.contains(
        "<http://a.org/cat> <http://www.w3.org/2004/02/skos/core#closeMatch> <http://b.org/feline> ."
    ));
    assert!(merged.contains(
        "<http://a.org/dog> <http://www.w3.org/2004/02/skos/core#relatedMatch> <http://b.org/kennel> ."
    ));
    assert!(merged.contains("<http://b.org/kennel> <http://www.w3.org/2004/02/skos/core#prefLabel> \"dog house\" ."));
}

#[test]
fn json_report() {
    let temp = setup_inputs();
    let root = temp.path();

    let output = merge_cmd(root)
        .args(["animals.ttl", "pets.ttl", "-o", "merged.ttl", "-f", "turtle", "--json"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["equals"], 1);
    assert_eq!(body["phrase"], 1);
    assert_eq!(body["total"], 2);
    assert_eq!(body["output"], "merged.ttl");

    let merged = fs::read_to_string(root.join("merged.ttl")).expect("read output");
    assert!(merged.contains("@prefix skos:"));
    assert!(merged.contains("@prefix exa:"));
}

#[test]
fn identical_only_flag() {
    let temp = setup_inputs();

    merge_cmd(temp.path())
        .args(["animals.ttl", "pets.ttl", "-o", "merged.rdf", "-i"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1  equals  found").and(predicate::str::contains("0  phrase  found")));
}

#[test]
fn every_output_format_is_written() {
    let temp = setup_inputs();
    let root = temp.path();

    for format in ["xml", "turtle", "n3", "nt", "pretty-xml", "trix"] {
        let output = format!("merged.{format}");
        merge_cmd(root)
            .args(["animals.ttl", "pets.ttl", "-o", &output, "-f", format, "--verbose", "none"])
            .assert()
            .success();
        let written = fs::read_to_string(root.join(&output)).expect("read output");
        assert!(written.contains("http://b.org/feline"), "{format}: {written}");
    }
}

#[test]
fn one_input_is_rejected() {
    let temp = setup_inputs();
    let root = temp.path();

    merge_cmd(root)
        .args(["animals.ttl", "-o", "merged.rdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please specify at least TWO input files"));

    assert!(!root.join("merged.rdf").exists());
}

#[test]
fn unknown_format_is_rejected() {
    let temp = setup_inputs();

    merge_cmd(temp.path())
        .args(["animals.ttl", "pets.ttl", "-o", "merged.rdf", "-f", "jsonld"])
        .assert()
        .failure();
}

#[test]
fn identical_only_warns_about_inert_flags() {
    let temp = setup_inputs();

    merge_cmd(temp.path())
        .args(["animals.ttl", "pets.ttl", "-o", "merged.rdf", "-i", "-p", "-t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1  equals  found").and(predicate::str::contains("0  phrase  found")))
        .stderr(predicate::str::contains("compare_parents").and(predicate::str::contains("term_signature")));
}

#[test]
fn config_file_enables_heuristics() {
    let temp = setup_inputs();
    let root = temp.path();
    fs::write(root.join("align.toml"), "[matching]\nidentical_only = true\n").expect("write config");

    merge_cmd(root)
        .args(["animals.ttl", "pets.ttl", "-o", "merged.rdf", "--config", "align.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0  phrase  found"));
}

#[test]
fn file_verbosity_writes_log_file() {
    let temp = setup_inputs();
    let root = temp.path();

    merge_cmd(root)
        .args(["animals.ttl", "pets.ttl", "-o", "merged.rdf", "--verbose", "file"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let log = fs::read_to_string(root.join("parserLog.txt")).expect("read log");
    assert!(log.contains("Parsing"), "{log}");
}
