use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn render_c_variable() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.arg("render")
        .arg("int foo = 5;")
        .arg("--language")
        .arg("c");

    let output_pred = predicate::str::contains("${1:[foo description]}")
        .and(predicate::str::contains("@var  {${2:int}}"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_reads_first_stdin_line() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.arg("render")
        .arg("--plain")
        .write_stdin("function foo(bar, bazzz) {\nreturn bar;\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("@param   {[type]}  bar    [bar description]"))
        .stdout(predicate::str::contains("${").not());
}

#[test]
fn render_plain_drupal_style() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.args([
        "render",
        "public function find(int $id): ?array {",
        "-l",
        "php",
        "--style",
        "drupal",
        "--plain",
    ]);

    cmd.assert().success().stdout(
        predicate::str::contains(" * @param int $id\n *   [$id description]")
            .and(predicate::str::contains(" * @return ?array")),
    );
}

#[test]
fn render_honors_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "type_placeholder = \"mixed\"").unwrap();
    writeln!(file, "always_show_return_tag = false").unwrap();

    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.arg("render")
        .arg("function foo(bar) {")
        .arg("--config")
        .arg(file.path())
        .arg("--plain");

    cmd.assert().success().stdout(
        predicate::str::contains("{mixed}  bar")
            .and(predicate::str::contains("@return").not()),
    );
}

#[test]
fn unknown_language_fails() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.args(["render", "int x;", "--language", "cobol"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language `cobol`"));
}

#[test]
fn inspect_tokens_as_json() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.args(["inspect", "let x = 1;", "--format", "token-json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[").and(predicate::str::contains("\"x\"")));
}

#[test]
fn inspect_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.args(["inspect", "let x = 1;", "--format", "symbol-xml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid format"));
}

#[test]
fn languages_lists_editor_identifiers() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.arg("languages");

    cmd.assert().success().stdout(
        predicate::str::contains("typescriptreact").and(predicate::str::contains("scss")),
    );
}

#[test]
fn tags_include_language_dialect() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.args(["tags", "--language", "php"]);

    cmd.assert().success().stdout(
        predicate::str::contains("@param").and(predicate::str::contains("@property")),
    );
}

#[test]
fn verbose_logs_recognition_to_stderr() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.env_remove("RUST_LOG")
        .args(["render", "int foo = 5;", "-l", "c", "-v"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("recognition pass finished").not())
        .stderr(predicate::str::contains("recognition pass finished"));
}

#[test]
fn rust_log_selects_log_level() {
    let mut cmd = cargo_bin_cmd!("docblock");
    cmd.env("RUST_LOG", "docblock=debug")
        .args(["render", "int foo = 5;", "-l", "c"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("recognition pass finished"));
}
