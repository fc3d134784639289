use assert_cmd::Command;
use predicates::prelude::*;

fn advisor() -> Command {
    let mut cmd = Command::cargo_bin("crop-advisor").unwrap();
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn test_cli_help() {
    advisor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: crop-advisor"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("prompt"))
        .stdout(predicate::str::contains("--api-key <API_KEY>"))
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn test_cli_serve_help() {
    advisor()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: crop-advisor serve"))
        .stdout(predicate::str::contains("--port <PORT>"))
        .stdout(predicate::str::contains("--variant <VARIANT>"))
        .stdout(predicate::str::contains("--templates <TEMPLATES>"))
        .stdout(predicate::str::contains("--static-dir <STATIC_DIR>"));
}

#[test]
fn test_cli_ask_help() {
    advisor()
        .arg("ask")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: crop-advisor ask"))
        .stdout(predicate::str::contains("--variant <VARIANT>"));
}

#[test]
fn test_cli_prompt_prints_english_prompt() {
    advisor()
        .args([
            "prompt",
            "--month",
            "March",
            "--location",
            "Punjab, India",
            "--budget",
            "50000",
            "--experience",
            "intermediate",
            "--farm-size",
            "medium",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month: March"))
        .stdout(predicate::str::contains("Location: Punjab, India"))
        .stdout(predicate::str::contains("Budget: ₹50000"))
        .stdout(predicate::str::contains("Organic Farming: No"))
        .stdout(predicate::str::contains("\"recommendations\""));
}

#[test]
fn test_cli_prompt_in_hindi() {
    advisor()
        .args([
            "prompt", "--variant", "hi", "--month", "3", "--location", "Bihar", "--budget", "20000",
            "--organic",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("मार्च"))
        .stdout(predicate::str::contains("Bihar"))
        .stdout(predicate::str::contains("₹20000"));
}

#[test]
fn test_cli_prompt_rejects_blank_location() {
    advisor()
        .args(["prompt", "--location", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("location must not be empty"));
}

#[test]
fn test_cli_prompt_rejects_budget_out_of_range() {
    advisor()
        .args(["prompt", "--location", "Goa", "--budget", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the allowed range"));
}

#[test]
fn test_cli_unknown_variant() {
    advisor()
        .args(["ask", "--variant", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant 'fr'"));
}

#[test]
fn test_cli_no_command() {
    // Running without a command should show help/usage
    advisor()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: crop-advisor"));
}

#[test]
fn test_cli_ask_ends_cleanly_when_input_runs_out() {
    advisor()
        .args(["ask", "--variant", "hi"])
        .write_stdin("March\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("फसल मुनाफा सलाहकार"));
}

#[test]
fn test_cli_ask_reports_missing_key() {
    advisor()
        .arg("ask")
        .write_stdin("March\nPunjab\n\n\n\n\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Gemini API Key not found"))
        .stderr(predicate::str::contains("Console session failed"));
}
