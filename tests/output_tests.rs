use droplet_ips::output::{
    error_command, escape_data, file_command_entry, set_output_command, ActionOutput,
};
use droplet_ips::ActionError;

#[test]
fn test_file_command_entry_format() {
    let entry = file_command_entry("server_ips", r#"["1.2.3.4"]"#, "ghadelimiter_abc").unwrap();
    assert_eq!(entry, "server_ips<<ghadelimiter_abc\n[\"1.2.3.4\"]\nghadelimiter_abc\n");
}

#[test]
fn test_file_command_entry_rejects_delimiter_in_value() {
    let err = file_command_entry("server_ips", "x ghadelimiter_abc y", "ghadelimiter_abc").unwrap_err();
    assert!(matches!(err, ActionError::Output(ref msg) if msg.contains("value")));
}

#[test]
fn test_file_command_entry_rejects_delimiter_in_name() {
    let err = file_command_entry("ghadelimiter_abc", "v", "ghadelimiter_abc").unwrap_err();
    assert!(matches!(err, ActionError::Output(ref msg) if msg.contains("name")));
}

#[test]
fn test_set_output_appends_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("github_output");
    std::fs::write(&path, "existing=1\n").unwrap();
    let output = ActionOutput::new(Some(path.clone()));

    output.set_output("first", "a").unwrap();
    output.set_json_output("server_ips", &["1.2.3.4".to_string(), "5.6.7.8".to_string()]).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "existing=1");
    assert!(lines[1].starts_with("first<<ghadelimiter_"));
    assert_eq!(lines[2], "a");
    assert!(lines[4].starts_with("server_ips<<ghadelimiter_"));
    assert_eq!(lines[5], r#"["1.2.3.4","5.6.7.8"]"#);
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_set_output_unwritable_path_is_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = ActionOutput::new(Some(dir.path().join("missing").join("output")));
    let err = output.set_output("server_ips", "[]").unwrap_err();
    assert!(matches!(err, ActionError::Output(_)));
}

#[test]
fn test_set_output_command_format() {
    assert_eq!(
        set_output_command("server_ips", r#"["1.2.3.4","5.6.7.8"]"#),
        r#"::set-output name=server_ips::["1.2.3.4","5.6.7.8"]"#
    );
    assert_eq!(set_output_command("server_ips", "[]"), "::set-output name=server_ips::[]");
}

#[test]
fn test_set_output_command_escapes_name_and_value() {
    assert_eq!(
        set_output_command("ips:v4,public", "100%\nnext\r"),
        "::set-output name=ips%3Av4%2Cpublic::100%25%0Anext%0D"
    );
}

#[test]
fn test_set_output_without_file_writes_no_file() {
    let output = ActionOutput::new(None);
    assert!(output.path().is_none());
    output.set_output("server_ips", "[]").unwrap();
}

#[test]
fn test_error_command_escapes_message() {
    assert_eq!(
        error_command("HTTP 401: bad\r\ntoken 100%"),
        "::error::HTTP 401: bad%0D%0Atoken 100%25"
    );
    assert_eq!(escape_data("plain"), "plain");
}
