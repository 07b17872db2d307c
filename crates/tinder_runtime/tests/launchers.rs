use std::path::Path;
use std::process::Command;

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn paper_passes_arguments_through_in_order() {
    let exe = env!("CARGO_BIN_EXE_paper");
    let output = Command::new(exe).args(["a", "b"]).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let lines = stdout_lines(&output);

    assert!(lines[0].starts_with("ca.vlacroix.Paper"));
    assert_eq!(lines.len(), 4);
    assert_eq!(Path::new(&lines[1]).file_name(), Path::new(exe).file_name());
    assert_eq!(&lines[2..], ["a", "b"]);
}

#[test]
fn cheveret_reports_its_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_cheveret"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let lines = stdout_lines(&output);

    assert!(lines[0].starts_with("ca.vlacroix.Cheveret"));
    assert!(lines[0].ends_with(tinder_services::VERSION));
    assert_eq!(Path::new(&lines[1]), dir.path().canonicalize().unwrap());
    if cfg!(target_os = "linux") {
        assert_eq!(lines[2], "inotify");
    }
}

#[test]
fn identity_and_flag_agree() {
    let output = Command::new(env!("CARGO_BIN_EXE_paper")).output().unwrap();
    let lines = stdout_lines(&output);
    let fields: Vec<&str> = lines[0].split(' ').collect();

    let devel = cfg!(feature = "devel");
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].ends_with(".Devel"), devel);
    assert_eq!(fields[1], tinder_services::VERSION);
    assert_eq!(fields[2], devel.to_string());
}

#[test]
fn uncaught_program_error_fails_the_process() {
    let output = Command::new(env!("CARGO_BIN_EXE_paper"))
        .arg("--raise")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("raised on request"));
}
