// Changes the process working directory, so it lives alone in its own test binary.

use tinder_services::current_working_directory;

#[test]
fn follows_directory_changes() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().canonicalize().unwrap();

    std::env::set_current_dir(dir.path()).unwrap();
    assert_eq!(current_working_directory(), Some(expected));
}
