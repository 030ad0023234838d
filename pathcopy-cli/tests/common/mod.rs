//! Common test utilities for CLI integration tests.
//!
//! Every command runs with a temporary home and working directory and with
//! the `PATHCOPY_*` variables cleared, so the developer's own configuration
//! never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the CLI reads.
const PATHCOPY_VARS: [&str; 10] = [
    "PATHCOPY_CONFIG",
    "PATHCOPY_LOG_MODE",
    "PATHCOPY_OUTPUT_FORMAT",
    "PATHCOPY_MAIN_MENU_ORDER",
    "PATHCOPY_SUBMENU_ORDER",
    "PATHCOPY_DROP_REDUNDANT_WORDS",
    "PATHCOPY_APPEND_SEPARATOR_FOR_DIRECTORIES",
    "PATHCOPY_USE_HIDDEN_SHARES",
    "PATHCOPY_USE_FQDN",
    "PATHCOPY_COMPUTER_NAME",
];

/// A network setup shared by several tests.
pub const NETWORK_CONFIG: &str = r#"
computer_name: BUILDBOX
network:
  shares:
    - name: Data
      path: 'C:\Shares\Data'
  mapped_drives:
    "Z:": '\\files\team'
  hosts:
    files: files.corp.example.com
    buildbox: buildbox.corp.example.com
"#;

/// Test environment with an isolated home and working directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands.
    pub work_dir: PathBuf,
    /// Home directory for commands.
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// A `pathcopy` command running inside this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathcopy").expect("Failed to find pathcopy binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env("USERPROFILE", &self.home_dir);
        for var in PATHCOPY_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write the project configuration discovered from the working directory.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        self.write_file("pathcopy.yaml", contents)
    }

    /// Write a file under the working directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// The working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }
}
