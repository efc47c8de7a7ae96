//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command().env("APP_OPTS_FILE", fixture.path("out.yaml"));
//! }
//! ```

use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::templates;
    pub use super::TestFixture;
}

/// Template documents used across tests.
#[allow(dead_code)]
pub mod templates {
    /// YAML template with nested maps and a list of servers.
    pub const SERVERS_YAML: &str = r#"
name: demo
debug: true
servers:
  - host: a.example
    port: 80
  - host: b.example
    port: 81
  - host: c.example
    port: 82
"#;

    /// JSON template with a nested object.
    pub const DATABASE_JSON: &str = r#"{"database": {"host": "localhost", "port": 5432}}"#;
}

/// A temporary directory plus an `env2conf` command that runs inside it
/// with a clean environment.
pub struct TestFixture {
    pub temp: TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    /// Absolute path of `name` inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp.child(name).path().to_path_buf()
    }

    /// Write `content` to `name` and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let child = self.temp.child(name);
        child.write_str(content).unwrap();
        child.path().to_path_buf()
    }

    /// Contents of the file `name`.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).unwrap()
    }

    /// The binary with an empty environment apart from `PATH`.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("env2conf");
        cmd.current_dir(self.temp.path()).env_clear();
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd
    }
}
