//! Common test utilities for cprojecthub tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty temporary workspace
pub fn create_workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Writes a `.cproject` file into `dir` (relative to `root`), creating parents
pub fn write_project(root: &Path, dir: &str, content: &str) -> PathBuf {
    let project_dir = root.join(dir);
    std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
    let path = project_dir.join(".cproject");
    std::fs::write(&path, content).expect("Failed to write .cproject");
    path
}

/// A minimal CDT project file
pub fn cproject(name: &str, command: &str, arguments: Option<&str>, target: Option<&str>) -> String {
    let mut builder = format!(r#"command="{}""#, command);
    if let Some(arguments) = arguments {
        builder.push_str(&format!(r#" arguments="{}""#, arguments));
    }
    if let Some(target) = target {
        builder.push_str(&format!(r#" incrementalBuildTarget="{}""#, target));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<cproject storage_type_id="org.eclipse.cdt.core.XmlProjectDescriptionStorage">
  <storageModule moduleId="org.eclipse.cdt.core.settings"/>
  <storageModule moduleId="cdtBuildSystem" version="4.0.0">
    <project id="{name}.cdt.managedbuild.target.gnu.exe" name="{name}"/>
    <configuration>
      <folderInfo id="root">
        <toolChain id="gnu">
          <builder id="gnu.builder" {builder}/>
        </toolChain>
      </folderInfo>
    </configuration>
  </storageModule>
</cproject>
"#
    )
}

/// The `Foo` project: `make -j4`, no explicit target
pub fn foo_project() -> String {
    cproject("Foo", "make", Some("-j4"), None)
}

/// Project file without a builder command
pub const NO_COMMAND_PROJECT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<cproject>
  <storageModule moduleId="cdtBuildSystem" version="4.0.0">
    <project name="Orphan"/>
  </storageModule>
</cproject>
"#;

/// Project file that is not well-formed XML
pub const MALFORMED_PROJECT: &str = "<cproject><storageModule moduleId=\"cdtBuildSystem\">";
