use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Contents of `<stem>.provenance.json`.
#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    lib_version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    outputs: Vec<String>,
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, recording the git
/// revision, library version, callsite, and run parameters.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: &Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let loc = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        lib_version: closest_pair::VERSION,
        callsite: Callsite {
            file: loc.file(),
            line: loc.line(),
        },
        params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance_written");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "result".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Revision from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/pairs.json"));
        assert_eq!(derived, Path::new("/tmp/out/pairs.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("result.json");
        fs::write(&artifact, "{}").unwrap();
        let params = json!({"algo": "dc", "count": 6});
        let path = write_sidecar(&artifact, &params).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["algo"], "dc");
        assert_eq!(parsed["lib_version"], closest_pair::VERSION);
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }
}
