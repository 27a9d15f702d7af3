// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — Driver Script
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bash script that runs every hPIC job of a dataset in table order.
//!
//! Blocks are accumulated in memory and the file is only written by
//! [`DriverScript::write`], so a batch that fails part-way leaves no script
//! behind.

use hpic_types::error::{HpicError, HpicResult};
use std::path::{Component, Path};

pub const SCRIPT_HEADER: &str = "#!/usr/bin/env bash\n\
\n\
# Generated by configure-simulations\n\
\n\
# Runs one hPIC simulation per row of data from SOLPS output\n\
# i.e one simulation per position from the strike point\n\
\n\
# Assumes compiled 1d3v hpic binary is in PATH\n\n\n";

/// `run-hpic-<label>.sh`
pub fn script_file_name(data_set_label: &str) -> String {
    format!("run-hpic-{data_set_label}.sh")
}

/// `cd` target that undoes a `cd` into `job_dir`: one `..` per component.
pub fn return_path(job_dir: &Path) -> HpicResult<String> {
    let mut parts = Vec::new();
    for component in job_dir.components() {
        match component {
            Component::Normal(_) => parts.push(".."),
            Component::CurDir => {}
            _ => {
                return Err(HpicError::ConfigError(format!(
                    "job directory must be a plain relative path, got {}",
                    job_dir.display()
                )))
            }
        }
    }
    if parts.is_empty() {
        return Err(HpicError::ConfigError(
            "job directory must not be empty".into(),
        ));
    }
    Ok(parts.join("/"))
}

#[derive(Debug, Clone, Default)]
pub struct DriverScript {
    blocks: Vec<String>,
}

impl DriverScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one job: comment, `cd` in, run the solver, `cd` back out.
    pub fn push_job(
        &mut self,
        simulation_id: &str,
        job_dir: &Path,
        solver: &str,
        args: &str,
    ) -> HpicResult<()> {
        let back = return_path(job_dir)?;
        self.blocks.push(format!(
            "# Run the simulation for {simulation_id}\n\
             cd {dir}\n\
             {solver} -command_line {args}\n\
             cd {back}\n\n",
            dir = job_dir.display(),
        ));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::from(SCRIPT_HEADER);
        for block in &self.blocks {
            out.push_str(block);
        }
        out
    }

    /// Write the script (creating its directory) and mark it executable.
    pub fn write(&self, path: &Path) -> HpicResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| HpicError::Filesystem {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        std::fs::write(path, self.render()).map_err(|source| HpicError::Filesystem {
            path: path.to_path_buf(),
            source,
        })?;
        make_executable(path)
    }
}

/// `chmod +x`
#[cfg(unix)]
pub fn make_executable(path: &Path) -> HpicResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let fs_err = |source: std::io::Error| HpicError::Filesystem {
        path: path.to_path_buf(),
        source,
    };
    let mut perms = std::fs::metadata(path).map_err(fs_err)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    std::fs::set_permissions(path, perms).map_err(fs_err)
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> HpicResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_return_path_depth() {
        let dir = PathBuf::from("hpic_results/case_a/plus_0.100m_separation");
        assert_eq!(return_path(&dir).unwrap(), "../../..");
        assert_eq!(return_path(Path::new("./a/b")).unwrap(), "../..");
    }

    #[test]
    fn test_return_path_rejects_absolute_and_parent() {
        assert!(return_path(Path::new("/tmp/x")).is_err());
        assert!(return_path(Path::new("../x")).is_err());
        assert!(return_path(Path::new("")).is_err());
    }

    #[test]
    fn test_block_bytes() {
        let mut script = DriverScript::new();
        script
            .push_job(
                "minus_0.050m_separation",
                Path::new("hpic_results/case/minus_0.050m_separation"),
                "hpic",
                "minus_0.050m_separation 50 1",
            )
            .unwrap();
        let text = script.render();
        assert!(text.starts_with(SCRIPT_HEADER));
        assert_eq!(
            &text[SCRIPT_HEADER.len()..],
            "# Run the simulation for minus_0.050m_separation\n\
             cd hpic_results/case/minus_0.050m_separation\n\
             hpic -command_line minus_0.050m_separation 50 1\n\
             cd ../../..\n\n"
        );
    }

    #[test]
    fn test_header_text() {
        assert!(SCRIPT_HEADER.starts_with("#!/usr/bin/env bash\n\n# Generated by"));
        assert!(SCRIPT_HEADER.ends_with("in PATH\n\n\n"));
    }

    #[test]
    fn test_script_file_name() {
        assert_eq!(script_file_name("run42"), "run-hpic-run42.sh");
    }
}
