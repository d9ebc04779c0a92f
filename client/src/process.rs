use std::{
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
};

use log::{info, warn};

use vabridge_shared::RoleGate;

use crate::launcher::{config::LauncherConfig, error::LauncherError};

const LAUNCH_SCRIPT_DIR: &str = "LaunchScript";
const LAUNCH_SCRIPT: &str = "VirtualAcousticsStarterServer.py";

cfg_if! {
    if #[cfg(windows)] {
        const INTERPRETERS: &[&str] = &["python", "py"];
    } else {
        const INTERPRETERS: &[&str] = &["python3", "python"];
    }
}

/// Starts the launcher service script on the local machine, for setups
/// where launcher and renderer share a host
pub struct LauncherProcess {
    child: Child,
    interpreter: &'static str,
}

impl LauncherProcess {
    /// Location of the launcher script for `config`
    pub fn script_path(config: &LauncherConfig) -> PathBuf {
        let launcher_dir = if config.launcher_dir.is_relative() {
            config.project_dir.join(&config.launcher_dir)
        } else {
            config.launcher_dir.clone()
        };
        launcher_dir.join(LAUNCH_SCRIPT_DIR).join(LAUNCH_SCRIPT)
    }

    /// Spawns the launcher script with the first Python interpreter found
    pub fn start(config: &LauncherConfig, role: &dyn RoleGate) -> Result<Self, LauncherError> {
        if !role.is_authoritative() {
            return Err(LauncherError::NotAuthoritative);
        }

        let script = Self::script_path(config);
        if !script.is_file() {
            info!(
                "Unable to automatically start the launcher script, looked for {}. Nothing bad will happen without it.",
                script.display()
            );
            return Err(LauncherError::LauncherScriptNotFound {
                path: script.display().to_string(),
            });
        }

        let Some(interpreter) = INTERPRETERS.iter().copied().find(|name| interpreter_exists(name))
        else {
            warn!("Launcher cannot be started, no Python interpreter on PATH");
            return Err(LauncherError::NoPythonInterpreter {
                tried: INTERPRETERS.join(", "),
            });
        };

        let working_dir = script.parent().unwrap_or_else(|| Path::new("."));
        let child = Command::new(interpreter)
            .arg(LAUNCH_SCRIPT)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|error| LauncherError::SpawnFailed {
                interpreter: interpreter.to_string(),
                message: error.to_string(),
            })?;

        info!("Started launcher script with {} (pid {})", interpreter, child.id());
        Ok(Self { child, interpreter })
    }

    pub fn interpreter(&self) -> &str {
        self.interpreter
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Whether the script is still running
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }
}

fn interpreter_exists(name: &str) -> bool {
    Command::new(name)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
