use std::{default::Default, path::PathBuf};

/// Contains Config properties which will be used by the LauncherClient
#[derive(Clone, Debug)]
pub struct LauncherConfig {
    /// Name of the local project. Sent with every uploaded file and used to
    /// derive the search path of uploaded assets on the launcher host.
    pub project_name: String,
    /// Whether files may be copied over the network to the launcher at
    /// all. When disabled, `send_file` refuses without touching the
    /// connection.
    pub copy_files: bool,
    /// Project directory; relative launcher directories resolve against it
    pub project_dir: PathBuf,
    /// Directory containing the `LaunchScript` folder of the launcher
    /// service, used to start the launcher on this machine
    pub launcher_dir: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            project_name: String::from("Project"),
            copy_files: true,
            project_dir: PathBuf::from("."),
            launcher_dir: PathBuf::from("../VALauncher"),
        }
    }
}
