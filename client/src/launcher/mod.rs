pub mod config;
pub mod error;

use std::net::{IpAddr, SocketAddr};

use log::{debug, info, warn};

use vabridge_shared::{
    decode_text, encode_text, is_ack, FileMetadata, ReproductionMode, RoleGate, StatusCode,
};

use crate::{
    connection::connection::Connection,
    files::ProjectFiles,
    launcher::{config::LauncherConfig, error::LauncherError},
    search_paths::SearchPaths,
    transfer::{
        error::FileTransferError, FileTransferSession, TransferCompletion,
    },
    transport::Dialer,
};

/// Upper bound for the launch status read; a valid answer is one byte
pub const STATUS_BUFFER_SIZE: usize = 16;

/// Talks to the remote launcher service which starts the audio server:
/// connect, upload a renderer configuration, negotiate the reproduction
/// mode, request a server version, and finally release the connection
/// (which makes the launcher stop the server again).
///
/// Every operation except [`LauncherClient::is_connected`] is reserved for
/// the cluster master and checks the role gate on each call.
pub struct LauncherClient {
    config: LauncherConfig,
    role: Box<dyn RoleGate>,
    dialer: Box<dyn Dialer>,
    files: Box<dyn ProjectFiles>,
    connection: Option<Connection>,
    // Set once a version was started over the current connection
    launched: bool,
    search_paths: SearchPaths,
}

impl LauncherClient {
    pub fn new<R, D, F>(config: LauncherConfig, role: R, dialer: D, files: F) -> Self
    where
        R: RoleGate + 'static,
        D: Dialer + 'static,
        F: ProjectFiles + 'static,
    {
        Self {
            config,
            role: Box::new(role),
            dialer: Box::new(dialer),
            files: Box::new(files),
            connection: None,
            launched: false,
            search_paths: SearchPaths::new(),
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    // Connection

    /// Opens the connection to the launcher at `host:port`. Succeeds
    /// without dialing if a connection is already open.
    pub fn connect(&mut self, host: &str, port: u16) -> Result<(), LauncherError> {
        self.check_authoritative()?;

        if self.connection.is_some() {
            return Ok(());
        }

        let ip: IpAddr = host.parse().map_err(|_| {
            warn!("Launcher host '{}' cannot be parsed", host);
            LauncherError::InvalidAddress {
                host: host.to_string(),
            }
        })?;
        let address = SocketAddr::new(ip, port);

        let stream = self.dialer.dial(address).map_err(|error| {
            warn!("Cannot connect to launcher at {}: {}", address, error);
            LauncherError::ConnectFailed {
                address,
                kind: error.kind(),
                message: error.to_string(),
            }
        })?;

        info!("Successfully connected to launcher at {}", address);
        self.connection = Some(Connection::new(address, stream));
        Ok(())
    }

    /// Starts server version `version_name` over the open connection. Each
    /// connection carries at most one launch.
    ///
    /// The optional renderer configuration file and the reproduction mode
    /// are sent first; if either is refused the launch still goes ahead
    /// with the launcher's defaults. Any status other than go closes the
    /// connection. On go the connection stays open until
    /// [`LauncherClient::release_connection`].
    pub fn start_remote(
        &mut self,
        version_name: &str,
        config_file: Option<&str>,
        reproduction_mode: ReproductionMode,
    ) -> Result<(), LauncherError> {
        self.check_authoritative()?;
        if self.connection.is_none() {
            return Err(LauncherError::NotConnected);
        }
        if self.launched {
            warn!("A server was already started over this connection, release it first");
            return Err(LauncherError::AlreadyLaunched);
        }

        if let Some(config_file) = config_file.filter(|file| !file.is_empty()) {
            if let Err(error) = self.send_file(config_file) {
                warn!(
                    "Renderer configuration '{}' could not be copied to the launcher, the server will run with default settings: {}",
                    config_file, error
                );
            }
        }

        if let Err(error) = self.negotiate_reproduction_mode(reproduction_mode) {
            warn!(
                "Reproduction mode '{}' could not be sent to the launcher, the server will run with default settings: {}",
                reproduction_mode, error
            );
        }

        let status = self.request_version(version_name)?;
        if !status.is_go() {
            warn!("Launching version '{}' failed: {}", version_name, status);
            self.drop_connection();
            return Err(LauncherError::LaunchRejected {
                version: version_name.to_string(),
                status,
            });
        }

        info!("Received go from launcher, audio server version '{}' started", version_name);
        self.launched = true;
        Ok(())
    }

    /// Connects and starts in one go. Returns success straight away when a
    /// connection is already open, since the server it launched is still
    /// running.
    pub fn remote_start(
        &mut self,
        host: &str,
        port: u16,
        version_name: &str,
        config_file: Option<&str>,
        reproduction_mode: ReproductionMode,
    ) -> Result<(), LauncherError> {
        self.check_authoritative()?;
        if self.connection.is_some() {
            return Ok(());
        }

        info!(
            "Trying to remotely start the audio server at {}:{} for version: {}",
            host, port, version_name
        );
        self.connect(host, port)?;
        self.start_remote(version_name, config_file, reproduction_mode)
    }

    /// Closes the launcher connection, which stops the launched server.
    /// Calling this without an open connection is a no-op.
    pub fn release_connection(&mut self) -> Result<(), LauncherError> {
        self.check_authoritative()?;
        self.drop_connection();
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn peer(&self) -> Option<SocketAddr> {
        self.connection.as_ref().map(Connection::peer)
    }

    // Files

    /// Sends one project file to the launcher.
    ///
    /// After a confirmed upload, the project's upload directory on the
    /// launcher host is registered as an asset search path.
    pub fn send_file(&mut self, relative_path: &str) -> Result<TransferCompletion, LauncherError> {
        self.check_authoritative()?;

        let Some(connection) = self.connection.as_mut() else {
            warn!("No connection to the launcher, so no files can be sent");
            return Err(LauncherError::NotConnected);
        };

        if !self.config.copy_files {
            info!("Sending files to the launcher is disabled, not sending {}", relative_path);
            return Err(LauncherError::CopyFilesDisabled {
                path: relative_path.to_string(),
            });
        }

        if !self.files.exists(relative_path) {
            warn!("File to send ({}) could not be found", relative_path);
            return Err(LauncherError::FileNotFound {
                path: relative_path.to_string(),
            });
        }

        let file = self
            .files
            .load(relative_path)
            .map_err(|error| LauncherError::FileUnreadable {
                path: relative_path.to_string(),
                message: error.to_string(),
            })?;

        let metadata = FileMetadata::new(
            relative_path,
            file.contents.len() as u64,
            self.config.project_name.as_str(),
            file.modified_unix,
        );

        let mut session = FileTransferSession::new(metadata, &file.contents)?;
        let completion = match session.run(connection) {
            Ok(completion) => completion,
            Err(error) => {
                // Rejections leave the peer usable, I/O failures do not
                if matches!(
                    error,
                    FileTransferError::Connection(_) | FileTransferError::NoReply { .. }
                ) {
                    warn!("Launcher connection lost while sending {}: {}", relative_path, error);
                    self.drop_connection();
                }
                return Err(error.into());
            }
        };

        if let TransferCompletion::Uploaded { .. } = completion {
            info!("File {} was received by the launcher", relative_path);
            let search_path = SearchPaths::for_project(&self.config.project_name);
            if self.search_paths.register(search_path.clone()) {
                debug!("Registered search path {}", search_path);
            }
        }

        Ok(completion)
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    pub fn search_paths_mut(&mut self) -> &mut SearchPaths {
        &mut self.search_paths
    }

    // Private

    fn check_authoritative(&self) -> Result<(), LauncherError> {
        if self.role.is_authoritative() {
            Ok(())
        } else {
            debug!("Launcher operation skipped, this node is not the master");
            Err(LauncherError::NotAuthoritative)
        }
    }

    fn negotiate_reproduction_mode(
        &mut self,
        reproduction_mode: ReproductionMode,
    ) -> Result<(), LauncherError> {
        let connection = self.connection.as_mut().ok_or(LauncherError::NotConnected)?;

        let exchange = connection
            .send_all(&reproduction_mode.command_bytes())
            .and_then(|()| connection.receive(STATUS_BUFFER_SIZE));
        let reply = match exchange {
            Ok(reply) => reply,
            Err(error) => {
                self.drop_connection();
                return Err(error.into());
            }
        };
        if !is_ack(&reply) {
            return Err(LauncherError::ReproductionModeRejected {
                mode: reproduction_mode,
                reply: decode_text(&reply),
            });
        }

        info!("Reproduction mode '{}' accepted by the launcher", reproduction_mode);
        Ok(())
    }

    // Any failure past the send closes the connection.
    fn request_version(&mut self, version_name: &str) -> Result<StatusCode, LauncherError> {
        let connection = self.connection.as_mut().ok_or(LauncherError::NotConnected)?;

        let request = encode_text(version_name);
        if let Err(error) = connection.send_all(&request) {
            self.drop_connection();
            return Err(error.into());
        }
        info!(
            "Sent {} bytes to the launcher with version name '{}', waiting for answer",
            request.len(),
            version_name
        );

        let reply = match connection.receive(STATUS_BUFFER_SIZE) {
            Ok(reply) => reply,
            Err(error) => {
                warn!("Error while receiving the launch status: {}", error);
                self.drop_connection();
                return Err(error.into());
            }
        };

        match reply.as_slice() {
            [status] => Ok(StatusCode::from_byte(*status)),
            _ => {
                warn!("Unexpected launch status reply: {:?}", reply);
                self.drop_connection();
                Err(LauncherError::ShortStatusReply { received: reply })
            }
        }
    }

    fn drop_connection(&mut self) {
        self.launched = false;
        if let Some(connection) = self.connection.take() {
            connection.close();
        }
    }
}
