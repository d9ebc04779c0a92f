use std::{
    io::{self, Read, Write},
    net::{Shutdown, SocketAddr, TcpStream},
    time::Duration,
};

use log::warn;

use super::{Dialer, LauncherStream};

/// Dials plain TCP connections to the launcher
#[derive(Clone, Debug, Default)]
pub struct TcpDialer {
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
}

impl TcpDialer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeouts(
        connect_timeout: Option<Duration>,
        read_timeout: Option<Duration>,
        write_timeout: Option<Duration>,
    ) -> Self {
        Self {
            connect_timeout,
            read_timeout,
            write_timeout,
        }
    }
}

impl Dialer for TcpDialer {
    fn dial(&mut self, address: SocketAddr) -> io::Result<Box<dyn LauncherStream>> {
        let stream = match self.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(&address, timeout)?,
            None => TcpStream::connect(address)?,
        };
        stream.set_read_timeout(self.read_timeout)?;
        stream.set_write_timeout(self.write_timeout)?;
        stream.set_nodelay(true)?;
        Ok(Box::new(stream))
    }
}

impl LauncherStream for TcpStream {
    fn send(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.write(payload)
    }

    fn receive(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.read(buffer)
    }

    fn close(&mut self) {
        if let Err(error) = self.shutdown(Shutdown::Both) {
            if error.kind() != io::ErrorKind::NotConnected {
                warn!("Error while closing launcher connection: {}", error);
            }
        }
    }
}
