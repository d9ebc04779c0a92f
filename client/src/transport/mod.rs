mod tcp;

pub use inner::{Dialer, LauncherStream};
pub use tcp::TcpDialer;

mod inner {

    use std::{io, net::SocketAddr};

    /// A connected byte stream to the launcher service
    pub trait LauncherStream: Send {
        /// Offers `payload` to the transport and returns how many bytes it
        /// actually accepted, which may be fewer than offered
        fn send(&mut self, payload: &[u8]) -> io::Result<usize>;
        /// Blocks for one read into `buffer`. `Ok(0)` means the peer closed
        /// the stream
        fn receive(&mut self, buffer: &mut [u8]) -> io::Result<usize>;
        /// Closes both directions. Calling this on a closed stream is a no-op
        fn close(&mut self);
    }

    /// Opens launcher streams
    pub trait Dialer: Send {
        fn dial(&mut self, address: SocketAddr) -> io::Result<Box<dyn LauncherStream>>;
    }
}
