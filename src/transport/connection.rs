//! TCP connection to the pin server.
//!
//! One stream is opened per [`RemoteServer`](crate::RemoteServer) and shared
//! by every pin handle created from it. Sends are fire-and-forget: the full
//! command is written and nothing is read back.
//!
//! # Sharing
//!
//! The stream sits behind a `tokio::sync::Mutex`, so two tasks sending
//! through the same connection never interleave the bytes of their commands.
//! The order in which such tasks reach the server is not defined.

// ============================================================================
// Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::protocol::Command;

// ============================================================================
// Types
// ============================================================================

/// Stream slot shared between clones. `None` once closed.
type SharedStream = Arc<Mutex<Option<TcpStream>>>;

// ============================================================================
// Connection
// ============================================================================

/// Shared TCP stream to a pin server.
///
/// Cloning is cheap and yields a handle to the same stream.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Open stream, taken out on close.
    stream: SharedStream,
    /// Resolved server address.
    peer: SocketAddr,
}

impl Connection {
    /// Resolves `host` and connects to `host:port`.
    ///
    /// Without `connect_timeout` the platform connect timeout applies.
    ///
    /// # Errors
    ///
    /// - [`Error::Connection`] if resolution or the TCP handshake fails
    /// - [`Error::ConnectionTimeout`] if `connect_timeout` elapses first
    pub async fn open(
        host: &str,
        port: u16,
        connect_timeout: Option<Duration>,
        nodelay: bool,
    ) -> Result<Self> {
        let connect = TcpStream::connect((host, port));

        let stream = match connect_timeout {
            Some(limit) => timeout(limit, connect)
                .await
                .map_err(|_| Error::connection_timeout(host, port, limit.as_millis() as u64))?,
            None => connect.await,
        }
        .map_err(|e| Error::connection(host, port, e))?;

        if nodelay {
            stream
                .set_nodelay(true)
                .map_err(|e| Error::connection(host, port, e))?;
        }

        let peer = stream
            .peer_addr()
            .map_err(|e| Error::connection(host, port, e))?;

        info!(host, port, %peer, "Connected to pin server");

        Ok(Self {
            stream: Arc::new(Mutex::new(Some(stream))),
            peer,
        })
    }

    /// Writes the encoded command to the stream.
    ///
    /// Returns once every byte has been handed to the OS.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionClosed`] if [`Connection::close`] already ran
    /// - [`Error::Transport`] if the write fails
    pub async fn send(&self, command: &Command<'_>) -> Result<()> {
        let encoded = command.encode();

        let mut guard = self.stream.lock().await;
        let stream = guard.as_mut().ok_or(Error::ConnectionClosed)?;

        if let Err(e) = stream.write_all(encoded.as_bytes()).await {
            warn!(peer = %self.peer, command = %encoded, error = %e, "Failed to send command");
            return Err(Error::transport(encoded, e));
        }

        trace!(peer = %self.peer, command = %encoded, "Command sent");
        Ok(())
    }

    /// Shuts the stream down and releases it.
    ///
    /// Every clone observes the close: later sends fail with
    /// [`Error::ConnectionClosed`]. Closing an already closed connection
    /// does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the graceful shutdown fails. The stream is
    /// released either way.
    pub async fn close(&self) -> Result<()> {
        let Some(mut stream) = self.stream.lock().await.take() else {
            debug!(peer = %self.peer, "Connection already closed");
            return Ok(());
        };

        stream.shutdown().await?;

        info!(peer = %self.peer, "Connection closed");
        Ok(())
    }

    /// Returns `true` once [`Connection::close`] has run.
    pub async fn is_closed(&self) -> bool {
        self.stream.lock().await.is_none()
    }

    /// Returns the resolved server address.
    #[inline]
    #[must_use]
    pub const fn peer_addr(&self) -> SocketAddr {
        self.peer
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    use crate::identifiers::{Numbering, PinNumber};
    use crate::protocol::Action;

    async fn listener() -> (TcpListener, u16) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind should succeed");
        let port = listener.local_addr().expect("local addr").port();
        (listener, port)
    }

    #[tokio::test]
    async fn test_send_writes_encoded_bytes() {
        let (listener, port) = listener().await;
        let connection = Connection::open("127.0.0.1", port, None, false)
            .await
            .expect("connect should succeed");
        let (mut peer, _) = listener.accept().await.expect("accept");

        let numbering = Numbering::default();
        let cmd = Command::new(&numbering, PinNumber::new(4), Action::Pulse);
        connection.send(&cmd).await.expect("send should succeed");
        connection.close().await.expect("close should succeed");

        let mut received = Vec::new();
        peer.read_to_end(&mut received).await.expect("read");
        assert_eq!(received, b"b 4 pulse 0");
    }

    #[tokio::test]
    async fn test_close_is_shared_between_clones() {
        let (_listener, port) = listener().await;
        let connection = Connection::open("127.0.0.1", port, None, true)
            .await
            .expect("connect should succeed");
        let clone = connection.clone();

        assert!(!clone.is_closed().await);
        connection.close().await.expect("close should succeed");
        assert!(clone.is_closed().await);

        let numbering = Numbering::default();
        let cmd = Command::new(&numbering, PinNumber::new(1), Action::Off);
        let err = clone.send(&cmd).await.expect_err("send after close");
        assert!(matches!(err, Error::ConnectionClosed));
    }

    #[tokio::test]
    async fn test_close_twice_is_noop() {
        let (_listener, port) = listener().await;
        let connection = Connection::open("127.0.0.1", port, None, false)
            .await
            .expect("connect should succeed");

        connection.close().await.expect("first close");
        connection.close().await.expect("second close");
    }

    #[tokio::test]
    async fn test_open_refused() {
        let (listener, port) = listener().await;
        drop(listener);

        let err = Connection::open("127.0.0.1", port, None, false)
            .await
            .expect_err("nothing is listening");
        assert!(err.is_connection_error());
        assert!(matches!(err, Error::Connection { port: p, .. } if p == port));
    }

    #[tokio::test]
    async fn test_peer_addr() {
        let (_listener, port) = listener().await;
        let connection = Connection::open("127.0.0.1", port, None, false)
            .await
            .expect("connect should succeed");

        assert_eq!(connection.peer_addr().port(), port);
        assert!(connection.peer_addr().ip().is_loopback());
    }
}
