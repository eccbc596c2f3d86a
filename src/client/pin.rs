//! Pin handle and its actions.
//!
//! Every action encodes one command, writes it in full and returns the
//! same handle, so calls can be chained:
//!
//! ```no_run
//! # async fn example(server: &remoteio::RemoteServer) -> remoteio::Result<()> {
//! server.pin(8).on_for(2000).await?.blink().await?.off().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is read back from the server. A returned `Ok` only means the
//! bytes were handed to the OS.

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::error::Result;
use crate::identifiers::{Numbering, PinNumber};
use crate::protocol::{Action, Command};
use crate::transport::Connection;

// ============================================================================
// RemotePin
// ============================================================================

/// A pin on the remote server.
///
/// Shares the stream of the [`RemoteServer`](crate::RemoteServer) it came
/// from and never closes it. Cloning yields another handle to the same pin.
#[derive(Debug, Clone)]
pub struct RemotePin {
    /// Shared stream.
    connection: Connection,
    /// Target pin.
    pin_number: PinNumber,
    /// Numbering scheme, sent verbatim.
    numbering: Numbering,
}

impl RemotePin {
    pub(crate) fn new(connection: Connection, pin_number: PinNumber, numbering: Numbering) -> Self {
        Self {
            connection,
            pin_number,
            numbering,
        }
    }

    /// Switches the pin on until told otherwise.
    ///
    /// Sends `<numbering> <pin> on 0`.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionClosed`](crate::Error::ConnectionClosed) after close
    /// - [`Error::Transport`](crate::Error::Transport) if the write fails
    pub async fn on(&self) -> Result<&Self> {
        self.send(self.command(Action::On)).await
    }

    /// Switches the pin on and asks the server to switch it off after `time_ms`.
    ///
    /// Sends `<numbering> <pin> on <time_ms>`. The timing is done by the
    /// server; the client schedules nothing.
    ///
    /// # Errors
    ///
    /// Same as [`RemotePin::on`].
    pub async fn on_for(&self, time_ms: u64) -> Result<&Self> {
        self.send(Command::on_for(&self.numbering, self.pin_number, time_ms))
            .await
    }

    /// Blinks the pin. Sends `<numbering> <pin> blink 0`.
    ///
    /// # Errors
    ///
    /// Same as [`RemotePin::on`].
    pub async fn blink(&self) -> Result<&Self> {
        self.send(self.command(Action::Blink)).await
    }

    /// Pulses the pin. Sends `<numbering> <pin> pulse 0`.
    ///
    /// # Errors
    ///
    /// Same as [`RemotePin::on`].
    pub async fn pulse(&self) -> Result<&Self> {
        self.send(self.command(Action::Pulse)).await
    }

    /// Switches the pin off. Sends `<numbering> <pin> off 0`.
    ///
    /// # Errors
    ///
    /// Same as [`RemotePin::on`].
    pub async fn off(&self) -> Result<&Self> {
        self.send(self.command(Action::Off)).await
    }

    /// Returns the command `action` would send, without sending it.
    #[inline]
    #[must_use]
    pub fn command(&self, action: Action) -> Command<'_> {
        Command::new(&self.numbering, self.pin_number, action)
    }

    /// Returns the target pin.
    #[inline]
    #[must_use]
    pub fn pin_number(&self) -> PinNumber {
        self.pin_number
    }

    /// Returns the numbering scheme.
    #[inline]
    #[must_use]
    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    /// Returns `true` once the owning server was closed.
    pub async fn is_closed(&self) -> bool {
        self.connection.is_closed().await
    }

    async fn send(&self, command: Command<'_>) -> Result<&Self> {
        debug!(
            pin = %self.pin_number,
            numbering = %self.numbering,
            action = %command.action(),
            time_ms = command.time_ms(),
            "Pin action"
        );
        self.connection.send(&command).await?;
        Ok(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;
    use tokio_test::{assert_err, assert_ok};

    use crate::error::Error;
    use crate::RemoteServer;

    use super::*;

    async fn pair() -> (RemoteServer, tokio::net::TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind should succeed");
        let port = listener.local_addr().expect("local addr").port();

        let server = RemoteServer::connect("127.0.0.1", port)
            .await
            .expect("connect should succeed");
        let (peer, _) = listener.accept().await.expect("accept");
        (server, peer)
    }

    #[tokio::test]
    async fn test_each_action_wire_bytes() {
        let (server, mut peer) = pair().await;
        let pin = server.pin_with(5, "h");

        assert_ok!(pin.on().await);
        assert_ok!(pin.on_for(750).await);
        assert_ok!(pin.blink().await);
        assert_ok!(pin.pulse().await);
        assert_ok!(pin.off().await);
        server.close().await.expect("close should succeed");

        let mut received = String::new();
        peer.read_to_string(&mut received).await.expect("read");
        assert_eq!(
            received,
            "h 5 on 0h 5 on 750h 5 blink 0h 5 pulse 0h 5 off 0"
        );
    }

    #[tokio::test]
    async fn test_chaining_keeps_identity() {
        let (server, _peer) = pair().await;
        let pin = server.pin(8);

        let same = pin
            .on_for(10)
            .await
            .expect("on")
            .pulse()
            .await
            .expect("pulse");

        assert_eq!(same.pin_number(), PinNumber::new(8));
        assert_eq!(same.numbering().as_str(), "b");
        assert!(std::ptr::eq(same, &pin));
        assert_eq!(pin.command(Action::Pulse).encode(), "b 8 pulse 0");

        server.close().await.expect("close should succeed");
    }

    #[tokio::test]
    async fn test_action_after_close_fails() {
        let (server, _peer) = pair().await;
        let pin = server.pin(2);
        server.close().await.expect("close should succeed");

        assert!(pin.is_closed().await);
        let err = assert_err!(pin.off().await);
        assert!(err.is_transport_error());
        assert!(matches!(err, Error::ConnectionClosed));
    }
}
