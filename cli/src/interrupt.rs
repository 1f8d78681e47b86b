//! User interrupt (Ctrl-C) listener.
//!
//! The OS handler is installed when [`Interrupt::listen`] returns, not on
//! first poll, so an interrupt arriving while the banner is still printing is
//! queued instead of killing the process.

use std::io;

pub struct Interrupt {
    #[cfg(unix)]
    inner: tokio::signal::unix::Signal,
    #[cfg(windows)]
    inner: tokio::signal::windows::CtrlC,
}

impl Interrupt {
    pub fn listen() -> io::Result<Self> {
        #[cfg(unix)]
        let inner = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
        #[cfg(windows)]
        let inner = tokio::signal::windows::ctrl_c()?;

        Ok(Self { inner })
    }

    /// Resolves on the next interrupt; `None` once no more can be delivered.
    pub async fn recv(&mut self) -> Option<()> {
        self.inner.recv().await
    }
}
