//! Test chat client.
//!
//! Sends raw lines and asserts on received lines.

use std::io::ErrorKind;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// A test chat client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

#[allow(dead_code)]
impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let (read_half, write_half) = stream.into_split();

        Ok(Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        })
    }

    /// Send a line, appending `\n` if it has no terminator.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Send `login:<name>` and expect the greeting.
    pub async fn login(&mut self, name: &str) -> anyhow::Result<()> {
        self.send_raw(&format!("login:{name}\r\n")).await?;
        let greeting = self.recv().await?;
        anyhow::ensure!(
            greeting == format!("Hi, {name}!\n"),
            "unexpected greeting: {greeting:?}"
        );
        Ok(())
    }

    /// Receive one line, terminator included.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive one line with a timeout. Fails on EOF.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n > 0, "connection closed by server");
        Ok(line)
    }

    /// Receive exactly `count` lines.
    pub async fn recv_n(&mut self, count: usize) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            lines.push(self.recv().await?);
        }
        Ok(lines)
    }

    /// True if nothing arrives within `dur`.
    pub async fn is_silent(&mut self, dur: Duration) -> bool {
        let mut line = String::new();
        timeout(dur, self.reader.read_line(&mut line)).await.is_err()
    }

    /// Wait for the server to close the connection.
    ///
    /// A reset counts as closed: the server may hang up with our bytes unread.
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        match timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await? {
            Ok(0) => Ok(()),
            Ok(_) => anyhow::bail!("expected EOF, got {line:?}"),
            Err(e) if matches!(
                e.kind(),
                ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe
            ) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
