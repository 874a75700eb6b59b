// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Delivery of binary export payloads.
//!
//! Export operations return a stream of bytes. The request builders for these
//! operations hand the stream to an [ExportSink], which forwards it to a
//! callback, an [AsyncWrite] implementation, or a file. With none of these
//! configured the payload is buffered and returned as a string.

use crate::{Error, Result};
use bytes::Bytes;
use futures::StreamExt;
use std::path::PathBuf;
use std::pin::Pin;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// The raw payload of an export operation, as returned by the stub.
pub type ExportStream = gaxi::http::ByteStream;

/// The result of an export operation.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ExportOutput {
    /// The payload, when no callback, writer, or file was configured.
    Buffered(String),
    /// The payload was delivered to the configured destination.
    Delivered { bytes: u64 },
}

impl ExportOutput {
    /// Returns the buffered payload, if any.
    pub fn buffered(&self) -> Option<&str> {
        match self {
            Self::Buffered(s) => Some(s.as_str()),
            Self::Delivered { .. } => None,
        }
    }

    /// Consumes the output returning the buffered payload, if any.
    pub fn into_buffered(self) -> Option<String> {
        match self {
            Self::Buffered(s) => Some(s),
            Self::Delivered { .. } => None,
        }
    }

    /// The number of payload bytes received.
    pub fn len(&self) -> u64 {
        match self {
            Self::Buffered(s) => s.len() as u64,
            Self::Delivered { bytes } => *bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Callback = Box<dyn FnMut(Bytes) + Send>;
type Writer = Pin<Box<dyn AsyncWrite + Send>>;

/// Where an export operation delivers its payload.
#[derive(Default)]
pub(crate) struct ExportSink {
    callback: Option<Callback>,
    writer: Option<Writer>,
    file: Option<PathBuf>,
}

impl std::fmt::Debug for ExportSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportSink")
            .field("callback", &self.callback.is_some())
            .field("writer", &self.writer.is_some())
            .field("file", &self.file)
            .finish()
    }
}

impl ExportSink {
    pub(crate) fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(Bytes) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    pub(crate) fn set_writer<W>(&mut self, writer: W)
    where
        W: AsyncWrite + Send + 'static,
    {
        self.writer = Some(Box::pin(writer));
    }

    pub(crate) fn set_file<P: Into<PathBuf>>(&mut self, path: P) {
        self.file = Some(path.into());
    }

    /// Consumes `stream`, delivering each chunk to the configured destination.
    ///
    /// The callback takes precedence over the writer, and the writer over the
    /// file.
    pub(crate) async fn drain(self, mut stream: ExportStream) -> Result<ExportOutput> {
        if let Some(mut callback) = self.callback {
            let mut bytes = 0_u64;
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                bytes += chunk.len() as u64;
                callback(chunk);
            }
            return Ok(ExportOutput::Delivered { bytes });
        }
        if let Some(writer) = self.writer {
            return write_all(stream, writer).await;
        }
        if let Some(path) = self.file {
            tracing::debug!(path = %path.display(), "writing export payload");
            let file = tokio::fs::File::create(&path).await.map_err(Error::io)?;
            return write_all(stream, Box::pin(file)).await;
        }
        let mut buffer = Vec::new();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
        }
        let payload = String::from_utf8(buffer).map_err(Error::deser)?;
        Ok(ExportOutput::Buffered(payload))
    }
}

async fn write_all(mut stream: ExportStream, mut writer: Writer) -> Result<ExportOutput> {
    let mut bytes = 0_u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await.map_err(Error::io)?;
        bytes += chunk.len() as u64;
    }
    writer.flush().await.map_err(Error::io)?;
    writer.shutdown().await.map_err(Error::io)?;
    Ok(ExportOutput::Delivered { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type TestResult = anyhow::Result<()>;

    fn stream(chunks: &[&'static str]) -> ExportStream {
        let items: Vec<Result<Bytes>> = chunks
            .iter()
            .map(|c| Ok(Bytes::from_static(c.as_bytes())))
            .collect();
        Box::pin(futures::stream::iter(items))
    }

    #[tokio::test]
    async fn buffered() -> TestResult {
        let output = ExportSink::default()
            .drain(stream(&["a,b\n", "1,2\n"]))
            .await?;
        assert_eq!(output.buffered(), Some("a,b\n1,2\n"));
        assert_eq!(output.len(), 8);
        assert_eq!(output.into_buffered().as_deref(), Some("a,b\n1,2\n"));
        Ok(())
    }

    #[tokio::test]
    async fn buffered_empty() -> TestResult {
        let output = ExportSink::default().drain(stream(&[])).await?;
        assert!(output.is_empty(), "{output:?}");
        Ok(())
    }

    #[tokio::test]
    async fn buffered_invalid_utf8() {
        let items: Vec<Result<Bytes>> = vec![Ok(Bytes::from_static(&[0xff, 0xfe]))];
        let err = ExportSink::default()
            .drain(Box::pin(futures::stream::iter(items)))
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[tokio::test]
    async fn callback_wins() -> TestResult {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let mut export = ExportSink::default();
        export.set_callback(move |b: Bytes| sink.lock().unwrap().push(b));
        export.set_writer(tokio::io::sink());
        let output = export.drain(stream(&["abc", "de"])).await?;
        assert_eq!(output, ExportOutput::Delivered { bytes: 5 });
        let received = received.lock().unwrap();
        assert_eq!(received.as_slice(), &[Bytes::from("abc"), Bytes::from("de")]);
        Ok(())
    }

    #[tokio::test]
    async fn writer() -> TestResult {
        let (client, mut server) = tokio::io::duplex(64);
        let mut export = ExportSink::default();
        export.set_writer(client);
        let output = export.drain(stream(&["hello ", "world"])).await?;
        assert_eq!(output, ExportOutput::Delivered { bytes: 11 });
        let mut got = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut server, &mut got).await?;
        assert_eq!(got, "hello world");
        Ok(())
    }

    #[tokio::test]
    async fn file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("export.csv");
        let mut export = ExportSink::default();
        export.set_file(&path);
        let output = export.drain(stream(&["x,y\n"])).await?;
        assert_eq!(output, ExportOutput::Delivered { bytes: 4 });
        assert_eq!(std::fs::read_to_string(&path)?, "x,y\n");
        Ok(())
    }

    #[tokio::test]
    async fn file_cannot_create() {
        let mut export = ExportSink::default();
        export.set_file("/does/not/exist/export.csv");
        let err = export.drain(stream(&["x"])).await.unwrap_err();
        assert!(err.is_io(), "{err:?}");
    }

    #[tokio::test]
    async fn stream_error() {
        let items: Vec<Result<Bytes>> = vec![
            Ok(Bytes::from_static(b"abc")),
            Err(Error::io("connection reset")),
        ];
        let err = ExportSink::default()
            .drain(Box::pin(futures::stream::iter(items)))
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
    }

    #[test]
    fn debug() {
        let mut export = ExportSink::default();
        export.set_file("out.json");
        let got = format!("{export:?}");
        assert!(got.contains("out.json"), "{got}");
        assert!(got.contains("callback: false"), "{got}");
    }
}
