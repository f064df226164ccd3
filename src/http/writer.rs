use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::mime::ContentKind;
use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Builds the response head: status line, content type and the blank
/// terminator line.
///
/// Lines are separated by a bare `\n`; existing clients depend on it.
///
/// ```
/// # use webserv::http::{mime::ContentKind, response::StatusCode, writer::build_header};
/// assert_eq!(
///     build_header(StatusCode::Ok, ContentKind::Html),
///     "HTTP/1.1 200 OK\nContent-Type: text/html;\n\n"
/// );
/// ```
pub fn build_header(status: StatusCode, content_kind: ContentKind) -> String {
    format!("{} {}\n{}\n\n", HTTP_VERSION, status, content_kind.header_line())
}

pub fn build_response(status: StatusCode, content_kind: ContentKind, body: &[u8]) -> Vec<u8> {
    let header = build_header(status, content_kind);

    let mut buf = Vec::with_capacity(header.len() + body.len());
    buf.extend_from_slice(header.as_bytes());
    buf.extend_from_slice(body);
    buf
}

fn serialize_response(resp: &Response) -> Vec<u8> {
    build_response(resp.status, resp.content_kind, &resp.body)
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes queued for the client, written or not.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
