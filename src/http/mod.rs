//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 static file server: one request per
//! connection, no keep-alive, no request bodies, and only the request line
//! is inspected.
//!
//! # Architecture
//!
//! - **`parser`**: Extracts method, target and content kind from the request line
//! - **`request`**: `Method` and `ParsedRequest`
//! - **`path`**: Confines a request target to the serving root
//! - **`mime`**: The three content kinds and their header lines
//! - **`response`**: The status catalog and `Response`
//! - **`writer`**: Serializes responses and writes them to the client
//! - **`error`**: Per-request error kinds and their responses
//! - **`connection`**: The per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!   Reading ─► Parsing ─► Resolving ─► Loading ─► Responding ─► Closed
//!      │          │           │           │            ▲
//!      └──────────┴───────────┴───────────┴────────────┘
//!                 error: respond 400 / 404 / 500
//! ```
//!
//! # Wire format
//!
//! Responses use bare `\n` line breaks:
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: text/html;
//!
//! <body>
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod path;
pub mod request;
pub mod response;
pub mod writer;
