//! HTTP protocol implementation.
//!
//! This module implements the minimal request/response cycle the server
//! speaks: one request line in, one response out, connection closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler driving the read-respond-close pipeline
//! - **`parser`**: Extracts the method and URI tokens from the raw request bytes
//! - **`request`**: Parsed request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`handler`**: Resolves a request against the document root and builds the response
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection Pipeline
//!
//! Each client connection moves through a linear state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of the request buffer
//!        └──────┬──────┘
//!               │ Request parsed (or rejected as 400)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve against the document root
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │    Closing       │ ← Shut down the socket (no keep-alive)
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod handler;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
