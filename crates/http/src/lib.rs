//! Typed client for the newsroom REST API.
//!
//! Every response is wrapped in a `{status, message, data|errors}` envelope;
//! the client unwraps it, surfaces server-reported failures as
//! [`ClientError::Api`], and applies rolling token refreshes carried in
//! response headers to the injected session store.

pub mod client;
pub mod session;
pub mod types;

pub use client::error::ClientError;
pub use client::posts::PostQuery;
pub use client::{NewsroomClient, NewsroomClientBuilder};
pub use session::{MemoryBackend, Session, SessionBackend, SessionStore};
pub use types::{
    ApiEnvelope, CreatePostRequest, LoginData, LoginRequest, Pagination, Post, PostRecord,
    PostsPage, UpdatePostRequest,
};
