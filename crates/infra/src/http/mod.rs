//! HTTP transport shared by the authentication and API layers

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
