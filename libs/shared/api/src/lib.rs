pub mod client;

pub use client::ConsoleApiClient;
