//! Museum collection access.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Our types: [`ObjectId`], [`Artwork`]
//! - **API DTOs** (`dto.rs`) - Exact API response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the Met collection API
//! - **Traits** (`traits.rs`) - [`CollectionApi`] seam for mocking
//!
//! # Usage
//!
//! ```ignore
//! use collection::CollectionClient;
//!
//! let client = CollectionClient::new()?;
//! let ids = client.object_ids().await?;
//! let art = client.object(ids[0]).await?;
//! println!("{:?} ({:?})", art.title, art.department);
//! ```

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod traits;

pub use client::{CollectionClient, DEFAULT_BASE_URL};
pub use domain::{Artwork, CollectionError, ObjectId};
pub use traits::CollectionApi;
