//! Client for the FedEx Package Movement Information web service
//!
//! This crate provides typed requests and replies for FedEx SOAP web
//! services. It uses the private `soap-client` crate for the HTTP round trip.
//!
//! ```rust,ignore
//! use fedex_api::{FedexClient, FedexConfig, FedexError};
//! use fedex_api::operations::PostalCodeInquiryRequest;
//!
//! let client = FedexClient::new(FedexConfig::from_env()?)?;
//!
//! match client.send(PostalCodeInquiryRequest::for_postal_code("38017", "US")) {
//!     Ok(reply) => println!("{:?}", reply.express_description),
//!     Err(FedexError::PostalCodeNotFound { message, .. }) => eprintln!("{}", message),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod notification;
pub mod operation;
pub mod operations;
pub mod reply;
pub mod service;
pub mod transport;
pub mod version;

mod xml;

pub use classify::{ErrorClassifier, ServiceErrorKind};
pub use client::FedexClient;
pub use config::FedexConfig;
pub use envelope::{RequestEnvelope, RequestOptions};
pub use error::{FedexError, Result};
pub use notification::{Notification, Severity};
pub use operation::FedexRequest;
pub use reply::{FedexReply, ReplyHeader};
pub use service::{Service, ServiceInfo};
pub use transport::SoapTransport;
pub use version::{VersionId, VersionInfo};
