//! FedEx API operations organized by web service

pub mod package_movement;

pub use package_movement::{PostalCodeInquiryReply, PostalCodeInquiryRequest};
