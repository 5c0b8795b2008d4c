//! Look up a postal code with the Package Movement Information Service
//!
//! Credentials are read from `FEDEX_*` environment variables (see
//! `FedexConfig::from_env`). Set `FEDEX_USE_TEST_SERVER=true` for the beta server
//! and `FEDEX_LOG_MODE=debug` to see the request lifecycle.
//!
//! Usage:
//!   cargo run -p fedex-api --example postal_code_inquiry -- <postal_code> <country_code> [--strict]
//!
//! Examples:
//!   cargo run -p fedex-api --example postal_code_inquiry -- 38017 US
//!   cargo run -p fedex-api --example postal_code_inquiry -- "K1A 0B1" CA --strict

use std::env;

use fedex_api::logging::init_logging_from_env;
use fedex_api::operations::PostalCodeInquiryRequest;
use fedex_api::{FedexClient, FedexConfig, FedexError};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <postal_code> <country_code> [--strict]", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = init_logging_from_env() {
        eprintln!("Warning: {}", e);
    }

    let strict = args.iter().skip(3).any(|a| a == "--strict");
    let request = PostalCodeInquiryRequest::for_postal_code(args[1].as_str(), args[2].as_str())
        .with_strict_format_detection(strict);

    let client = match FedexConfig::from_env().and_then(FedexClient::new) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match client.send(request) {
        Ok(reply) => {
            println!("✅ {} ({})", args[1], reply.header.highest_severity);
            if let Some(description) = reply.express_description {
                println!("  Location:      {}", description.location_id.unwrap_or_default());
                println!("  Service area:  {}", description.service_area.unwrap_or_default());
                println!("  State/Prov:    {}", description.state_or_province_code.unwrap_or_default());
            }
            for notification in reply.header.notifications {
                println!("  [{}] {}: {}", notification.severity, notification.code, notification.message);
            }
        }
        Err(FedexError::PostalCodeNotFound { message, .. }) => {
            println!("❓ Not found: {}", message);
        }
        Err(FedexError::InvalidPostalCodeFormat { message, .. }) => {
            println!("⚠️  Invalid format: {}", message);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
