//! Security adapters for the token service port.

mod static_token;

pub use static_token::StaticTokenService;
