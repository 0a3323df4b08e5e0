/*
[INPUT]:  API credentials and token lifecycle state
[OUTPUT]: HMAC signatures and bearer/refresh token storage
[POS]:    Auth layer - handles Deribit signature authentication
[UPDATE]: When the auth flow or signature methods change
*/

pub mod credential;
pub mod token;

pub use credential::{
    Credential, AUTH_DATA, AUTH_NONCE, AUTH_SCOPE, GRANT_TYPE_CLIENT_SIGNATURE,
};
pub use token::{TokenManager, TokenPair};
