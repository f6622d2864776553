//! Transport trait.

use async_trait::async_trait;

use crate::error::Error;

/// One logical remote call.
///
/// Implementations carry the call over a single endpoint derived from the
/// service and method names. When `token` is present the call carries an
/// `Authorization: Bearer <token>` header; the token is call-scoped and is
/// never written into the payload. A rejected call resolves to an
/// [`Error`] unchanged; classification happens at the recovery layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        service: &str,
        method: &str,
        payload: &[u8],
        token: Option<&str>,
    ) -> Result<Vec<u8>, Error>;
}
