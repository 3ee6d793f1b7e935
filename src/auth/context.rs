//! Per-call security context
//!
//! Each inbound call runs inside [`SecurityContext::scope`]; the
//! authentication stored during the call is dropped with the scope, on
//! every exit path including panics.

use crate::core::models::Authentication;
use crate::utils::error::{Result, SecurityError};
use std::cell::RefCell;
use std::future::Future;

tokio::task_local! {
    static CURRENT: RefCell<Option<Authentication>>;
}

/// Accessor for the authentication of the call being served
pub struct SecurityContext;

impl SecurityContext {
    /// Run `future` with a fresh, empty context
    pub async fn scope<F: Future>(future: F) -> F::Output {
        CURRENT.scope(RefCell::new(None), future).await
    }

    /// Whether the caller is inside a scope
    pub fn is_active() -> bool {
        CURRENT.try_with(|_| ()).is_ok()
    }

    /// Authentication of the current call, if any
    pub fn current() -> Option<Authentication> {
        CURRENT
            .try_with(|cell| cell.borrow().clone())
            .ok()
            .flatten()
    }

    /// Store the authentication for the rest of the scope
    pub fn set(authentication: Authentication) -> Result<()> {
        CURRENT
            .try_with(|cell| {
                cell.replace(Some(authentication));
            })
            .map_err(|_| SecurityError::internal("No security context scope is active"))
    }

    /// Forget the current authentication; a no-op outside a scope
    pub fn clear() {
        let _ = CURRENT.try_with(|cell| cell.replace(None));
    }
}
