//! Submission dispatcher: one validated request per user action.

use crate::api::{RawResponse, SubmissionRequest, Transport, decode_reply};
use crate::error::SubmitError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Busy indicator shared between the UI and the in-flight submission.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raises the flag until the returned guard is dropped.
    pub fn raise(&self) -> BusyGuard {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(self.0.clone())
    }
}

/// Lowers the busy flag on drop, whichever way the submission ends.
#[must_use = "the busy flag drops back to false as soon as the guard is dropped"]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Validates `request`, then issues exactly one POST to the mode's endpoint
/// while the busy flag is raised.
pub fn submit<T: Transport + ?Sized>(
    transport: &T,
    busy: &BusyFlag,
    request: &SubmissionRequest,
) -> Result<RawResponse, SubmitError> {
    request.validate()?;

    let _busy = busy.raise();
    let endpoint = request.endpoint();
    log::info!("Submitting {} request to {endpoint}", request.mode().tab_id());

    let result = request
        .payload()
        .and_then(|body| transport.post_json(endpoint, &body))
        .and_then(|reply| decode_reply(endpoint, reply));

    match result {
        Ok(raw) => {
            log::info!("{endpoint} answered with {} bytes", raw.text.len());
            Ok(raw)
        }
        Err(err) => {
            log::error!("API error: {err}");
            Err(err.into())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn submit_async(
    transport: &crate::api::fetch::FetchTransport,
    busy: &BusyFlag,
    request: &SubmissionRequest,
) -> Result<RawResponse, SubmitError> {
    request.validate()?;

    let _busy = busy.raise();
    let endpoint = request.endpoint();
    log::info!("Submitting {} request to {endpoint}", request.mode().tab_id());

    let body = match request.payload() {
        Ok(body) => body,
        Err(err) => {
            log::error!("API error: {err}");
            return Err(err.into());
        }
    };
    let result = match transport.post_json(endpoint, &body).await {
        Ok(reply) => decode_reply(endpoint, reply),
        Err(err) => Err(err),
    };

    result.map_err(|err| {
        log::error!("API error: {err}");
        err.into()
    })
}
