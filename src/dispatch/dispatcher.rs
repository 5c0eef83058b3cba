use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, info};

use crate::job::JobDescriptor;

use super::{DispatchError, PipelineInvoker, Result};

/// At most one submission is in flight; a second `submit` fails fast.
pub struct Dispatcher {
    invoker: Arc<dyn PipelineInvoker>,
    in_flight: AtomicBool,
}

impl Dispatcher {
    pub fn new(invoker: Arc<dyn PipelineInvoker>) -> Self {
        Self {
            invoker,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, job: &JobDescriptor) -> Result<String> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DispatchError::JobInFlight);
        }
        let _guard = InFlightGuard {
            latch: &self.in_flight,
        };

        info!(
            "submitting generation job with {} input images",
            job.input_images.len()
        );
        let outcome = self.invoker.submit(job).await;
        match &outcome {
            Ok(payload) => info!("pipeline finished: {payload}"),
            Err(failure) => error!("pipeline failed: {failure}"),
        }
        outcome
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Dispatcher")
            .field("in_flight", &self.is_in_flight())
            .finish()
    }
}

struct InFlightGuard<'a> {
    latch: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.latch.store(false, Ordering::SeqCst);
    }
}
