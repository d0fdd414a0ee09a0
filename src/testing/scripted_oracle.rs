use crate::domain::{CaptionDraft, OracleError};
use crate::ports::{CaptionOracle, OracleRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Oracle replaying queued outcomes and recording every request.
///
/// Once the script runs out every call fails with `EmptyResponse`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    outcomes: Arc<Mutex<VecDeque<Result<CaptionDraft, OracleError>>>>,
    requests: Arc<Mutex<Vec<OracleRequest>>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, template: &str, captions: &[&str]) -> Self {
        let draft = CaptionDraft {
            template: template.to_string(),
            captions: captions.iter().map(|c| c.to_string()).collect(),
        };
        self.outcomes.lock().unwrap().push_back(Ok(draft));
        self
    }

    pub fn then_err(self, error: OracleError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<OracleRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CaptionOracle for ScriptedOracle {
    fn generate(&self, request: &OracleRequest) -> Result<CaptionDraft, OracleError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Err(OracleError::EmptyResponse))
    }
}
