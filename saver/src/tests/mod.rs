use crate::submit::{SaveEndpoint, SaveResponse, Sleeper};
use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::time::Duration;

pub mod submit_tests;

/// One scripted answer from the mock endpoint.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Status(u16),
    StatusWithLocation(u16, &'static str),
    TransportError(&'static str),
}

/// Scripted stand-in for the save endpoint: answers one scripted response per
/// call and repeats the last one once the script runs out. Counts its calls.
pub struct MockEndpoint {
    responses: RefCell<Vec<ScriptedResponse>>,
    pub calls: Cell<usize>,
}

impl MockEndpoint {
    pub fn with_script(script: Vec<ScriptedResponse>) -> Self {
        assert!(!script.is_empty(), "mock endpoint needs at least one response");
        MockEndpoint {
            responses: RefCell::new(script),
            calls: Cell::new(0),
        }
    }

    /// Endpoint that answers every call with the same status code.
    pub fn always(status: u16) -> Self {
        MockEndpoint::with_script(vec![ScriptedResponse::Status(status)])
    }
}

impl SaveEndpoint for MockEndpoint {
    fn save(&self, _url: &str) -> Result<SaveResponse> {
        self.calls.set(self.calls.get() + 1);

        let mut responses = self.responses.borrow_mut();
        let scripted = if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses[0].clone()
        };

        match scripted {
            ScriptedResponse::Status(status) => Ok(SaveResponse {
                status,
                archive_url: None,
            }),
            ScriptedResponse::StatusWithLocation(status, location) => Ok(SaveResponse {
                status,
                archive_url: Some(location.to_string()),
            }),
            ScriptedResponse::TransportError(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

/// Sleeper that records each requested sleep instead of blocking.
#[derive(Default)]
pub struct CountingSleeper {
    pub sleeps: Vec<Duration>,
}

impl Sleeper for CountingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
