//! Scripted service implementation for driving the watcher in tests.

use crate::service::SniService;
use async_trait::async_trait;
use sni_watch_core::{Device, MemoryReadSpec, Result};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// One scripted reply, consumed in order. `Hang` parks the caller
/// forever, which pins the watcher at a known point so a test can
/// time out and inspect the call log. An exhausted script hangs too.
#[derive(Debug)]
pub(crate) enum Step {
    Devices(Result<Vec<Device>>),
    Memory(Result<Vec<u8>>),
    Directory(Result<Vec<String>>),
    Hang,
}

/// Which call the watcher made, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    ListDevices,
    ReadMemory,
    ReadDirectory,
}

pub(crate) struct ScriptedService {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<(Call, Instant)>>,
}

impl ScriptedService {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls made so far, in order.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().iter().map(|(c, _)| *c).collect()
    }

    /// Calls made so far with the (paused-clock) instant of each.
    pub(crate) fn timeline(&self) -> Vec<(Call, Instant)> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: Call) -> Step {
        self.calls.lock().unwrap().push((call, Instant::now()));
        self.steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Step::Hang)
    }
}

#[async_trait]
impl SniService for ScriptedService {
    async fn list_devices(&self, _deadline: Duration) -> Result<Vec<Device>> {
        match self.next(Call::ListDevices) {
            Step::Devices(reply) => reply,
            Step::Hang => std::future::pending().await,
            other => panic!("script expected a Devices step, found {:?}", other),
        }
    }

    async fn read_memory(
        &self,
        _uri: &str,
        _spec: &MemoryReadSpec,
        _deadline: Duration,
    ) -> Result<Vec<u8>> {
        match self.next(Call::ReadMemory) {
            Step::Memory(reply) => reply,
            Step::Hang => std::future::pending().await,
            other => panic!("script expected a Memory step, found {:?}", other),
        }
    }

    async fn read_directory(
        &self,
        _uri: &str,
        _path: &str,
        _deadline: Duration,
    ) -> Result<Vec<String>> {
        match self.next(Call::ReadDirectory) {
            Step::Directory(reply) => reply,
            Step::Hang => std::future::pending().await,
            other => panic!("script expected a Directory step, found {:?}", other),
        }
    }
}
