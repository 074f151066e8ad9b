#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cambio::{
    BotConfig, CambioError, StreamFactory, StreamHandle, Timeframe, VenueStream,
};

/// Everything the factory and its channels record, shared with the test.
#[derive(Default)]
pub struct SharedEvents {
    /// "create" / "init" / "start" entries in call order.
    pub calls: Mutex<Vec<&'static str>>,
    pub starts: AtomicUsize,
    /// Arguments the coordinator passed to `init`.
    pub init_args: Mutex<Option<(Vec<Timeframe>, Vec<String>)>>,
}

impl SharedEvents {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn init_args(&self) -> Option<(Vec<Timeframe>, Vec<String>)> {
        self.init_args.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Factory that records every interaction with the channels it builds.
pub struct RecordingFactory {
    pub venue: &'static str,
    pub events: Arc<SharedEvents>,
    /// When set, `start` fails with this message.
    pub fail_start: Option<&'static str>,
}

impl RecordingFactory {
    pub fn new(venue: &'static str, events: Arc<SharedEvents>) -> Arc<Self> {
        Arc::new(Self {
            venue,
            events,
            fail_start: None,
        })
    }

    pub fn failing(
        venue: &'static str,
        events: Arc<SharedEvents>,
        msg: &'static str,
    ) -> Arc<Self> {
        Arc::new(Self {
            venue,
            events,
            fail_start: Some(msg),
        })
    }
}

impl StreamFactory for RecordingFactory {
    fn venue(&self) -> &'static str {
        self.venue
    }

    fn create(&self, _config: &BotConfig) -> Box<dyn VenueStream> {
        self.events.record("create");
        Box::new(RecordingStream {
            venue: self.venue,
            events: self.events.clone(),
            fail_start: self.fail_start,
            initialized: false,
        })
    }
}

pub struct RecordingStream {
    venue: &'static str,
    events: Arc<SharedEvents>,
    fail_start: Option<&'static str>,
    initialized: bool,
}

#[async_trait]
impl VenueStream for RecordingStream {
    fn venue(&self) -> &'static str {
        self.venue
    }

    fn init(&mut self, timeframes: &[Timeframe], pairs: &[String]) -> Result<(), CambioError> {
        self.events.record("init");
        *self.events.init_args.lock().unwrap() = Some((timeframes.to_vec(), pairs.to_vec()));
        self.initialized = true;
        Ok(())
    }

    async fn start(&mut self) -> Result<StreamHandle, CambioError> {
        self.events.record("start");
        if !self.initialized {
            return Err(CambioError::venue(self.venue, "started before init"));
        }
        if let Some(msg) = self.fail_start {
            return Err(CambioError::venue(self.venue, msg));
        }
        self.events.starts.fetch_add(1, Ordering::SeqCst);

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        let task = tokio::spawn(async move {
            let _ = stop_rx.await;
        });
        Ok(StreamHandle::new(task, stop_tx))
    }
}
