/// Events emitted while the index engine walks a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    ScanStart { total_components: u64 },
    ComponentScanned,
    ScanFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Optional sink for [`Progress`] events; silent when no callback is set.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::ComponentScanned);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        reporter.report(Progress::ScanStart { total_components: 2 });
        reporter.report(Progress::ComponentScanned);
        reporter.report(Progress::ScanFinish);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Progress::ScanStart { total_components: 2 },
                Progress::ComponentScanned,
                Progress::ScanFinish,
            ]
        );
    }
}
