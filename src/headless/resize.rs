use crate::platform::ResizeObserver;

/// Resize observer double that only records what it was asked to watch.
///
/// Tests and non-DOM hosts change widths on the host and then call
/// `update_size` themselves.
#[derive(Debug)]
pub struct RecordingResizeObserver<N> {
    observed: Option<N>,
    observe_calls: usize,
    disconnect_calls: usize,
}

impl<N> Default for RecordingResizeObserver<N> {
    fn default() -> Self {
        Self {
            observed: None,
            observe_calls: 0,
            disconnect_calls: 0,
        }
    }
}

impl<N> RecordingResizeObserver<N> {
    #[must_use]
    pub fn observed(&self) -> Option<&N> {
        self.observed.as_ref()
    }

    #[must_use]
    pub fn observe_calls(&self) -> usize {
        self.observe_calls
    }

    #[must_use]
    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.observed.is_some()
    }
}

impl<N: Clone> ResizeObserver<N> for RecordingResizeObserver<N> {
    fn observe(&mut self, node: &N) {
        self.observed = Some(node.clone());
        self.observe_calls += 1;
    }

    fn disconnect(&mut self) {
        self.observed = None;
        self.disconnect_calls += 1;
    }
}
