use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::AnimationRequest;
use crate::platform::{PlayState, TimelineAnimation};

/// Owned timeline state machine standing in for a platform animation.
///
/// Local time only moves on [`advance`](TimelineAnimation::advance), scaled by
/// the playback rate. A new animation stays `Pending` with an unresolved
/// current time until its first frame or an explicit seek.
#[derive(Debug)]
pub struct KeyframeAnimation {
    request: AnimationRequest,
    playback_rate: f64,
    current_time_ms: Option<f64>,
    play_state: PlayState,
    live_counter: Option<Rc<Cell<usize>>>,
}

impl KeyframeAnimation {
    #[must_use]
    pub fn new(request: AnimationRequest) -> Self {
        Self {
            request,
            playback_rate: 1.0,
            current_time_ms: None,
            play_state: PlayState::Pending,
            live_counter: None,
        }
    }

    /// Ties the animation to a host-wide count of uncancelled animations.
    pub(crate) fn with_live_counter(mut self, counter: Rc<Cell<usize>>) -> Self {
        counter.set(counter.get() + 1);
        self.live_counter = Some(counter);
        self
    }

    #[must_use]
    pub fn request(&self) -> AnimationRequest {
        self.request
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.request.duration_ms
    }

    #[must_use]
    pub fn current_time_ms(&self) -> Option<f64> {
        self.current_time_ms
    }

    /// Current translation in percent of the track width.
    #[must_use]
    pub fn offset_percent(&self) -> Option<f64> {
        self.progress()
            .map(|progress| self.request.keyframes.offset_at(progress))
    }

    fn release_live_slot(&mut self) {
        if let Some(counter) = self.live_counter.take() {
            counter.set(counter.get().saturating_sub(1));
        }
    }
}

impl TimelineAnimation for KeyframeAnimation {
    fn play(&mut self) {
        self.play_state = match self.play_state {
            PlayState::Idle => {
                self.current_time_ms = None;
                PlayState::Pending
            }
            PlayState::Paused if self.current_time_ms.is_some() => PlayState::Running,
            PlayState::Paused => PlayState::Pending,
            state => state,
        };
    }

    fn pause(&mut self) {
        if self.play_state == PlayState::Idle {
            self.current_time_ms = Some(0.0);
        }
        self.play_state = PlayState::Paused;
    }

    fn cancel(&mut self) {
        self.play_state = PlayState::Idle;
        self.current_time_ms = None;
        self.release_live_slot();
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
    }

    fn seek(&mut self, time_ms: f64) {
        if !time_ms.is_finite() {
            return;
        }
        self.current_time_ms = Some(time_ms);
        if self.play_state == PlayState::Idle {
            self.play_state = PlayState::Paused;
        }
    }

    fn progress(&self) -> Option<f64> {
        if self.play_state == PlayState::Idle {
            return None;
        }
        let current = self.current_time_ms?;
        let duration = self.request.duration_ms;
        if !duration.is_finite() || duration <= 0.0 {
            return None;
        }
        Some(current.rem_euclid(duration) / duration)
    }

    fn play_state(&self) -> PlayState {
        self.play_state
    }

    fn advance(&mut self, elapsed: Duration) {
        match self.play_state {
            PlayState::Pending => {
                if self.current_time_ms.is_none() {
                    self.current_time_ms = Some(0.0);
                }
                self.play_state = PlayState::Running;
            }
            PlayState::Running => {
                let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
                let current = self.current_time_ms.unwrap_or(0.0);
                self.current_time_ms = Some(current + elapsed_ms * self.playback_rate);
            }
            PlayState::Paused | PlayState::Idle => {}
        }
    }
}
