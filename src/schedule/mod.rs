// Playback engine: drives a token stream against a monotonic clock and
// reports position through callbacks. The host calls `on_frame` at its
// refresh cadence (~16.67 ms nominally); the engine tolerates arbitrary
// gaps via a bounded catch-up scan.

pub mod clock;
pub mod ramp;

pub use clock::{ManualClock, MonotonicClock, TimeSource};
pub use ramp::WpmRamp;

use log::{debug, trace};

use crate::config::CadenceConfig;
use crate::timing::{flow_adjusted_duration, token_duration_at_wpm, FlowState};
use crate::tokenize::token::Token;

/// Upper bound on tokens advanced within a single frame. Returning from a
/// long suspension resumes over several frames instead of stalling one.
pub const MAX_CATCHUP_TOKENS: usize = 10;

/// Host visibility signal. Hidden pauses playback; visible resumes it when
/// the pause was visibility-caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Read-only snapshot of scheduler state.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerState {
    pub current_index: usize,
    pub is_running: bool,
    pub is_ramping: bool,
    pub effective_wpm: f64,
    pub accumulated_ms: f64,
}

/// Aggregate frame-lateness telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterStats {
    pub samples: usize,
    pub mean_ms: f64,
    pub max_ms: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct JitterRecorder {
    samples: usize,
    total_ms: f64,
    max_ms: f64,
}

impl JitterRecorder {
    fn record(&mut self, lateness_ms: f64) {
        let lateness = lateness_ms.max(0.0);
        self.samples += 1;
        self.total_ms += lateness;
        if lateness > self.max_ms {
            self.max_ms = lateness;
        }
    }

    fn stats(&self) -> JitterStats {
        JitterStats {
            samples: self.samples,
            mean_ms: if self.samples == 0 {
                0.0
            } else {
                self.total_ms / self.samples as f64
            },
            max_ms: self.max_ms,
        }
    }
}

type TickCallback = Box<dyn FnMut(usize, &Token)>;
type CompleteCallback = Box<dyn FnMut()>;

/// Stateful playback engine over an immutable token stream.
pub struct Scheduler {
    tokens: Vec<Token>,
    config: CadenceConfig,
    flow: Option<FlowState>,
    time_source: Box<dyn TimeSource>,
    on_tick: Option<TickCallback>,
    on_complete: Option<CompleteCallback>,
    current_index: usize,
    running: bool,
    /// Monotonic ms at which elapsed time is zero for the current run.
    start_time: f64,
    /// Elapsed ms banked across pauses.
    accumulated_time: f64,
    wpm_ramp: Option<WpmRamp>,
    hidden: bool,
    paused_by_visibility: bool,
    completed: bool,
    frame_pending: bool,
    destroyed: bool,
    jitter: Option<JitterRecorder>,
}

impl Scheduler {
    /// Builds a scheduler over its own monotonic clock.
    pub fn new(tokens: Vec<Token>, config: CadenceConfig) -> Self {
        Scheduler::with_time_source(tokens, config, Box::new(MonotonicClock::new()))
    }

    /// Builds a scheduler over a caller-supplied clock (tests, embedders
    /// with their own time base).
    pub fn with_time_source(
        tokens: Vec<Token>,
        config: CadenceConfig,
        time_source: Box<dyn TimeSource>,
    ) -> Self {
        let config = config.clamped();
        let flow = config.enable_adaptive_pacing.then(|| FlowState::new(&config));
        Scheduler {
            tokens,
            config,
            flow,
            time_source,
            on_tick: None,
            on_complete: None,
            current_index: 0,
            running: false,
            start_time: 0.0,
            accumulated_time: 0.0,
            wpm_ramp: None,
            hidden: false,
            paused_by_visibility: false,
            completed: false,
            frame_pending: false,
            destroyed: false,
            jitter: None,
        }
    }

    pub fn set_on_tick(&mut self, callback: impl FnMut(usize, &Token) + 'static) {
        self.on_tick = Some(Box::new(callback));
    }

    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Starts or resumes playback. Idempotent; refuses while the host is
    /// hidden; an empty stream stays idle.
    pub fn start(&mut self) {
        if self.destroyed || self.running || self.tokens.is_empty() {
            return;
        }
        if self.hidden {
            debug!("start refused: host is hidden");
            return;
        }
        if self.completed || self.current_index >= self.tokens.len() {
            self.current_index = 0;
            self.accumulated_time = 0.0;
            self.completed = false;
        }
        self.start_time = self.time_source.now_ms() - self.accumulated_time;
        self.running = true;
        self.frame_pending = true;
        debug!("playback started at index {}", self.current_index);
    }

    /// Pauses playback, banking elapsed time. Idempotent.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.accumulated_time = self.time_source.now_ms() - self.start_time;
        self.running = false;
        self.frame_pending = false;
        debug!(
            "playback paused at index {} ({:.0} ms elapsed)",
            self.current_index, self.accumulated_time
        );
    }

    /// Pauses and rewinds to the beginning.
    pub fn stop(&mut self) {
        self.pause();
        self.current_index = 0;
        self.accumulated_time = 0.0;
        self.completed = false;
        debug!("playback stopped");
    }

    /// Jumps to a token, clamping out-of-range indices. Fires one tick at
    /// the landing index; playback continues if it was running.
    pub fn jump_to(&mut self, index: isize) {
        if self.tokens.is_empty() {
            return;
        }
        let clamped = index.clamp(0, self.tokens.len() as isize - 1) as usize;
        let was_running = self.running;
        if was_running {
            self.pause();
        }
        self.current_index = clamped;
        self.completed = false;
        let wpm = self.effective_wpm_at(self.time_source.now_ms());
        self.accumulated_time = self.cumulative_expected_time_to(clamped, wpm);
        self.fire_tick();
        if was_running {
            self.start();
        }
    }

    /// Applies a new configuration. A bare speed change during playback
    /// with smooth ramping on becomes a WPM ramp and does not pause;
    /// anything else replaces the config and recomputes banked time so the
    /// current position holds.
    pub fn update_config(&mut self, new_config: CadenceConfig) {
        let incoming = new_config.clamped();
        let wpm_changed = incoming.wpm != self.config.wpm;
        let only_wpm_changed = {
            let mut probe = incoming.clone();
            probe.wpm = self.config.wpm;
            probe == self.config
        };

        if only_wpm_changed && wpm_changed && incoming.enable_smooth_wpm_ramp && self.running {
            let now = self.time_source.now_ms();
            let from = self.effective_wpm_at(now);
            let target = incoming.wpm as f64;
            self.wpm_ramp = Some(WpmRamp::new(from, target, now, incoming.wpm_ramp_duration_ms));
            self.config = incoming;
            debug!("wpm ramp {:.0} -> {:.0}", from, target);
            return;
        }

        self.config = incoming;
        self.wpm_ramp = None;
        if self.config.enable_adaptive_pacing {
            if self.flow.is_none() {
                self.flow = Some(FlowState::new(&self.config));
            }
        } else {
            self.flow = None;
        }
        let wpm = self.config.wpm as f64;
        self.accumulated_time = self.cumulative_expected_time_to(self.current_index, wpm);
        if self.running {
            self.start_time = self.time_source.now_ms() - self.accumulated_time;
        }
    }

    /// Host frame callback. No-op unless playback is running.
    pub fn on_frame(&mut self) {
        if !self.running || !self.frame_pending {
            return;
        }
        let now = self.time_source.now_ms();
        let elapsed = now - self.start_time;
        if let Some(ramp) = &self.wpm_ramp {
            if ramp.finished(now) {
                self.wpm_ramp = None;
            }
        }
        let wpm = self.effective_wpm_at(now);

        let mut cumulative = self.cumulative_expected_time_to(self.current_index, wpm);
        let last_index = self.tokens.len() - 1;
        let mut caught_up = 0usize;
        while caught_up < MAX_CATCHUP_TOKENS && self.current_index < last_index {
            if let Some(flow) = self.flow.as_mut() {
                flow.update_momentum(&self.tokens[self.current_index], &self.config);
            }
            let duration = {
                let token = &self.tokens[self.current_index];
                let base = token_duration_at_wpm(token, &self.config, wpm, None);
                let adjusted = match &self.flow {
                    Some(flow) => flow_adjusted_duration(base, flow, &self.config, wpm),
                    None => base,
                };
                if let Some(flow) = self.flow.as_mut() {
                    flow.push_sample(adjusted, base);
                }
                adjusted
            };
            if elapsed < cumulative + duration {
                break;
            }
            self.current_index += 1;
            cumulative += duration;
            caught_up += 1;
        }
        if caught_up == MAX_CATCHUP_TOKENS {
            trace!("catch-up capped after {} tokens", MAX_CATCHUP_TOKENS);
        }
        if let Some(recorder) = self.jitter.as_mut() {
            recorder.record(elapsed - cumulative);
        }

        self.fire_tick();

        if self.current_index == last_index {
            let final_duration = {
                let token = &self.tokens[last_index];
                let base = token_duration_at_wpm(token, &self.config, wpm, None);
                match &self.flow {
                    Some(flow) => flow_adjusted_duration(base, flow, &self.config, wpm),
                    None => base,
                }
            };
            if elapsed >= cumulative + final_duration {
                self.running = false;
                self.frame_pending = false;
                self.completed = true;
                debug!("playback complete after {} tokens", self.tokens.len());
                if let Some(callback) = self.on_complete.as_mut() {
                    callback();
                }
            }
        }
    }

    /// Host visibility transitions: hidden pauses, visible resumes only a
    /// visibility-caused pause.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Hidden => {
                self.hidden = true;
                if self.running {
                    self.paused_by_visibility = true;
                    self.pause();
                    debug!("auto-paused: host hidden");
                }
            }
            Visibility::Visible => {
                self.hidden = false;
                if self.paused_by_visibility {
                    self.paused_by_visibility = false;
                    self.start();
                    debug!("auto-resumed: host visible");
                }
            }
        }
    }

    /// Current effective speed; fractional while a ramp is in flight.
    pub fn effective_wpm(&self) -> f64 {
        self.effective_wpm_at(self.time_source.now_ms())
    }

    pub fn is_ramping(&self) -> bool {
        matches!(&self.wpm_ramp, Some(ramp) if !ramp.finished(self.time_source.now_ms()))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn config(&self) -> &CadenceConfig {
        &self.config
    }

    pub fn state(&self) -> SchedulerState {
        let now = self.time_source.now_ms();
        SchedulerState {
            current_index: self.current_index,
            is_running: self.running,
            is_ramping: self.is_ramping(),
            effective_wpm: self.effective_wpm_at(now),
            accumulated_ms: if self.running {
                now - self.start_time
            } else {
                self.accumulated_time
            },
        }
    }

    /// Turns on frame-lateness recording.
    pub fn enable_jitter_telemetry(&mut self) {
        if self.jitter.is_none() {
            self.jitter = Some(JitterRecorder::default());
        }
    }

    pub fn jitter_stats(&self) -> Option<JitterStats> {
        self.jitter.as_ref().map(JitterRecorder::stats)
    }

    /// Pauses and drops callbacks. The scheduler stays inert afterwards.
    pub fn destroy(&mut self) {
        self.pause();
        self.destroyed = true;
        self.on_tick = None;
        self.on_complete = None;
        debug!("scheduler destroyed");
    }

    fn effective_wpm_at(&self, now_ms: f64) -> f64 {
        match &self.wpm_ramp {
            Some(ramp) if !ramp.finished(now_ms) => ramp.value_at(now_ms),
            _ => self.config.wpm as f64,
        }
    }

    /// Expected playback time for everything before `index`, priced with
    /// the current flow state.
    fn cumulative_expected_time_to(&self, index: usize, wpm: f64) -> f64 {
        let end = index.min(self.tokens.len());
        self.tokens[..end]
            .iter()
            .map(|token| {
                let base = token_duration_at_wpm(token, &self.config, wpm, None);
                match &self.flow {
                    Some(flow) => flow_adjusted_duration(base, flow, &self.config, wpm),
                    None => base,
                }
            })
            .sum()
    }

    fn fire_tick(&mut self) {
        if self.tokens.is_empty() {
            return;
        }
        let index = self.current_index.min(self.tokens.len() - 1);
        if let Some(callback) = self.on_tick.as_mut() {
            callback(index, &self.tokens[index]);
        }
    }
}
