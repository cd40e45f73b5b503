//! Scripted demo walkthrough.
//!
//! A non-interactive sequence that sets up the demonstration drill, starts
//! it, and skates the placed players through three path phases without user
//! input. The whole thing is driven by an explicit millisecond clock the
//! host supplies to `tick`; nothing here captures snapshot state in a
//! callback. Setup steps are scheduled with the controller epoch current at
//! scheduling time and are silently discarded if a manual `clear_rink` or
//! `stop_training` moved the epoch on before they fire.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog;
use crate::error::{Result, SessionError};
use crate::session::SessionController;

/// Delay before the roster is auto-assigned onto the demo drill.
pub const SETUP_DELAY_MS: u64 = 500;
/// Additional delay before the drill starts after assignment.
pub const START_DELAY_MS: u64 = 1500;
/// Path animation step interval.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Lead-player x thresholds that advance the phase machine.
const WEAVE_THRESHOLD_X: f32 = 48.0;
const FINISH_THRESHOLD_X: f32 = 78.0;
const END_THRESHOLD_X: f32 = 88.0;

/// Demo path phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoPhase {
    /// Not animating (setup pending or sequence finished).
    Idle,
    /// Skate straight toward the first cone line (x -> 50).
    Approach,
    /// Weave through the cones (x -> 80, sinusoidal y).
    Weave,
    /// Drive to the net (x -> 90, y eases to center).
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepKind {
    AssignRoster,
    StartDrill,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledStep {
    due_at_ms: u64,
    /// Controller epoch captured when the step was queued.
    epoch: u64,
    kind: StepKind,
}

/// Drives the scripted walkthrough against a session controller.
#[derive(Debug, Clone, Default)]
pub struct DemoSequencer {
    active: bool,
    phase: DemoPhase,
    pending: Vec<ScheduledStep>,
    /// Explicitly recorded first assigned player; phase transitions key off
    /// its x coordinate, never off map iteration order.
    lead_player: Option<String>,
    next_tick_at_ms: u64,
}

impl Default for DemoPhase {
    fn default() -> Self {
        DemoPhase::Idle
    }
}

impl DemoSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the walkthrough: select the demo drill, clear the rink, and
    /// queue the delayed setup steps. Rejected while a demo is already
    /// active or a session is already running.
    pub fn start(&mut self, controller: &mut SessionController, now_ms: u64) -> Result<()> {
        if self.active {
            return Err(SessionError::DemoAlreadyActive);
        }
        if controller.is_running() {
            return Err(SessionError::SessionAlreadyRunning);
        }

        controller.select_drill(catalog::demo_drill());
        controller.clear_rink();

        // Capture the epoch after the clear so our own steps survive it.
        let epoch = controller.epoch();
        self.pending = vec![
            ScheduledStep {
                due_at_ms: now_ms + SETUP_DELAY_MS,
                epoch,
                kind: StepKind::AssignRoster,
            },
            ScheduledStep {
                due_at_ms: now_ms + SETUP_DELAY_MS + START_DELAY_MS,
                epoch,
                kind: StepKind::StartDrill,
            },
        ];
        self.active = true;
        self.phase = DemoPhase::Idle;
        self.lead_player = None;
        Ok(())
    }

    /// Advance the sequence to `now_ms`: fire due setup steps, then run the
    /// fixed-interval path animation while the drill is running.
    pub fn tick(&mut self, controller: &mut SessionController, now_ms: u64) {
        if !self.active {
            return;
        }

        self.fire_due_steps(controller, now_ms);

        if self.phase == DemoPhase::Idle {
            // Setup discarded as stale and nothing left queued.
            if self.pending.is_empty() {
                self.reset();
            }
            return;
        }

        // The user stopped or cleared mid-animation: stand down instead of
        // materializing players out of turn.
        if !controller.is_running() || controller.placements().is_empty() {
            debug!("demo aborted: session no longer running");
            self.reset();
            return;
        }

        while self.active && now_ms >= self.next_tick_at_ms {
            self.animation_step(controller);
            self.next_tick_at_ms += TICK_INTERVAL_MS;
        }
    }

    fn fire_due_steps(&mut self, controller: &mut SessionController, now_ms: u64) {
        let due: Vec<ScheduledStep> =
            self.pending.iter().copied().filter(|s| s.due_at_ms <= now_ms).collect();
        self.pending.retain(|s| s.due_at_ms > now_ms);

        for step in due {
            if step.epoch != controller.epoch() {
                debug!(?step.kind, "discarding stale demo step");
                continue;
            }
            match step.kind {
                StepKind::AssignRoster => self.assign_roster(controller),
                StepKind::StartDrill => {
                    if controller.start_drill().is_ok() {
                        self.phase = DemoPhase::Approach;
                        self.next_tick_at_ms = step.due_at_ms + TICK_INTERVAL_MS;
                    } else {
                        // Drill selection vanished between steps.
                        self.reset();
                    }
                }
            }
        }
    }

    /// Put the first N unassigned roster players onto the demo drill's
    /// player slots, N = slot count. A short roster degrades gracefully:
    /// missing players simply never get a position.
    fn assign_roster(&mut self, controller: &mut SessionController) {
        controller.auto_position();
        // Lead = first placed player in roster order.
        self.lead_player = controller
            .roster()
            .players()
            .iter()
            .find(|p| controller.placements().contains_key(&p.id))
            .map(|p| p.id.clone());
    }

    fn animation_step(&mut self, controller: &mut SessionController) {
        let ids: Vec<String> = controller.placements().keys().cloned().collect();
        for id in ids {
            let Some(p) = controller.placement(&id) else { continue };
            let (x, y) = (p.x, p.y);
            let (nx, ny) = match self.phase {
                DemoPhase::Idle => (x, y),
                DemoPhase::Approach => ((x + 2.0).min(50.0), y),
                DemoPhase::Weave => {
                    let nx = (x + 1.5).min(80.0);
                    (nx, y + ((nx - 50.0) * 0.2).sin() * 5.0)
                }
                DemoPhase::Finish => ((x + 2.0).min(90.0), y + (50.0 - y) * 0.05),
            };
            controller.update_placement_position(&id, nx, ny);
        }

        let lead_x = self
            .lead_player
            .as_deref()
            .and_then(|id| controller.placement(id))
            .map(|p| p.x);
        let Some(lead_x) = lead_x else {
            // Lead player was removed manually: nothing to key phases on.
            self.reset();
            return;
        };

        match self.phase {
            DemoPhase::Approach if lead_x >= WEAVE_THRESHOLD_X => {
                self.phase = DemoPhase::Weave;
            }
            DemoPhase::Weave if lead_x >= FINISH_THRESHOLD_X => {
                self.phase = DemoPhase::Finish;
            }
            DemoPhase::Finish if lead_x >= END_THRESHOLD_X => {
                controller.stop_training();
                self.reset();
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.active = false;
        self.phase = DemoPhase::Idle;
        self.pending.clear();
        self.lead_player = None;
        self.next_tick_at_ms = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> DemoPhase {
        self.phase
    }
}
