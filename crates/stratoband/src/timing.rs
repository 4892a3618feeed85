//! Opt-in per-phase timings for layout passes, reported through `tracing`.

use std::time::{Duration, Instant};

const TIMING_VAR: &str = "STRATOBAND_LAYOUT_TIMING";

/// Whether `STRATOBAND_LAYOUT_TIMING` asks for timings. Read once per process.
pub(crate) fn layout_timing_enabled() -> bool {
    static ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var(TIMING_VAR).is_ok_and(|v| flag_set(&v)))
}

fn flag_set(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Sizing,
    Placement,
    Normalize,
    Ribbons,
}

impl Phase {
    const ALL: [Phase; 4] = [
        Phase::Sizing,
        Phase::Placement,
        Phase::Normalize,
        Phase::Ribbons,
    ];

    fn name(self) -> &'static str {
        match self {
            Phase::Sizing => "sizing",
            Phase::Placement => "placement",
            Phase::Normalize => "normalize",
            Phase::Ribbons => "ribbons",
        }
    }
}

/// Time spent in each phase of one pass. Disabled timings measure nothing.
#[derive(Debug, Clone)]
pub(crate) struct LayoutTimings {
    started: Option<Instant>,
    phases: [Duration; Phase::ALL.len()],
}

impl LayoutTimings {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            started: enabled.then(Instant::now),
            phases: [Duration::ZERO; Phase::ALL.len()],
        }
    }

    /// Runs `f`, adding its wall time to `phase` when enabled.
    pub(crate) fn time<R>(&mut self, phase: Phase, f: impl FnOnce() -> R) -> R {
        if self.started.is_none() {
            return f();
        }
        let start = Instant::now();
        let out = f();
        self.phases[phase as usize] += start.elapsed();
        out
    }

    pub(crate) fn phase(&self, phase: Phase) -> Duration {
        self.phases[phase as usize]
    }

    /// Emits one debug event per phase and one for the whole pass.
    pub(crate) fn finish(self, blocks: usize, ribbons: usize) {
        let Some(started) = self.started else {
            return;
        };
        for phase in Phase::ALL {
            tracing::debug!(phase = phase.name(), elapsed = ?self.phase(phase), "layout phase");
        }
        tracing::debug!(blocks, ribbons, total = ?started.elapsed(), "layout pass");
    }
}
