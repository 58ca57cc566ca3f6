//! Render faults and the one-way fault latch behind the containment boundary

use std::error::Error;

use super::particles::ParticleError;
use super::ripples::RippleError;

/// A fault raised while building part of the view tree
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderFault {
    #[error("invalid particle configuration: {0}")]
    Particles(#[from] ParticleError),

    #[error("invalid ripple timing: {0}")]
    Ripples(#[from] RippleError),

    #[error("{0}")]
    View(String),
}

impl RenderFault {
    /// Recover the typed fault from a type-erased error, if it is one
    pub fn from_dyn(error: &(dyn Error + Send + Sync + 'static)) -> Self {
        error
            .downcast_ref::<RenderFault>()
            .cloned()
            .unwrap_or_else(|| RenderFault::View(error.to_string()))
    }
}

/// Where caught faults are reported
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, fault: &RenderFault);
}

/// Default sink: browser console on the client, `tracing` on the server
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, fault: &RenderFault) {
        #[cfg(feature = "ssr")]
        tracing::error!("ErrorBoundary caught a render fault: {}", fault);

        #[cfg(not(feature = "ssr"))]
        leptos::logging::error!("ErrorBoundary caught a render fault: {}", fault);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FaultState {
    #[default]
    Healthy,
    Faulted(RenderFault),
}

/// Two-state latch: `Healthy` until the first fault, then `Faulted` forever
#[derive(Debug, Clone, Default)]
pub struct FaultLatch {
    state: FaultState,
}

impl FaultLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FaultState {
        &self.state
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self.state, FaultState::Faulted(_))
    }

    pub fn fault(&self) -> Option<&RenderFault> {
        match &self.state {
            FaultState::Faulted(fault) => Some(fault),
            FaultState::Healthy => None,
        }
    }

    /// Record a fault. Only the first one transitions the latch and reaches
    /// the sink; returns whether this call did the transition.
    pub fn record(&mut self, fault: RenderFault, sink: &dyn DiagnosticSink) -> bool {
        if self.is_faulted() {
            return false;
        }
        sink.report(&fault);
        self.state = FaultState::Faulted(fault);
        true
    }
}
