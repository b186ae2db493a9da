//! Application orchestration state for the demo
//!
//! The rig itself never looks at global flags; whoever owns the application
//! decides when input is suspended and passes that into the frame input.
//! This state machine is that owner for the demo driver: scripted camera
//! moves and the results overlay both suspend pointer control.

use thiserror::Error;

/// The current application state
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Normal play; the rig reads pointer input
    Playing,
    /// A scripted camera move owns the camera for the remaining seconds
    AutoMove { remaining: f32 },
    /// The results overlay is open
    ResultsOpen,
}

impl Default for AppState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Errors that can occur during state transitions
#[derive(Debug, Clone, Error)]
pub enum StateError {
    #[error("an automatic camera move is in progress")]
    AutoMoveInProgress,

    #[error("the results overlay is open")]
    ResultsOpen,
}

impl AppState {
    /// Whether the rig's pointer input should be suspended this frame
    pub fn suspends_input(&self) -> bool {
        !matches!(self, AppState::Playing)
    }

    /// Advance time-driven transitions (auto-move countdown)
    pub fn update(&mut self, dt: f32) {
        if let AppState::AutoMove { remaining } = self {
            *remaining -= dt;
            if *remaining <= 0.0 {
                *self = AppState::Playing;
            }
        }
    }

    /// Start a scripted camera move lasting `duration` seconds
    pub fn begin_auto_move(&mut self, duration: f32) -> Result<(), StateError> {
        match self {
            AppState::AutoMove { .. } => Err(StateError::AutoMoveInProgress),
            AppState::ResultsOpen => Err(StateError::ResultsOpen),
            AppState::Playing => {
                *self = AppState::AutoMove {
                    remaining: duration.max(0.0),
                };
                Ok(())
            }
        }
    }

    /// Open the results overlay
    pub fn open_results(&mut self) -> Result<(), StateError> {
        match self {
            AppState::AutoMove { .. } => Err(StateError::AutoMoveInProgress),
            _ => {
                *self = AppState::ResultsOpen;
                Ok(())
            }
        }
    }

    /// Close the results overlay (no-op if it is not open)
    pub fn close_results(&mut self) {
        if matches!(self, AppState::ResultsOpen) {
            *self = AppState::Playing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_does_not_suspend() {
        assert!(!AppState::Playing.suspends_input());
        assert!(AppState::ResultsOpen.suspends_input());
        assert!(AppState::AutoMove { remaining: 1.0 }.suspends_input());
    }

    #[test]
    fn test_auto_move_counts_down() {
        let mut state = AppState::default();
        state.begin_auto_move(0.5).unwrap();
        assert!(state.suspends_input());

        for _ in 0..60 {
            state.update(1.0 / 60.0);
        }
        assert_eq!(state, AppState::Playing);
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut state = AppState::default();
        state.begin_auto_move(1.0).unwrap();
        assert!(state.begin_auto_move(1.0).is_err());
        assert!(state.open_results().is_err());

        let mut state = AppState::ResultsOpen;
        assert!(state.begin_auto_move(1.0).is_err());
        state.close_results();
        assert_eq!(state, AppState::Playing);
    }
}
