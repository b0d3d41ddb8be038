use std::fmt;

use bevy::prelude::*;

#[derive(States, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Load,
    Editing,
    Running,
}

/// Why a running simulation went back to editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// the player held backspace
    Halted,
    /// the last generation had no births and no deaths
    Stable,
    /// no live cells are left
    Extinct,
}

impl StopReason {
    /// Decides whether the simulation stops after a generation, checking the halt key first,
    /// then the change flag, then the population.
    pub fn check(halt_held: bool, changed: bool, population: usize) -> Option<Self> {
        if halt_held {
            Some(Self::Halted)
        } else if !changed {
            Some(Self::Stable)
        } else if population == 0 {
            Some(Self::Extinct)
        } else {
            None
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Halted => "****Civilization Halted****",
            Self::Stable => "****Optimal civilization reached****",
            Self::Extinct => "****You have gone extinct!!****",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_running_while_evolving() {
        assert_eq!(None, StopReason::check(false, true, 12));
    }

    #[test]
    fn halt_key_wins() {
        assert_eq!(Some(StopReason::Halted), StopReason::check(true, true, 12));
        assert_eq!(Some(StopReason::Halted), StopReason::check(true, false, 0));
    }

    #[test]
    fn stops_when_nothing_changes() {
        assert_eq!(Some(StopReason::Stable), StopReason::check(false, false, 4));
        assert_eq!(Some(StopReason::Stable), StopReason::check(false, false, 0));
    }

    #[test]
    fn extinction_stops_regardless_of_change() {
        assert_eq!(Some(StopReason::Extinct), StopReason::check(false, true, 0));
    }
}
