use serde::{Deserialize, Serialize};

use sicbo_core::Outcome;

/// One integer per binary state on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakCounts {
    pub high: u32,
    pub low: u32,
    pub even: u32,
    pub odd: u32,
}

/// Mean completed run length per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakAverages {
    pub high: f64,
    pub low: f64,
    pub even: f64,
    pub odd: f64,
}

/// Run statistics over one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakAnalysis {
    /// Run still active at the end of the window. Per axis, at most one
    /// state is nonzero.
    pub current: StreakCounts,
    /// Longest run, completed or current.
    pub max: StreakCounts,
    /// Mean of completed runs; 0 when the state never completed a run.
    pub average: StreakAverages,
}

/// Runs for one binary axis. Index 0 is the `true` state.
struct AxisRuns {
    current: [u32; 2],
    max: [u32; 2],
    average: [f64; 2],
}

fn slot(state: bool) -> usize {
    if state {
        0
    } else {
        1
    }
}

fn walk_axis(states: impl Iterator<Item = bool>) -> AxisRuns {
    let mut last: Option<bool> = None;
    let mut current = [0u32; 2];
    let mut completed: [Vec<u32>; 2] = [Vec::new(), Vec::new()];

    for state in states {
        if let Some(prev) = last {
            if prev != state {
                completed[slot(prev)].push(current[slot(prev)]);
                current = [0, 0];
            }
        }
        current[slot(state)] += 1;
        last = Some(state);
    }

    let mut max = current;
    let mut average = [0.0; 2];
    for i in 0..2 {
        if let Some(&longest) = completed[i].iter().max() {
            max[i] = longest.max(current[i]);
            average[i] =
                completed[i].iter().sum::<u32>() as f64 / completed[i].len() as f64;
        }
    }

    AxisRuns {
        current,
        max,
        average,
    }
}

/// Walk the window once per axis, oldest first.
/// An empty window yields all zeroes.
pub fn analyze(window: &[Outcome]) -> StreakAnalysis {
    let hl = walk_axis(window.iter().map(|o| o.is_high()));
    let eo = walk_axis(window.iter().map(|o| o.is_even()));

    StreakAnalysis {
        current: StreakCounts {
            high: hl.current[0],
            low: hl.current[1],
            even: eo.current[0],
            odd: eo.current[1],
        },
        max: StreakCounts {
            high: hl.max[0],
            low: hl.max[1],
            even: eo.max[0],
            odd: eo.max[1],
        },
        average: StreakAverages {
            high: hl.average[0],
            low: hl.average[1],
            even: eo.average[0],
            odd: eo.average[1],
        },
    }
}
