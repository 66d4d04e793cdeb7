use crate::session::StudySession;
use chrono::Timelike;

/// Time-of-day band a session started in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Shift {
    /// Reduction order, which is also the tie-break order
    pub const ORDER: [Shift; 4] = [Shift::Morning, Shift::Afternoon, Shift::Evening, Shift::Night];

    /// Morning [6,12), afternoon [12,18), evening [18,24), anything else is night
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Shift::Morning,
            12..=17 => Shift::Afternoon,
            18..=23 => Shift::Evening,
            _ => Shift::Night,
        }
    }

    fn index(&self) -> usize {
        match self {
            Shift::Morning => 0,
            Shift::Afternoon => 1,
            Shift::Evening => 2,
            Shift::Night => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Manhã",
            Shift::Afternoon => "Tarde",
            Shift::Evening => "Noite",
            Shift::Night => "Madrugada",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Shift::Morning => "#f59e0b",
            Shift::Afternoon => "#3b82f6",
            Shift::Evening => "#8b5cf6",
            Shift::Night => "#64748b",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSlice {
    pub shift: Shift,
    /// Number of sessions, not hours
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDistribution {
    /// Non-empty bands only, in `Shift::ORDER`
    pub slices: Vec<ShiftSlice>,
    pub most_productive: Option<Shift>,
}

impl ShiftDistribution {
    pub fn most_productive_label(&self) -> &'static str {
        self.most_productive.map(|s| s.label()).unwrap_or("N/A")
    }
}

pub fn shift_distribution(sessions: &[&StudySession]) -> ShiftDistribution {
    let mut counts = [0u32; 4];
    for session in sessions {
        let shift = Shift::from_hour(session.date.hour());
        counts[shift.index()] += 1;
    }

    let slices: Vec<ShiftSlice> = Shift::ORDER
        .into_iter()
        .zip(counts)
        .filter(|(_, value)| *value > 0)
        .map(|(shift, value)| ShiftSlice { shift, value })
        .collect();
    let most_productive = most_productive_shift(&slices);

    ShiftDistribution {
        slices,
        most_productive,
    }
}

/// Band with the most sessions; on equal counts the earlier band wins
pub fn most_productive_shift(slices: &[ShiftSlice]) -> Option<Shift> {
    let mut best: Option<&ShiftSlice> = None;
    for slice in slices {
        match best {
            Some(current) if current.value >= slice.value => {}
            _ => best = Some(slice),
        }
    }
    best.map(|slice| slice.shift)
}
