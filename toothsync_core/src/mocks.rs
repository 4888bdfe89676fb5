//! Test and simulation helpers: canonical wheels and tick sources.

use crate::geometry::ToothMap;
use crate::source::TickSource;

/// Three-gap test wheel: one double-width gap then two single gaps, four
/// positions per revolution. Small enough to hand-check every update.
pub fn four_position_wheel() -> ToothMap {
    ToothMap::new(vec![2, 1, 1]).unwrap_or_else(|_| unreachable!("static map is valid"))
}

/// 36-1 crank trigger wheel: a double-width gap where the missing tooth
/// sits, followed by 34 single gaps.
pub fn crank_36_minus_1() -> ToothMap {
    let mut gaps = vec![2_u16];
    gaps.extend(std::iter::repeat_n(1, 34));
    ToothMap::new(gaps).unwrap_or_else(|_| unreachable!("static map is valid"))
}

/// Replays a prepared interval sequence.
#[derive(Debug, Clone)]
pub struct ScriptedTicks {
    ticks: Vec<u32>,
    next: usize,
}

impl ScriptedTicks {
    pub fn new(ticks: Vec<u32>) -> Self {
        Self { ticks, next: 0 }
    }
}

impl TickSource for ScriptedTicks {
    fn next_interval(&mut self) -> Option<u32> {
        let t = self.ticks.get(self.next).copied()?;
        self.next += 1;
        Some(t)
    }
}

/// Generates the interval sequence of a wheel spinning at constant speed:
/// crossing gap `i` takes `gap(i) × ticks_per_position` ticks, starting at
/// tooth 0.
#[derive(Debug, Clone)]
pub struct ConstantSpeed {
    gaps: Vec<u16>,
    ticks_per_position: u32,
    next_tooth: usize,
    remaining: u64,
}

impl ConstantSpeed {
    pub fn new(map: &ToothMap, ticks_per_position: u32, events: u64) -> Self {
        Self {
            gaps: map.gaps().to_vec(),
            ticks_per_position,
            next_tooth: 0,
            remaining: events,
        }
    }
}

impl TickSource for ConstantSpeed {
    fn next_interval(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let ticks = u32::from(self.gaps[self.next_tooth]) * self.ticks_per_position;
        self.next_tooth = (self.next_tooth + 1) % self.gaps.len();
        Some(ticks)
    }
}
