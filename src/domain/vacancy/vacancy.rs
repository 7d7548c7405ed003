use crate::domain::calendar::availability::HOURS_PER_DAY;
use crate::domain::calendar::day::Day;
use crate::domain::employee::roster::EmployeeId;
use crate::error::{Error, Result};

/// One hour of one opening of a vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Block {
    #[default]
    Unfilled,
    AssignedTo(EmployeeId),
}

impl Block {
    pub fn employee(&self) -> Option<EmployeeId> {
        match self {
            Block::Unfilled => None,
            Block::AssignedTo(id) => Some(*id),
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Block::AssignedTo(_))
    }
}

/// An open time range `[start_time, end_time)` on one day with `capacity`
/// identical, simultaneous openings.
///
/// The blocks are stored lane by lane: lane `l` (one per opening) occupies the
/// indices `l * duration .. (l + 1) * duration`, one block per hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    day: Day,
    start_time: u8,
    end_time: u8,
    capacity: usize,
    blocks: Vec<Block>,
}

impl Vacancy {
    pub fn new(day: Day, start_time: u8, end_time: u8, capacity: usize) -> Result<Self> {
        if start_time >= end_time || end_time > HOURS_PER_DAY {
            return Err(Error::ConfigurationError(format!(
                "vacancy on {} must satisfy start < end <= {}, got [{}, {})",
                day, HOURS_PER_DAY, start_time, end_time
            )));
        }

        if capacity == 0 {
            return Err(Error::ConfigurationError(format!("vacancy on {} [{}, {}) needs a capacity of at least 1", day, start_time, end_time)));
        }

        let duration = (end_time - start_time) as usize;

        Ok(Vacancy { day, start_time, end_time, capacity, blocks: vec![Block::Unfilled; duration * capacity] })
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn start_time(&self) -> u8 {
        self.start_time
    }

    pub fn end_time(&self) -> u8 {
        self.end_time
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length of the vacancy in hours (blocks per lane).
    pub fn duration(&self) -> usize {
        (self.end_time - self.start_time) as usize
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The block sequence of one opening, in chronological order.
    pub fn lane(&self, lane: usize) -> Option<&[Block]> {
        if lane >= self.capacity {
            return None;
        }

        let duration = self.duration();
        Some(&self.blocks[lane * duration..(lane + 1) * duration])
    }

    /// Maps a block index to its `(hour, lane)` pair.
    pub fn slot_of(&self, index: usize) -> Option<(u8, usize)> {
        if index >= self.blocks.len() {
            return None;
        }

        let duration = self.duration();
        Some((self.start_time + (index % duration) as u8, index / duration))
    }

    /// Maps an `(hour, lane)` pair to its block index.
    pub fn index_of(&self, hour: u8, lane: usize) -> Option<usize> {
        if lane >= self.capacity || hour < self.start_time || hour >= self.end_time {
            return None;
        }

        Some(lane * self.duration() + (hour - self.start_time) as usize)
    }

    pub fn block_at(&self, hour: u8, lane: usize) -> Option<Block> {
        self.index_of(hour, lane).map(|index| self.blocks[index])
    }

    /// `true` iff every block of `[start, end)` in `lane` holds `employee`.
    pub fn lane_held_by(&self, lane: usize, start: u8, end: u8, employee: EmployeeId) -> bool {
        (start..end).all(|hour| self.block_at(hour, lane) == Some(Block::AssignedTo(employee)))
    }

    /// Employees occupying `hour` in any lane.
    pub fn occupants_at(&self, hour: u8) -> Vec<EmployeeId> {
        (0..self.capacity).filter_map(|lane| self.block_at(hour, lane).and_then(|block| block.employee())).collect()
    }

    pub fn filled_blocks(&self) -> usize {
        self.blocks.iter().filter(|block| block.is_filled()).count()
    }

    pub fn unfilled_blocks(&self) -> usize {
        self.blocks.len() - self.filled_blocks()
    }

    /// Writes `block` into every hour of `[start, end)` in `lane`.
    ///
    /// Only the engine writes blocks, and only together with the matching
    /// employee calendar update.
    pub(crate) fn set_span(&mut self, lane: usize, start: u8, end: u8, block: Block) {
        for hour in start..end {
            match self.index_of(hour, lane) {
                Some(index) => self.blocks[index] = block,
                None => log::error!("Block ({}:00, lane {}) is outside the vacancy on {} [{}, {}).", hour, lane, self.day, self.start_time, self.end_time),
            }
        }
    }
}
