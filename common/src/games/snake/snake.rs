use std::collections::{HashSet, VecDeque};

use super::grid::Grid;
use super::types::{Cell, Direction};

/// Head-first body with a membership set kept in sync for O(1) collision checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
}

impl Snake {
    /// Lays `length` segments behind `head`, trailing away from `direction`.
    pub fn new(head: Cell, direction: Direction, length: usize, grid: &Grid) -> Self {
        let mut body = VecDeque::with_capacity(length + 1);
        let mut body_set = HashSet::with_capacity(length + 1);

        let mut segment = head;
        for _ in 0..length {
            body.push_back(segment);
            body_set.insert(segment);
            segment = grid.wrap(segment, direction.opposite());
        }

        Self { body, body_set }
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn tail(&self) -> Option<Cell> {
        self.body.back().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub(super) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
        self.body_set.insert(cell);
    }

    pub(super) fn pop_tail(&mut self) -> Option<Cell> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }

    /// Builds a snake from explicit head-first cells, rejecting empty or overlapping bodies.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, String> {
        if cells.is_empty() {
            return Err("Snake needs at least one cell".to_string());
        }

        let body: VecDeque<Cell> = cells.iter().copied().collect();
        let body_set: HashSet<Cell> = cells.iter().copied().collect();
        if body_set.len() != body.len() {
            return Err("Snake cells must not overlap".to_string());
        }

        Ok(Self { body, body_set })
    }
}
