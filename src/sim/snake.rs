//! Snake entities on a square grid
//!
//! State is kept in grid cells (`IVec2`); pixels only appear when drawing.

use std::collections::VecDeque;

use glam::{IVec2, Vec2};
use rand::Rng;

use crate::geometry::Rect;
use crate::renderer::{Color, RenderTarget};

/// Cell edge length in pixels
pub const BLOCK_SIZE: u32 = 20;

/// Heading of a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// One-cell step in this heading
    pub fn delta(self) -> IVec2 {
        match self {
            Heading::Up => IVec2::new(0, -1),
            Heading::Down => IVec2::new(0, 1),
            Heading::Left => IVec2::new(-1, 0),
            Heading::Right => IVec2::new(1, 0),
        }
    }

    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Bounded play area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    pub block: u32,
}

impl Grid {
    /// Largest grid of `block`-sized cells fitting in `size` pixels
    pub fn fit(size: Vec2, block: u32) -> Self {
        Self {
            cols: (size.x as u32 / block) as i32,
            rows: (size.y as u32 / block) as i32,
            block,
        }
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.cols / 2, self.rows / 2)
    }

    /// Pixel rectangle covered by a cell
    pub fn cell_rect(&self, cell: IVec2) -> Rect {
        let b = self.block as f32;
        Rect::new(cell.x as f32 * b, cell.y as f32 * b, b, b)
    }

    /// Uniformly random cell for which `blocked` is false.
    ///
    /// Falls back to any cell if the grid is (nearly) full.
    pub fn random_cell(&self, rng: &mut impl Rng, blocked: impl Fn(IVec2) -> bool) -> IVec2 {
        let total = (self.cols.max(1) * self.rows.max(1)) as usize;
        for _ in 0..total * 4 {
            let cell = IVec2::new(
                rng.random_range(0..self.cols.max(1)),
                rng.random_range(0..self.rows.max(1)),
            );
            if !blocked(cell) {
                return cell;
            }
        }
        // Dense board: scan for any free cell in order
        (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| IVec2::new(x, y)))
            .find(|c| !blocked(*c))
            .unwrap_or(IVec2::ZERO)
    }
}

/// A snake: head cell plus tail cells (oldest first)
#[derive(Debug, Clone)]
pub struct Snake {
    pub head: IVec2,
    pub tail: VecDeque<IVec2>,
    /// None until the first steering input
    pub heading: Option<Heading>,
    pub color: Color,
}

impl Snake {
    pub fn new(head: IVec2, heading: Option<Heading>, color: Color) -> Self {
        Self {
            head,
            tail: VecDeque::new(),
            heading,
            color,
        }
    }

    /// Change heading. Reversing onto the current heading is rejected.
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, heading: Heading) -> bool {
        match self.heading {
            Some(current) if heading == current.reverse() => false,
            _ => {
                self.heading = Some(heading);
                true
            }
        }
    }

    /// Where the head goes on the next step (None while stationary)
    pub fn next_head(&self) -> Option<IVec2> {
        self.heading.map(|h| self.head + h.delta())
    }

    /// Move one cell. The old head becomes the newest tail segment; the
    /// oldest segment is dropped unless `grow` is set.
    pub fn advance(&mut self, grow: bool) {
        let Some(next) = self.next_head() else {
            return;
        };
        self.tail.push_back(self.head);
        if !grow {
            self.tail.pop_front();
        }
        self.head = next;
    }

    /// Number of tail segments (head excluded)
    pub fn len(&self) -> usize {
        self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_empty()
    }

    /// True if `cell` is one of the tail segments
    pub fn tail_contains(&self, cell: IVec2) -> bool {
        self.tail.contains(&cell)
    }

    /// True if `cell` is the head or any tail segment
    pub fn occupies(&self, cell: IVec2) -> bool {
        self.head == cell || self.tail_contains(cell)
    }

    pub fn bites_itself(&self) -> bool {
        self.tail_contains(self.head)
    }

    pub fn draw(&self, grid: &Grid, target: &mut dyn RenderTarget) {
        target.fill_rect(self.color, grid.cell_rect(self.head));
        for cell in &self.tail {
            target.fill_rect(self.color, grid.cell_rect(*cell));
        }
    }
}

/// Food pellet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub cell: IVec2,
    pub color: Color,
}

impl Food {
    pub fn new(cell: IVec2, color: Color) -> Self {
        Self { cell, color }
    }

    pub fn draw(&self, grid: &Grid, target: &mut dyn RenderTarget) {
        target.fill_rect(self.color, grid.cell_rect(self.cell));
    }
}
