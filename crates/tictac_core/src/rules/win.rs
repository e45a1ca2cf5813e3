//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{Board, Cell, Player};

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal line.
    Row,
    /// Vertical line.
    Col,
    /// Diagonal line. Index 0 runs top-left to bottom-right, index 1
    /// top-right to bottom-left.
    Diag,
}

/// A completed line of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    index: usize,
    cells: [usize; 3],
}

impl WinningLine {
    const fn new(kind: LineKind, index: usize, cells: [usize; 3]) -> Self {
        Self { kind, index, cells }
    }

    /// Row, column or diagonal.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Index within its kind (0-2 for rows and columns, 0-1 for diagonals).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Board indices of the three cells, in scan order.
    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// True if `cell` lies on this line.
    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

/// Every line of three, in the order they are checked.
///
/// When a board holds more than one complete line the first one here is
/// reported.
pub const LINES: [WinningLine; 8] = [
    WinningLine::new(LineKind::Row, 0, [0, 1, 2]),
    WinningLine::new(LineKind::Row, 1, [3, 4, 5]),
    WinningLine::new(LineKind::Row, 2, [6, 7, 8]),
    WinningLine::new(LineKind::Col, 0, [0, 3, 6]),
    WinningLine::new(LineKind::Col, 1, [1, 4, 7]),
    WinningLine::new(LineKind::Col, 2, [2, 5, 8]),
    WinningLine::new(LineKind::Diag, 0, [0, 4, 8]),
    WinningLine::new(LineKind::Diag, 1, [2, 4, 6]),
];

/// Outcome of scanning a board for three in a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    winner: Option<Player>,
    line: Option<WinningLine>,
}

impl WinResult {
    /// The player holding the line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<&WinningLine> {
        self.line.as_ref()
    }

    /// Board indices of the winning line, empty when there is no winner.
    pub fn cells(&self) -> &[usize] {
        match &self.line {
            Some(line) => &line.cells,
            None => &[],
        }
    }

    /// Orientation of the winning line.
    pub fn kind(&self) -> Option<LineKind> {
        self.line.map(|line| line.kind)
    }

    /// Index of the winning line within its kind.
    pub fn index(&self) -> Option<usize> {
        self.line.map(|line| line.index)
    }
}

/// Scans the board for the first complete line.
#[instrument(level = "trace", skip(board))]
pub fn detect_win(board: &Board) -> WinResult {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line.cells;
        if let Cell::Occupied(player) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return WinResult {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    WinResult::default()
}
