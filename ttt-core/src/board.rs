//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::mark::{Action, Cell};

/// 棋盘
///
/// 3x3 格子按行优先存储，索引为 row * 3 + col。
/// 棋盘是值类型：走子总是产生新棋盘，原棋盘保持不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// 创建初始（全空）棋盘
    pub fn initial() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// 从格子数组创建棋盘
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 获取指定坐标的格子，越界返回 None
    pub fn get(&self, action: Action) -> Option<Cell> {
        if action.is_valid() {
            Some(self.cells[action.to_index()])
        } else {
            None
        }
    }

    /// 返回在指定坐标放置格子后的新棋盘（不检查规则）
    pub(crate) fn with_cell(&self, action: Action, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[action.to_index()] = cell;
        next
    }

    /// 所有格子（行优先）
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// 统计指定状态的格子数
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// 空格数
    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// 已落子数
    pub fn moves_made(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// 交换所有 X 与 O
    #[cfg(test)]
    pub(crate) fn swap_marks(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = match *cell {
                Cell::X => Cell::O,
                Cell::O => Cell::X,
                Cell::Empty => Cell::Empty,
            };
        }
        Board { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        assert_eq!(board.empty_count(), CELL_COUNT);
        assert_eq!(board.moves_made(), 0);
        assert!(!board.is_full());
        assert!(board.cells().iter().all(|c| c.is_empty()));

        // 每次调用都是独立的新值，按结构比较相等
        assert_eq!(Board::initial(), Board::default());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::initial();
        assert_eq!(board.get(Action::new_unchecked(1, 1)), Some(Cell::Empty));
        assert_eq!(board.get(Action::new_unchecked(3, 1)), None);
        assert_eq!(board.get(Action::new_unchecked(0, 9)), None);
    }

    #[test]
    fn test_with_cell_leaves_original() {
        let board = Board::initial();
        let center = Action::new_unchecked(1, 1);

        let next = board.with_cell(center, Cell::X);

        assert_eq!(next.get(center), Some(Cell::X));
        assert_eq!(board.get(center), Some(Cell::Empty));
        assert_eq!(next.count(Cell::X), 1);
        assert_eq!(next.moves_made(), 1);
    }

    #[test]
    fn test_swap_marks() {
        let board = Board::initial()
            .with_cell(Action::new_unchecked(0, 0), Cell::X)
            .with_cell(Action::new_unchecked(2, 1), Cell::O);

        let swapped = board.swap_marks();
        assert_eq!(swapped.get(Action::new_unchecked(0, 0)), Some(Cell::O));
        assert_eq!(swapped.get(Action::new_unchecked(2, 1)), Some(Cell::X));
        assert_eq!(swapped.swap_marks(), board);
    }

    #[test]
    fn test_display() {
        let board = Board::initial()
            .with_cell(Action::new_unchecked(0, 0), Cell::X)
            .with_cell(Action::new_unchecked(1, 1), Cell::O);

        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }

    #[test]
    fn test_serde_json() {
        let board = Board::initial().with_cell(Action::new_unchecked(2, 2), Cell::O);
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
