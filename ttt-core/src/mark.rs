//! 棋子标记、格子与落子坐标

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 玩家标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    /// X（先手）
    X,
    /// O（后手）
    O,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取记号字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 格子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Cell {
    /// 空格
    #[default]
    Empty,
    /// X 已落子
    X,
    /// O 已落子
    O,
}

impl Cell {
    /// 是否为空格
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 获取格子上的标记
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    /// 获取记号字符（空格为 '.'）
    pub fn to_char(&self) -> char {
        self.mark().map(|m| m.to_char()).unwrap_or('.')
    }

    /// 从记号字符解析
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// 落子坐标（从 0 开始的行、列）
///
/// 只有与枚举出它的棋盘搭配才有意义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Action {
    /// 创建新坐标
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新坐标（不检查边界）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查坐标是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Action {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(Cell::from_char('x'), Some(Cell::X));
        assert_eq!(Cell::from_char('O'), Some(Cell::O));
        assert_eq!(Cell::from_char('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('?'), None);

        assert_eq!(Cell::from(Mark::O).to_char(), 'O');
        assert_eq!(Cell::Empty.to_char(), '.');
        assert_eq!(Cell::X.mark(), Some(Mark::X));
        assert!(Cell::Empty.mark().is_none());
    }

    #[test]
    fn test_action_valid() {
        assert!(Action::new(0, 0).is_some());
        assert!(Action::new(2, 2).is_some());
        assert!(Action::new(3, 0).is_none());
        assert!(Action::new(0, 3).is_none());
        assert!(!Action::new_unchecked(1, 7).is_valid());
    }

    #[test]
    fn test_action_index() {
        for index in 0..CELL_COUNT {
            let action = Action::from_index(index).unwrap();
            assert!(action.is_valid());
            assert_eq!(action.to_index(), index);
        }
        assert!(Action::from_index(CELL_COUNT).is_none());
        assert_eq!(Action::from_index(5), Action::new(1, 2));
    }

    #[test]
    fn test_action_order_is_row_major() {
        let mut actions: Vec<Action> = (0..CELL_COUNT).rev().filter_map(Action::from_index).collect();
        actions.sort();
        let indices: Vec<usize> = actions.iter().map(|a| a.to_index()).collect();
        assert_eq!(indices, (0..CELL_COUNT).collect::<Vec<_>>());
    }
}
