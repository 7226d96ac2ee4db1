//! 棋盘记号解析和生成
//!
//! 记号格式：三行以 `/` 分隔，每行三个字符，`X`/`O` 表示落子，`.` 表示空格。
//!
//! 示例：
//! `XX./OO./...`

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::{GameError, Result};
use crate::mark::Cell;

/// 初始局面记号
pub const INITIAL_NOTATION: &str = ".../.../...";

/// 棋盘记号处理
pub struct Notation;

impl Notation {
    /// 解析记号为棋盘
    pub fn parse(notation: &str) -> Result<Board> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(GameError::InvalidNotation {
                reason: "Empty notation string".to_string(),
            });
        }

        let rows: Vec<&str> = notation.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row_idx, row) in rows.iter().enumerate() {
            let row_cells: Vec<Cell> = row
                .chars()
                .map(|c| {
                    Cell::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                        reason: format!("Invalid cell character: {}", c),
                    })
                })
                .collect::<Result<_>>()?;

            if row_cells.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        row_cells.len(),
                        BOARD_SIZE
                    ),
                });
            }

            cells[row_idx * BOARD_SIZE..(row_idx + 1) * BOARD_SIZE].copy_from_slice(&row_cells);
        }

        Ok(Board::from_cells(cells))
    }

    /// 将棋盘转换为记号
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}
