//! 走子规则、胜负判定与效用值

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{DRAW_UTILITY, O_WIN_UTILITY, WIN_LINES, X_WIN_UTILITY};
use crate::error::{GameError, Result};
use crate::mark::{Action, Cell, Mark};

/// 对局结果（总是由棋盘重新计算，不单独保存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X 获胜
    XWins,
    /// O 获胜
    OWins,
    /// 和棋
    Draw,
    /// 对局进行中
    InProgress,
}

/// 规则引擎
pub struct Rules;

impl Rules {
    /// 当前走子方
    ///
    /// 双方落子数相等时轮到 X，否则轮到落子较少的一方。
    /// 落子数相差超过 1 时返回 `InvalidState`。
    pub fn current_player(board: &Board) -> Result<Mark> {
        let x_count = board.count(Cell::X);
        let o_count = board.count(Cell::O);

        if x_count.abs_diff(o_count) > 1 {
            return Err(GameError::InvalidState { x_count, o_count });
        }

        if o_count < x_count {
            Ok(Mark::O)
        } else {
            Ok(Mark::X)
        }
    }

    /// 所有合法走法（空格坐标，按行优先排序）
    pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
        board
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .filter_map(|(index, _)| Action::from_index(index))
            .collect()
    }

    /// 在棋盘上落子，返回新棋盘
    pub fn apply_move(board: &Board, action: Action) -> Result<Board> {
        match board.get(action) {
            Some(Cell::Empty) => {}
            _ => {
                return Err(GameError::InvalidMove {
                    row: action.row,
                    col: action.col,
                })
            }
        }

        let mark = Self::current_player(board)?;
        Ok(board.with_cell(action, Cell::from(mark)))
    }

    /// 获胜方
    ///
    /// 先检查 X 再检查 O，返回第一个连成一线的标记
    pub fn winner(board: &Board) -> Option<Mark> {
        let cells = board.cells();
        [Mark::X, Mark::O].into_iter().find(|&mark| {
            let target = Cell::from(mark);
            WIN_LINES
                .iter()
                .any(|line| line.iter().all(|&index| cells[index] == target))
        })
    }

    /// 对局是否结束
    pub fn is_terminal(board: &Board) -> bool {
        Self::winner(board).is_some() || board.is_full()
    }

    /// 终局效用值（X 视角）：X 胜 1，O 胜 -1，其余 0
    pub fn utility(board: &Board) -> i32 {
        match Self::winner(board) {
            Some(Mark::X) => X_WIN_UTILITY,
            Some(Mark::O) => O_WIN_UTILITY,
            None => DRAW_UTILITY,
        }
    }

    /// 对局结果
    pub fn outcome(board: &Board) -> Outcome {
        match Self::winner(board) {
            Some(Mark::X) => Outcome::XWins,
            Some(Mark::O) => Outcome::OWins,
            None if board.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}
