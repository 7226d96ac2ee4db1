//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 无效的走法（越界或目标格已被占用）
    #[error("Invalid move: ({row}, {col})")]
    InvalidMove { row: u8, col: u8 },

    /// 双方落子数相差超过 1，正常对局不可能出现
    #[error("Invalid board state: {x_count} X marks vs {o_count} O marks")]
    InvalidState { x_count: usize, o_count: usize },

    /// 无效的棋盘记号
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
