//! 井字棋核心库
//!
//! 包含:
//! - 棋盘、格子、落子坐标等核心数据结构
//! - 走子规则、胜负判定和效用值
//! - 棋盘记号（解析与生成）

mod board;
mod constants;
mod error;
mod mark;
mod notation;
mod rules;

pub use board::Board;
pub use constants::*;
pub use error::{GameError, Result};
pub use mark::{Action, Cell, Mark};
pub use notation::{Notation, INITIAL_NOTATION};
pub use rules::{Outcome, Rules};
