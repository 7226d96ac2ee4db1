//! 井字棋 AI 引擎
//!
//! 包含:
//! - 穷举 Minimax（极大 / 极小互相递归）
//! - 可配置搜索引擎：Alpha-Beta 剪枝、置换表
//! - Zobrist 哈希

pub mod minimax;
mod search;
mod transposition;
mod zobrist;

pub use minimax::{best_action, maximizing_value, minimizing_value};
pub use search::{AiConfig, AiEngine, SearchStrategy};
pub use transposition::{TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
