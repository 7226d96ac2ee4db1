//! 井字棋自对弈
//!
//! 包含:
//! - 从任意局面出发由 AI 双方按最优策略走完
//! - 对局记录（可序列化为 JSON）

pub mod game;

pub use game::{play_out, GameTranscript, PlayedMove, SelfPlayError};
