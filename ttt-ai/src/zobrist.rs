//! Zobrist 哈希
//!
//! 用于快速计算棋盘的哈希值，支持增量更新

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ttt_core::{Action, Board, Mark, CELL_COUNT};

/// Zobrist 哈希表
///
/// 为每个格子上的每种标记生成唯一的随机值。
/// 走子方由双方落子数决定，不需要额外的走子方哈希。
pub struct ZobristTable {
    /// 标记哈希值 [mark][cell]
    /// mark: 0=X, 1=O
    marks: [[u64; CELL_COUNT]; 2],
}

impl ZobristTable {
    /// 创建新的 Zobrist 表（使用固定种子保证确定性）
    pub fn new() -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(0x7777_0000_DEAD_BEEF);

        let mut marks = [[0u64; CELL_COUNT]; 2];
        for row in marks.iter_mut() {
            for key in row.iter_mut() {
                *key = rng.gen();
            }
        }

        Self { marks }
    }

    /// 计算棋盘的完整哈希值
    pub fn hash(&self, board: &Board) -> u64 {
        board
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.mark().map(|mark| self.marks[mark_index(mark)][index]))
            .fold(0u64, |hash, key| hash ^ key)
    }

    /// 获取在指定坐标落下标记的哈希值（用于增量更新）
    #[inline]
    pub fn mark_hash(&self, mark: Mark, action: Action) -> u64 {
        self.marks[mark_index(mark)][action.to_index()]
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn mark_index(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}
