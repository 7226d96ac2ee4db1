//! 搜索引擎
//!
//! 在穷举 Minimax 的基础上可选 Alpha-Beta 剪枝和置换表。
//! 两种优化都不改变局面值，只减少展开的节点数。

use serde::{Deserialize, Serialize};
use tracing::debug;
use ttt_core::{Action, Board, Mark, Result, Rules};

use crate::transposition::{Bound, TTStats, TranspositionTable};
use crate::zobrist::ZobristTable;

/// 搜索策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// 完整展开所有分支
    Exhaustive,
    /// Alpha-Beta 剪枝
    AlphaBeta,
}

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub strategy: SearchStrategy,
    pub use_transposition: bool,
    pub table_entries: usize,
}

impl AiConfig {
    pub fn from_strategy(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            use_transposition: true,
            table_entries: TranspositionTable::DEFAULT_ENTRIES,
        }
    }

    /// 不使用任何优化，与穷举 Minimax 的走法选择完全一致
    pub fn plain() -> Self {
        Self {
            strategy: SearchStrategy::Exhaustive,
            use_transposition: false,
            table_entries: 0,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_strategy(SearchStrategy::AlphaBeta)
    }
}

/// 搜索窗口的开区间边界，效用值只有 -1/0/1
const INF: i32 = i32::MAX;

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    zobrist: ZobristTable,
    table: Option<TranspositionTable>,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let table = config
            .use_transposition
            .then(|| TranspositionTable::new(config.table_entries));
        Self {
            config,
            zobrist: ZobristTable::new(),
            table,
            nodes_searched: 0,
        }
    }

    /// 从搜索策略创建
    pub fn from_strategy(strategy: SearchStrategy) -> Self {
        Self::new(AiConfig::from_strategy(strategy))
    }

    /// 搜索当前走子方的最佳走法，终局返回 None
    pub fn search(&mut self, board: &Board) -> Result<Option<Action>> {
        self.nodes_searched = 0;
        if let Some(table) = self.table.as_mut() {
            table.new_search();
        }

        if Rules::is_terminal(board) {
            return Ok(None);
        }

        let player = Rules::current_player(board)?;
        let hash = self.zobrist.hash(board);
        let actions = self.ordered_actions(board, hash);

        let mut best: Option<(Action, i32)> = None;
        for action in actions {
            let (next, next_hash) = self.child(board, hash, action)?;

            // 剪枝时以当前最优值收紧窗口；严格更优的子节点值一定落在窗口内，是精确值
            let (alpha, beta) = match (self.prunes(), player, best) {
                (true, Mark::X, Some((_, value))) => (value, INF),
                (true, Mark::O, Some((_, value))) => (-INF, value),
                _ => (-INF, INF),
            };
            let value = match player {
                Mark::X => self.min_value(&next, next_hash, alpha, beta)?,
                Mark::O => self.max_value(&next, next_hash, alpha, beta)?,
            };

            let better = match (player, best) {
                (_, None) => true,
                (Mark::X, Some((_, best_value))) => value > best_value,
                (Mark::O, Some((_, best_value))) => value < best_value,
            };
            if better {
                best = Some((action, value));
            }

            // 已取得该方能达到的最好结果
            if self.prunes() && best.map(|(_, v)| v) == Some(ideal(player)) {
                break;
            }
        }

        if let (Some((action, value)), Some(table)) = (best, self.table.as_mut()) {
            table.store(hash, value, depth_of(board), Bound::Exact, Some(action));
        }

        debug!(
            "search finished: best={:?}, value={:?}, nodes={}, tt_hit_rate={:.3}",
            best.map(|(a, _)| a),
            best.map(|(_, v)| v),
            self.nodes_searched,
            self.table.as_ref().map(|t| t.hit_rate()).unwrap_or(0.0),
        );

        Ok(best.map(|(action, _)| action))
    }

    /// 局面的博弈论值（X 视角）
    pub fn evaluate(&mut self, board: &Board) -> Result<i32> {
        self.nodes_searched = 0;
        if let Some(table) = self.table.as_mut() {
            table.new_search();
        }

        let hash = self.zobrist.hash(board);
        if Rules::is_terminal(board) {
            return Ok(Rules::utility(board));
        }
        match Rules::current_player(board)? {
            Mark::X => self.max_value(board, hash, -INF, INF),
            Mark::O => self.min_value(board, hash, -INF, INF),
        }
    }

    /// 极大方节点
    fn max_value(&mut self, board: &Board, hash: u64, alpha: i32, beta: i32) -> Result<i32> {
        self.nodes_searched += 1;

        if Rules::is_terminal(board) {
            return Ok(Rules::utility(board));
        }

        let (mut alpha, beta) = match self.recall(hash, alpha, beta) {
            Recall::Value(score) => return Ok(score),
            Recall::Window(alpha, beta) => (alpha, beta),
        };
        let (alpha_lo, beta_hi) = (alpha, beta);

        let mut value = -INF;
        let mut best_action = None;
        for action in self.ordered_actions(board, hash) {
            let (next, next_hash) = self.child(board, hash, action)?;
            let score = self.min_value(&next, next_hash, alpha, beta)?;

            if score > value {
                value = score;
                best_action = Some(action);
            }
            if self.prunes() {
                if value >= beta {
                    break; // Beta 剪枝
                }
                alpha = alpha.max(value);
            }
        }

        self.store(hash, board, value, alpha_lo, beta_hi, best_action);
        Ok(value)
    }

    /// 极小方节点
    fn min_value(&mut self, board: &Board, hash: u64, alpha: i32, beta: i32) -> Result<i32> {
        self.nodes_searched += 1;

        if Rules::is_terminal(board) {
            return Ok(Rules::utility(board));
        }

        let (alpha, mut beta) = match self.recall(hash, alpha, beta) {
            Recall::Value(score) => return Ok(score),
            Recall::Window(alpha, beta) => (alpha, beta),
        };
        let (alpha_lo, beta_hi) = (alpha, beta);

        let mut value = INF;
        let mut best_action = None;
        for action in self.ordered_actions(board, hash) {
            let (next, next_hash) = self.child(board, hash, action)?;
            let score = self.max_value(&next, next_hash, alpha, beta)?;

            if score < value {
                value = score;
                best_action = Some(action);
            }
            if self.prunes() {
                if value <= alpha {
                    break; // Alpha 剪枝
                }
                beta = beta.min(value);
            }
        }

        self.store(hash, board, value, alpha_lo, beta_hi, best_action);
        Ok(value)
    }

    /// 落子后的棋盘及其增量哈希
    fn child(&self, board: &Board, hash: u64, action: Action) -> Result<(Board, u64)> {
        let next = Rules::apply_move(board, action)?;
        let next_hash = match next.get(action).and_then(|cell| cell.mark()) {
            Some(mark) => hash ^ self.zobrist.mark_hash(mark, action),
            None => hash,
        };
        Ok((next, next_hash))
    }

    fn prunes(&self) -> bool {
        self.config.strategy == SearchStrategy::AlphaBeta
    }

    /// 合法走法，置换表中记录的最佳走法排在最前
    fn ordered_actions(&mut self, board: &Board, hash: u64) -> Vec<Action> {
        let mut actions: Vec<Action> = Rules::legal_actions(board).into_iter().collect();

        let hint = self
            .table
            .as_mut()
            .and_then(|t| t.lookup(hash))
            .and_then(|slot| slot.best_action());
        if let Some(hint) = hint {
            if let Some(pos) = actions.iter().position(|a| *a == hint) {
                actions[..=pos].rotate_right(1);
            }
        }

        actions
    }

    /// 查询置换表并收紧窗口
    fn recall(&mut self, hash: u64, mut alpha: i32, mut beta: i32) -> Recall {
        let Some(slot) = self.table.as_mut().and_then(|t| t.lookup(hash)) else {
            return Recall::Window(alpha, beta);
        };

        let score = slot.score as i32;
        match slot.bound {
            Bound::Exact => return Recall::Value(score),
            Bound::Lower => alpha = alpha.max(score),
            Bound::Upper => beta = beta.min(score),
        }

        if alpha >= beta {
            Recall::Value(score)
        } else {
            Recall::Window(alpha, beta)
        }
    }

    /// 按搜索窗口判定条目类型后写入置换表
    fn store(
        &mut self,
        hash: u64,
        board: &Board,
        value: i32,
        alpha: i32,
        beta: i32,
        best_action: Option<Action>,
    ) {
        let Some(table) = self.table.as_mut() else {
            return;
        };

        let bound = if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        table.store(hash, value, depth_of(board), bound, best_action);
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 置换表统计信息（未启用时为 None）
    pub fn table_stats(&self) -> Option<TTStats> {
        self.table.as_ref().map(|t| t.stats())
    }
}

/// 置换表查询结果
enum Recall {
    /// 可直接返回的值
    Value(i32),
    /// 收紧后的搜索窗口
    Window(i32, i32),
}

/// 走子方能达到的最好效用值
fn ideal(player: Mark) -> i32 {
    match player {
        Mark::X => ttt_core::X_WIN_UTILITY,
        Mark::O => ttt_core::O_WIN_UTILITY,
    }
}

fn depth_of(board: &Board) -> u8 {
    board.empty_count() as u8
}
