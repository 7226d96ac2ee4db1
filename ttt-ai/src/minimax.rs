//! 穷举 Minimax
//!
//! 两个互相递归的估值函数（极大 / 极小）加上选择最佳走法的入口。
//! 无剪枝、无缓存，完整遍历剩余博弈树（最多 9 层）。

use ttt_core::{Action, Board, Mark, Result, Rules};

/// 当前走子方的最佳走法，终局返回 None
///
/// X 选择使极小值最大的走法，O 选择使极大值最小的走法；
/// 只有严格更优时才替换，因此并列时保留行优先顺序中的第一个。
pub fn best_action(board: &Board) -> Result<Option<Action>> {
    if Rules::is_terminal(board) {
        return Ok(None);
    }

    let player = Rules::current_player(board)?;
    let mut best: Option<(Action, i32)> = None;

    for action in Rules::legal_actions(board) {
        let next = Rules::apply_move(board, action)?;
        let value = match player {
            Mark::X => minimizing_value(&next)?,
            Mark::O => maximizing_value(&next)?,
        };

        let better = match (player, best) {
            (_, None) => true,
            (Mark::X, Some((_, best_value))) => value > best_value,
            (Mark::O, Some((_, best_value))) => value < best_value,
        };
        if better {
            best = Some((action, value));
        }
    }

    Ok(best.map(|(action, _)| action))
}

/// 极大方（X）走子时的局面值
pub fn maximizing_value(board: &Board) -> Result<i32> {
    if Rules::is_terminal(board) {
        return Ok(Rules::utility(board));
    }

    let mut value = i32::MIN;
    for action in Rules::legal_actions(board) {
        value = value.max(minimizing_value(&Rules::apply_move(board, action)?)?);
    }
    Ok(value)
}

/// 极小方（O）走子时的局面值
pub fn minimizing_value(board: &Board) -> Result<i32> {
    if Rules::is_terminal(board) {
        return Ok(Rules::utility(board));
    }

    let mut value = i32::MAX;
    for action in Rules::legal_actions(board) {
        value = value.min(maximizing_value(&Rules::apply_move(board, action)?)?);
    }
    Ok(value)
}
