//! 对局控制
//!
//! 由同一个 AI 引擎轮流为双方选择走法，直到终局

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;
use ttt_ai::AiEngine;
use ttt_core::{Action, Board, GameError, Mark, Notation, Outcome, Rules};

/// 自对弈错误
#[derive(Error, Debug)]
pub enum SelfPlayError {
    /// 规则错误（非法起始局面等）
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// 引擎在未结束的局面上没有给出走法
    #[error("Engine returned no action for a non-terminal board:\n{board}")]
    NoAction { board: Board },
}

/// 走法记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// 走子方
    pub mark: Mark,
    /// 落子坐标
    pub action: Action,
    /// 走子后的棋盘记号
    pub notation: String,
}

/// 完整的对局记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTranscript {
    /// 初始局面记号
    pub initial: String,
    /// 走法列表
    pub moves: Vec<PlayedMove>,
    /// 对局结果
    pub outcome: Outcome,
    /// 终局效用值（X 视角）
    pub utility: i32,
    /// 最终棋盘
    #[serde(skip)]
    pub final_board: Board,
}

/// 从给定局面开始自对弈到终局
pub fn play_out(engine: &mut AiEngine, start: Board) -> Result<GameTranscript, SelfPlayError> {
    // 非法局面在第一步之前就报错
    if !Rules::is_terminal(&start) {
        Rules::current_player(&start)?;
    }

    let mut board = start;
    let mut moves = Vec::new();

    while !Rules::is_terminal(&board) {
        let mark = Rules::current_player(&board)?;
        let action = engine
            .search(&board)?
            .ok_or(SelfPlayError::NoAction { board })?;

        board = Rules::apply_move(&board, action)?;
        trace!(
            "{} plays {} ({} nodes searched)",
            mark,
            action,
            engine.nodes_searched()
        );

        moves.push(PlayedMove {
            mark,
            action,
            notation: Notation::to_string(&board),
        });
    }

    Ok(GameTranscript {
        initial: Notation::to_string(&start),
        moves,
        outcome: Rules::outcome(&board),
        utility: Rules::utility(&board),
        final_board: board,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_ai::{AiConfig, SearchStrategy};

    #[test]
    fn test_play_out_from_empty_board() {
        let mut engine = AiEngine::new(AiConfig::default());
        let transcript = play_out(&mut engine, Board::initial()).unwrap();

        assert_eq!(transcript.outcome, Outcome::Draw);
        assert_eq!(transcript.utility, 0);
        assert_eq!(transcript.moves.len(), 9);
        assert_eq!(transcript.initial, ".../.../...");

        // 双方交替走子，X 先手
        for (i, mv) in transcript.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(mv.mark, expected);
        }
        assert_eq!(
            transcript.moves.last().map(|m| m.notation.clone()),
            Some(Notation::to_string(&transcript.final_board))
        );
    }

    #[test]
    fn test_play_out_winning_position() {
        let mut engine = AiEngine::from_strategy(SearchStrategy::Exhaustive);
        let start = Notation::parse("XX./OO./...").unwrap();

        let transcript = play_out(&mut engine, start).unwrap();

        assert_eq!(transcript.outcome, Outcome::XWins);
        assert_eq!(transcript.utility, 1);
        assert_eq!(transcript.moves.len(), 1);
        assert_eq!(transcript.moves[0].mark, Mark::X);
        assert_eq!(transcript.moves[0].action, Action::new_unchecked(0, 2));
    }

    #[test]
    fn test_play_out_o_to_move_wins() {
        let mut engine = AiEngine::new(AiConfig::default());
        let start = Notation::parse("XX./OO./X..").unwrap();

        let transcript = play_out(&mut engine, start).unwrap();

        assert_eq!(transcript.outcome, Outcome::OWins);
        assert_eq!(transcript.utility, -1);
        assert_eq!(transcript.moves[0].mark, Mark::O);
    }

    #[test]
    fn test_play_out_terminal_start() {
        let mut engine = AiEngine::new(AiConfig::plain());
        let start = Notation::parse("XXX/OO./...").unwrap();

        let transcript = play_out(&mut engine, start).unwrap();
        assert!(transcript.moves.is_empty());
        assert_eq!(transcript.outcome, Outcome::XWins);
    }

    #[test]
    fn test_play_out_invalid_start() {
        let mut engine = AiEngine::new(AiConfig::default());
        let start = Notation::parse("XX./X../...").unwrap();

        let err = play_out(&mut engine, start).unwrap_err();
        assert!(matches!(
            err,
            SelfPlayError::Game(GameError::InvalidState { x_count: 3, o_count: 0 })
        ));
    }

    #[test]
    fn test_transcript_json() {
        let mut engine = AiEngine::new(AiConfig::default());
        let start = Notation::parse("XOX/XOO/.X.").unwrap();
        let transcript = play_out(&mut engine, start).unwrap();

        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["initial"], "XOX/XOO/.X.");
        assert!(json.get("final_board").is_none());
        assert!(json["moves"].as_array().is_some());
    }
}
