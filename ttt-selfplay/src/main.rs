use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_ai::{AiConfig, AiEngine, SearchStrategy, TranspositionTable};
use ttt_core::{Notation, INITIAL_NOTATION};
use ttt_selfplay::play_out;

/// 井字棋最优自对弈
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 起始局面记号，例如 "XX./OO./..."
    #[arg(long, default_value = INITIAL_NOTATION)]
    board: String,

    /// 搜索策略
    #[arg(long, value_enum, default_value_t = StrategyArg::AlphaBeta)]
    strategy: StrategyArg,

    /// 不使用置换表
    #[arg(long)]
    no_table: bool,

    /// 以 JSON 输出完整对局记录
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Exhaustive,
    AlphaBeta,
}

impl Args {
    fn ai_config(&self) -> AiConfig {
        let strategy = match self.strategy {
            StrategyArg::Exhaustive => SearchStrategy::Exhaustive,
            StrategyArg::AlphaBeta => SearchStrategy::AlphaBeta,
        };
        AiConfig {
            strategy,
            use_transposition: !self.no_table,
            table_entries: TranspositionTable::DEFAULT_ENTRIES,
        }
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_selfplay=info".parse()?))
        .init();

    let args = Args::parse();
    let start = Notation::parse(&args.board)
        .with_context(|| format!("无法解析起始局面: {}", args.board))?;

    let config = args.ai_config();
    info!("自对弈开始: board={}, config={:?}", args.board, config);

    let mut engine = AiEngine::new(config);
    let transcript = play_out(&mut engine, start)?;

    for mv in &transcript.moves {
        info!("{} -> {}  {}", mv.mark, mv.action, mv.notation);
    }
    if let Some(stats) = engine.table_stats() {
        info!(
            "置换表: used={}/{}, hit_rate={:.3}",
            stats.used,
            stats.entries,
            stats.hit_rate()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else {
        println!("{}", transcript.final_board);
        println!("{:?} (utility {})", transcript.outcome, transcript.utility);
    }

    Ok(())
}
