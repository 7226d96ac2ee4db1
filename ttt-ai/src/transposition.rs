//! 置换表
//!
//! 按 Zobrist 哈希缓存已展开的棋盘及其值。
//! 搜索总是走到终局，所以条目深度取棋盘剩余空格数。

use ttt_core::Action;

/// 条目所记录值的性质
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    /// 真实值
    Exact,
    /// 真实值不小于记录值（发生了 Beta 截断）
    Lower,
    /// 真实值不大于记录值（所有分支都低于 Alpha）
    Upper,
}

/// 单个槽位
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    /// 哈希高 32 位，区分落在同一槽位的不同棋盘
    check: u32,
    pub score: i8,
    pub bound: Bound,
    /// 剩余空格数
    depth: u8,
    /// 写入时的搜索代数
    generation: u8,
    best: Option<Action>,
}

impl Slot {
    pub fn best_action(&self) -> Option<Action> {
        self.best
    }
}

/// 置换表
///
/// 由 `AiEngine` 独占持有，槽位数固定
pub struct TranspositionTable {
    slots: Vec<Option<Slot>>,
    generation: u8,
    hits: u64,
    lookups: u64,
}

impl TranspositionTable {
    /// 井字棋合法局面不足 6000 个，默认 32768 个槽位足够
    pub const DEFAULT_ENTRIES: usize = 1 << 15;

    /// 创建指定槽位数的置换表（至少 1 个）
    pub fn new(entries: usize) -> Self {
        Self {
            slots: vec![None; entries.max(1)],
            generation: 0,
            hits: 0,
            lookups: 0,
        }
    }

    fn locate(&self, hash: u64) -> (usize, u32) {
        let index = (hash % self.slots.len() as u64) as usize;
        (index, (hash >> 32) as u32)
    }

    /// 查询棋盘对应的槽位
    pub(crate) fn lookup(&mut self, hash: u64) -> Option<Slot> {
        self.lookups += 1;

        let (index, check) = self.locate(hash);
        let slot = self.slots[index].filter(|slot| slot.check == check)?;
        self.hits += 1;
        Some(slot)
    }

    /// 写入槽位
    ///
    /// 空槽、上一代的槽或深度不大于新条目的槽会被覆盖
    pub(crate) fn store(
        &mut self,
        hash: u64,
        score: i32,
        depth: u8,
        bound: Bound,
        best: Option<Action>,
    ) {
        let (index, check) = self.locate(hash);
        let generation = self.generation;

        let replace = self.slots[index]
            .map_or(true, |old| old.generation != generation || old.depth <= depth);
        if replace {
            self.slots[index] = Some(Slot {
                check,
                score: score.clamp(i8::MIN as i32, i8::MAX as i32) as i8,
                bound,
                depth,
                generation,
                best,
            });
        }
    }

    /// 开始新一轮搜索
    pub fn new_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// 命中率
    pub fn hit_rate(&self) -> f64 {
        self.stats().hit_rate()
    }

    /// 统计信息
    pub fn stats(&self) -> TTStats {
        TTStats {
            entries: self.slots.len(),
            used: self.slots.iter().flatten().count(),
            hits: self.hits,
            lookups: self.lookups,
        }
    }
}

/// 置换表统计信息
#[derive(Debug, Clone)]
pub struct TTStats {
    pub entries: usize,
    pub used: usize,
    pub hits: u64,
    pub lookups: u64,
}

impl TTStats {
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}
