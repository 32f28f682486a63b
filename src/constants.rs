/// 种子哈希的多项式基数（按 UTF-16 码元迭代）
pub const SEED_HASH_BASE: i32 = 31;

/// LCG 乘数
pub const LCG_MULTIPLIER: u64 = 9301;

/// LCG 增量
pub const LCG_INCREMENT: u64 = 49297;

/// LCG 模数，next_float = state / LCG_MODULUS
pub const LCG_MODULUS: u64 = 233_280;

/// 变量扰动下界系数：min = max(1, floor(0.5 * v))
pub const VALUE_LOWER_FACTOR: f64 = 0.5;

/// 变量扰动上界系数：max = ceil(1.5 * v)
pub const VALUE_UPPER_FACTOR: f64 = 1.5;

/// 生成值的绝对下界
pub const VALUE_FLOOR: i64 = 1;

/// 每题干扰项数
pub const DISTRACTOR_COUNT: usize = 3;

/// 兜底干扰项随机偏移下界（含）
pub const FALLBACK_OFFSET_MIN: i64 = 1;

/// 兜底干扰项随机偏移上界（不含）
pub const FALLBACK_OFFSET_MAX: i64 = 10;

/// 公式求值跳过哨兵：公式为空或等于该字符串时不求值，直接视为 null
pub const NULL_FORMULA_SENTINEL: &str = "null";
