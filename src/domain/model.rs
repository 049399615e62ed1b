use serde::{Deserialize, Serialize};

/// 遞增排列的質數序列，序列化為單純的 JSON 陣列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimeSequence(pub Vec<u64>);

impl PrimeSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn largest(&self) -> Option<u64> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl From<Vec<u64>> for PrimeSequence {
    fn from(primes: Vec<u64>) -> Self {
        Self(primes)
    }
}

/// 程式進入點所需的完整設定，輸出路徑已套用預設值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub count: i64,
    pub output_path: String,
}

impl RunConfig {
    pub fn new(count: i64, output_path: impl Into<String>) -> Self {
        Self {
            count,
            output_path: output_path.into(),
        }
    }

    /// 產生前輸出的提示訊息
    pub fn status_line(&self) -> String {
        format!(
            "Generating the first {} primes, outputting at {}",
            self.count, self.output_path
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: String,
    pub primes_written: usize,
    pub largest_prime: Option<u64>,
}
