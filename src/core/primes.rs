/// 以試除法產生前 `n` 個質數（由 2 開始，遞增）。
///
/// `n <= 0` 時回傳空序列，負數與零同樣處理，不視為錯誤。
/// 除了 2 以外只檢查奇數候選值。
pub fn generate(n: i64) -> Vec<u64> {
    if n < 1 {
        return Vec::new();
    }

    let target = usize::try_from(n).unwrap_or(usize::MAX);
    let mut primes = Vec::with_capacity(target.min(1 << 20));
    primes.push(2);

    let mut candidate: u64 = 3;
    while primes.len() < target {
        if has_no_divisor(candidate) {
            primes.push(candidate);
        }
        candidate += 2;
    }

    primes
}

/// 單一整數的試除法質數判斷。
pub fn is_prime(value: u64) -> bool {
    match value {
        0 | 1 => false,
        2 => true,
        v if v % 2 == 0 => false,
        v => has_no_divisor(v),
    }
}

// 除數範圍 2..floor(sqrt(i))+1，上界不含，完全平方數會被 floor(sqrt(i)) 整除
fn has_no_divisor(candidate: u64) -> bool {
    let limit = candidate.isqrt() + 1;
    (2..limit).all(|divisor| candidate % divisor != 0)
}
