use crate::config::DEFAULT_OUTPUT_PATH;
use crate::utils::error::{PrimeError, Result};
use std::io::{BufRead, Write};

pub const COUNT_QUESTION: &str = "Enter the number of primes to compute: ";

// 只去掉行尾換行，其餘內容原樣保留
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PrimeError::InputError {
            message: "input ended before an answer was given".to_string(),
        });
    }

    let answer = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    Ok(answer.to_string())
}

/// 詢問要產生的質數數量，非整數輸入直接視為錯誤
pub fn prompt_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    let line = read_line(input, output, COUNT_QUESTION)?;
    let answer = line.trim();
    answer.parse::<i64>().map_err(|e| PrimeError::InputError {
        message: format!("'{}' is not an integer ({})", answer, e),
    })
}

/// 詢問輸出路徑並原樣回傳；只有完全空白的回答（空字串）才會由 resolve_output_path 換成預設值
pub fn prompt_output_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    let question = format!(
        "Enter the output file location (default {}): ",
        DEFAULT_OUTPUT_PATH
    );
    read_line(input, output, &question)
}
