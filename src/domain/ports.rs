use crate::domain::model::PrimeSequence;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// 建立或截斷檔案後寫入，不附加、不備份
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn count(&self) -> i64;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn generate(&self) -> Result<PrimeSequence>;
    fn serialize(&self, primes: &PrimeSequence) -> Result<Vec<u8>>;
    fn load(&self, data: Vec<u8>) -> Result<String>;
}
