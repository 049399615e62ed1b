use crate::core::primes;
use crate::core::{ConfigProvider, Pipeline, PrimeSequence, Storage};
use crate::utils::error::Result;

pub struct JsonPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> JsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for JsonPipeline<S, C> {
    fn generate(&self) -> Result<PrimeSequence> {
        let count = self.config.count();
        tracing::debug!("Generating {} primes by trial division", count);
        Ok(PrimeSequence::from(primes::generate(count)))
    }

    fn serialize(&self, primes: &PrimeSequence) -> Result<Vec<u8>> {
        // 輸出為扁平陣列，不包任何外層物件
        let data = serde_json::to_vec(primes)?;
        tracing::debug!("Serialized {} primes into {} bytes", primes.len(), data.len());
        Ok(data)
    }

    fn load(&self, data: Vec<u8>) -> Result<String> {
        let output_path = self.config.output_path();
        self.storage.write_file(output_path, &data)?;
        Ok(output_path.to_string())
    }
}
