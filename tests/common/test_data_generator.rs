use rand::Rng;
use bitkit_rust::bitkit_common_rs::bytes::bit_array::BitArray;

/// Test data generator for bit array testing
pub struct TestDataGenerator {
    rng: rand::rngs::ThreadRng,
}

impl TestDataGenerator {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    /// Random non-negative integer across the full i64 range
    pub fn random_int(&mut self) -> i64 {
        self.rng.gen_range(0..=i64::MAX)
    }

    /// Random binary string of 1..=max_len characters
    pub fn random_binary_string(&mut self, max_len: usize) -> String {
        let len = self.rng.gen_range(1..=max_len);
        (0..len)
            .map(|_| if self.rng.gen_bool(0.5) { '1' } else { '0' })
            .collect()
    }

    pub fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.rng.gen()).collect()
    }

    pub fn random_bit_array(&mut self, byte_len: usize) -> BitArray {
        BitArray::from_bytes(&self.random_bytes(byte_len))
    }
}
