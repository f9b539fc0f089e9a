#![allow(dead_code)]

pub mod test_data_generator;

pub use test_data_generator::TestDataGenerator;
