pub mod assembler;
pub mod calculator;
