pub mod code_sniffer;
pub mod traits;

pub use code_sniffer::CodeSnifferFormatter;
