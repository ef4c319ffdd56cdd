pub mod constants;
pub mod multi_byte;
pub mod single_byte;
