//! different utility modules used by the polynomial task runner
/// tiny module to install the terminal logger
pub mod logger;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into nested maps
pub mod task_parser;
/// turn a parsed task document into named polynomials and run options
pub mod poly_task;
