#[macro_use]
mod util;

mod parser;
mod session;
