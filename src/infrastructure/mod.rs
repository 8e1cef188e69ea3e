pub mod database;
pub mod repositories;
pub mod security;
pub mod seed;
pub mod storage;
pub mod time;
pub mod util;
