//! インメモリ実装

mod player;

pub use player::InMemoryPlayerRepository;
