//! Morris-Rust: a minimax / alpha-beta engine for a 23-point morris variant.
//!
//! Given a board, the side to play, a phase, and a depth, the engine picks the
//! best board reachable in one ply.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, piece limits, score sentinels
//! - [`topology`] - Neighbor and mill tables
//! - [`board`] - Board state, parsing, mill detection, color flipping
//! - [`movegen`] - Placement and movement move generation with captures
//! - [`eval`] - Static estimates for both phases
//! - [`search`] - Minimax and alpha-beta search
//! - [`engine`] - Terminal checks and perspective normalization
//! - [`driver`] - Board files, job lists, reports
//! - [`error`] - Input validation errors
//!
//! ## Example
//!
//! ```
//! use morris_rust::board::{Board, Side};
//! use morris_rust::engine::{Engine, EngineConfig, Outcome};
//! use morris_rust::movegen::Phase;
//! use morris_rust::search::Algorithm;
//!
//! let board: Board = "wwxxxxxxxxxxxxxbxxxxxxx".parse().unwrap();
//! let config = EngineConfig::new(Algorithm::Minimax, Phase::Placement, Side::White, 1);
//! let engine = Engine::new(config).unwrap();
//! match engine.run(&board) {
//!     Outcome::Move(r) => assert_eq!(r.board.to_string(), "WWWXXXXXXXXXXXXXXXXXXXX"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod board;
pub mod constants;
pub mod driver;
pub mod engine;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod search;
pub mod topology;
