//! Rich diagnostic error types for the Wumpus World knowledge base.
//!
//! Each concern defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly what went
//! wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

use crate::world::{Orientation, Room};

/// Top-level error type for the knowledge base.
///
/// Each variant wraps a concern-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum KbError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Inconsistent(#[from] InconsistencyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Solver(#[from] SolverError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid cave dimensions: {width}x{height}")]
    #[diagnostic(
        code(wumpus::config::dimensions),
        help("Cave width and height must both be at least 1.")
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("start room {room} lies outside the {width}x{height} cave")]
    #[diagnostic(
        code(wumpus::config::start_out_of_bounds),
        help("Rooms are 1-based: choose a start with 1 <= x <= width and 1 <= y <= height.")
    )]
    StartOutOfBounds { room: Room, width: u32, height: u32 },

    #[error("failed to read knowledge base config: {path}")]
    #[diagnostic(
        code(wumpus::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base config: {message}")]
    #[diagnostic(
        code(wumpus::config::parse),
        help("Check the TOML syntax and field names in the config file.")
    )]
    Parse { message: String },

    #[error("failed to serialize knowledge base config: {message}")]
    #[diagnostic(
        code(wumpus::config::serialize),
        help("Every config field must be representable as TOML.")
    )]
    Serialize { message: String },

    #[error("failed to write knowledge base config: {path}")]
    #[diagnostic(
        code(wumpus::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Inconsistency errors
// ---------------------------------------------------------------------------

/// A query that must have exactly one answer had zero or several.
#[derive(Debug, Error, Diagnostic)]
pub enum InconsistencyError {
    #[error("inconsistent theory at t={time}: {} rooms entailed as the agent location", .candidates.len())]
    #[diagnostic(
        code(wumpus::theory::position),
        help(
            "Exactly one location atom should be entailed per time step. \
             Zero usually means the position was never told (successor-state \
             axioms disabled without record_position); several usually means \
             contradictory facts made the theory unsatisfiable."
        )
    )]
    Position { time: u32, candidates: Vec<Room> },

    #[error("inconsistent theory at t={time}: {} orientations entailed", .candidates.len())]
    #[diagnostic(
        code(wumpus::theory::orientation),
        help(
            "Exactly one facing atom should be entailed per time step. \
             Check that every step's action was recorded and that the \
             temporal axioms for the previous step were told."
        )
    )]
    Orientation {
        time: u32,
        candidates: Vec<Orientation>,
    },
}

// ---------------------------------------------------------------------------
// Solver errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SolverError {
    #[error("model enumeration over {count} symbols exceeds the limit of {limit}")]
    #[diagnostic(
        code(wumpus::solver::too_many_symbols),
        help(
            "Truth-table checking enumerates 2^n models. Use the dpll or \
             optimized-dpll solver for theories of this size, or raise \
             `truth_table_limit` in KbConfig."
        )
    )]
    TooManySymbols { count: usize, limit: usize },
}

/// Convenience alias for functions returning knowledge base results.
pub type KbResult<T> = std::result::Result<T, KbError>;

/// Result type for decision procedures.
pub type SolverResult<T> = std::result::Result<T, SolverError>;
