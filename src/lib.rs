#![warn(missing_docs)]

//! # `flowline`
//!
//! An interactive engine for [Numberlink](https://en.wikipedia.org/wiki/Numberlink)-style
//! connect-the-dots puzzles as posed in the mobile game Flow Free: a square grid holds
//! pairs of same-colored dots, and the player drags axis-aligned, non-crossing lines
//! until every pair is joined and every cell is covered.
//!
//! Begin by deserializing or constructing a [`Puzzle`] description and loading it into a
//! [`Session`]. The session is the single owner of the board; a host translates pointer
//! or touch input into `(row, col)` cell events and feeds them through
//! [`Session::pointer_down`], [`Session::pointer_enter`] and [`Session::pointer_up`],
//! then polls [`Session::is_solved`]. Rendering, input decoding and timing live in the
//! host; this crate only runs the rules.
//!
//! # Internals
//! The board is one owned cell matrix; there are no aliased copies, and every event is
//! processed to completion before the next, so no interior locking is needed. A draw
//! gesture is tracked as an ordered list of visited cells, which makes retraction a pop
//! and self-crossing a membership test. Connectivity of a pair is decided by
//! breadth-first search over that color's own cells, with the visited set keyed by the
//! packed row-major cell rank rather than any stringly coordinate encoding. Illegal
//! moves are deliberately not errors: user input routinely produces them, so they
//! resolve to documented no-ops and the API stays infallible after load.

pub use cell::{Cell, ColorId};
pub use grid::Grid;
pub use location::Location;
pub use puzzle::{EndpointSpec, InvalidPuzzle, Puzzle};
pub use session::{PurgePolicy, Session};

pub(crate) mod cell;
pub(crate) mod connect;
pub(crate) mod editor;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod puzzle;
pub(crate) mod session;
pub(crate) mod step;
