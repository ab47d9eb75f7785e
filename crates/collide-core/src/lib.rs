// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! collide-core: deterministic 2D circle broad-phase over flat float buffers.
//!
//! The engine consumes a flat `&[f32]` of interleaved circle records and
//! returns every pair of overlapping circles exactly once, canonicalized and
//! sorted. Detection is a pure function of its input: no state survives a
//! call, the input buffer is never mutated, and identical input yields an
//! identical pair list.
//!
//! # Buffer layout
//!
//! The buffer is a sequence of records of `stride` lanes (`stride >= 3`).
//! Lanes `0..3` of each record are `x`, `y`, `radius`; lanes `3..stride` are
//! padding and ignored. A circle's identity is its record index. This layout
//! is the stable call boundary for embedders that construct buffers directly,
//! packed (`stride == 3`) or aligned (`stride == 4`).
//!
//! # Overlap contract
//!
//! Circles `a` and `b` overlap iff
//! `dx*dx + dy*dy <= (r_a + r_b)^2`, evaluated in `f32`. The comparison is
//! closed: exact tangency counts as a collision. The squared form in storage
//! precision is the contract; a square-rooted distance compares differently
//! near tangency and must not be substituted.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

mod circle;
mod detect;
mod grid;
mod input;
/// All-pairs O(N²) baseline, kept public as the correctness reference.
pub mod naive;
mod pair;

/// Parallel grid sweep (feature `parallel`).
#[cfg(feature = "parallel")]
pub mod parallel;

// Re-exports for stable public API
/// Circle value type and the closed overlap predicate.
pub use circle::Circle;
/// Detection entry points over flat buffers.
pub use detect::{detect, detect_count, detect_into, detect_into_with};
/// Grid tuning knobs.
pub use grid::GridConfig;
/// Buffer validation and decoding.
pub use input::{parse_circles, InputError, MIN_STRIDE};
/// Canonical unordered index pair.
pub use pair::CollisionPair;
