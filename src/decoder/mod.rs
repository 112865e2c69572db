//! Random-key decoding of candidate vectors into vehicle routes.
//!
//! A candidate vector of length `N + 2M` holds `N` customer priority keys
//! followed by `M` reference points (all x-coordinates, then all
//! y-coordinates). Decoding visits customers in ascending key order and
//! attaches each one to its nearest reference point in normalized space,
//! one vehicle per reference point.
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"
//! - Ai & Kachitvichyanukul (2009), "A particle swarm optimization for the
//!   vehicle routing problem with simultaneous pickup and delivery"

mod particle;

pub use particle::{vector_length, vehicle_count, ParticleDecoder};
