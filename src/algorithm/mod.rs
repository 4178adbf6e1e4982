/// Candidate set bitset
pub mod bitset;
/// Collapse of a single cell and fallback substitution
pub mod collapse;
/// Placement and contradiction events delivered to the host
pub mod events;
/// Solver driver and host control surface
pub mod executor;
/// Single-hop constraint propagation
pub mod propagation;
/// Local-first minimum candidate cell selection
pub mod selection;
