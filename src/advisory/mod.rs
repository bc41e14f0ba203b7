//! Advisory outputs derived from section scores and detected industry

pub mod recommendations;
pub mod roadmap;
pub mod roles;
pub mod salary;
pub mod summary;
