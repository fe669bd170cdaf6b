pub mod intersect;
pub mod scheduler;
