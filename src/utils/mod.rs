// Utility functions shared by the optimization engines

pub mod distance;
pub mod events_io;
pub mod profit_matrix;
