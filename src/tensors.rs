//! Dense matrices over the rationals and the elimination algorithms built on them.

pub mod matrix;
