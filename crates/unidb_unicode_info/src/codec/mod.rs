//! Binary encoding of the database.

pub mod primitive;
pub mod ideograph_index;
pub mod records;
pub mod container;
