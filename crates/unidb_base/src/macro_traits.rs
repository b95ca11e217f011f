//! Contains traits implemented by the unidb derive macros


/// Trait to get the number of elements in an enum
pub trait EnumCountT {
    /// Count or number of element in an enum
    const COUNT : usize;
}

/// Trait to get an enum from a given index (its discriminant)
pub trait EnumFromIndexT: Sized {
    /// Try to convert an index to an enum
    fn from_idx(idx: usize) -> Option<Self>;

    /// Try to convert an index to an enum, if it couldn't convert it, return a default value
    fn from_idx_or(idx: usize, default: Self) -> Self {
        Self::from_idx(idx).unwrap_or(default)
    }
}

/// Trait to parse an enum from the name it is known by in the data files.
pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice.
    fn parse(s: &str) -> Option<Self>;
}

/// Inverse of [`EnumFromNameT`], get the name an enum value is known by in the data files.
pub trait EnumToNameT {
    /// Get the name of the value.
    fn name(&self) -> &'static str;
}
