//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be stored
//! as matrix entries, and the runtime tag describing them.

/// Element types known to the matrix archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DataType {
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
    U32 = 4,
    U64 = 5,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::U32 => write!(f, "u32"),
            DataType::U64 => write!(f, "u64"),
        }
    }
}

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: entries are read out by value
/// - PartialEq: entries can be compared for equality
/// - Debug: entries can be reported in diagnostics
/// - 'static: iterators hand out plain references to stored entries
pub trait MatrixElement: Copy + PartialEq + core::fmt::Debug + 'static {
    /// Get the DataType representation for this element type
    fn data_type() -> DataType;

    /// The additive identity, used to fill dense storage
    fn zero() -> Self;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn data_type() -> DataType {
                    DataType::$variant
                }

                fn zero() -> Self {
                    0 as $ty
                }
            }
        )*
    };
}

impl_matrix_element! {
    f32 => F32,
    f64 => F64,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
}
