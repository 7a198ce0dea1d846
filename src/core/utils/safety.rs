//! Zero-Cost Safety Macros
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Callers must have validated the index against the lattice first; the
//! occupancy grid only reaches `fast!` after `Coord` bounds checks.
//!
//! Usage:
//! ```rust
//! use leath_engine::fast;
//!
//! let idx = 2;
//!
//! let occupancy = vec![0u8, 1, 1, 0, 0];
//! // Read: fast!(slice, [index])
//! let val = *fast!(occupancy, [idx]);
//! assert_eq!(val, 1);
//!
//! let mut bits = vec![0u8; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(bits, [idx] = 1);
//! assert_eq!(bits[idx], 1);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
