//! Sorted contiguous (multi)maps that double as piecewise interpolating functions,
//! no-std compatible (with `alloc`).
//!
//! A [`VectorMap`] keeps key-value nodes in one sorted vector, ordered by a
//! comparator and allowing duplicate keys. An [`InterpolatingMap`] wraps one
//! and evaluates the function the nodes define at any key, inside or outside
//! the domain, with one of three strategies:
//!
//! | Strategy                     | Between nodes                 | Outside the domain        |
//! |------------------------------|-------------------------------|---------------------------|
//! | [`PiecewiseConstant`]        | value of the last node <= x   | first / last value        |
//! | [`PiecewiseLinear`]          | straight line                 | first / last segment      |
//! | [`PiecewiseLogLinear`]       | straight line against ln(x)   | first / last segment      |
//!
//! Linear strategies promote integer and narrow float data to a float type no
//! narrower than their precision parameter (`f64` by default) before dividing.
//!
//! # Performance Scalings
//! Lookups and evaluations perform a bisection search over the nodes, which takes
//! a worst-case number of iterations of log2(number of nodes).
//! Insertions shift the tail of the vector.
//!
//! | Operation                    | RAM       | Cost                         |
//! |------------------------------|-----------|------------------------------|
//! | find / bounds / eval_one     | O(1)      | log2(n)                      |
//! | insert / erase               | O(1)      | log2(n) + O(n)               |
//! | positional access            | O(1)      | O(1)                         |
//!
//! # Example: Piecewise Linear
//! ```rust
//! use interpmap::PiecewiseLinearMap;
//!
//! // Nodes can come in any order
//! let mut f = PiecewiseLinearMap::from([(2.0_f64, 20.0_f64), (0.0, 0.0)]);
//! f.insert(1.0, 5.0);
//!
//! assert_eq!(f.eval_one(&0.5), 2.5);
//! assert_eq!(f.eval_one(&3.0), 35.0); // extrapolated along the last segment
//!
//! // Batch evaluation into caller-provided storage
//! let mut out = [0.0; 3];
//! f.eval(&[0.0, 1.5, 2.0], &mut out).unwrap();
//! assert_eq!(out, [0.0, 12.5, 20.0]);
//! ```
//!
//! # Example: Integer Data, Descending Keys
//! ```rust
//! use interpmap::{Greater, InterpolatingMap, PiecewiseConstant, PiecewiseLinear};
//!
//! let lin = InterpolatingMap::<u32, u32, PiecewiseLinear>::from([(0, 0), (3, 1)]);
//! assert!((lin.eval_one(&1) - 1.0 / 3.0).abs() < 1e-15);
//!
//! let mut depth: InterpolatingMap<i32, &str, PiecewiseConstant, Greater> =
//!     InterpolatingMap::with_comparator(Greater);
//! depth.insert_iter([(-200, "twilight"), (0, "surface"), (-1000, "midnight")]);
//!
//! assert_eq!(depth.first().map(|n| n.value), Some("surface"));
//! assert_eq!(depth.get(&-1000), Some(&"midnight"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod compare;
pub use compare::{Greater, KeyCompare, Less};

pub mod error;
pub use error::Error;

pub mod node;
pub use node::Node;

pub mod promote;
pub use promote::Promote;

pub mod search;

pub mod vector_map;
pub use vector_map::VectorMap;

pub mod interpolator;
pub use interpolator::{
    Bracket, Extrap, Interpolator, PiecewiseConstant, PiecewiseLinear, PiecewiseLogLinear,
};

pub mod interpolating_map;
pub use interpolating_map::{
    InterpolatingMap, PiecewiseConstantMap, PiecewiseLinearMap, PiecewiseLogLinearMap,
};

pub mod gradient;
pub use gradient::{Gradient, LinearGradient, StepGradient};

pub mod stats;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
