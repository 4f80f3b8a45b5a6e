//! # Tests combining vectors and matrices with different element types.
//!
//! Convention for module names:
//!
//! * `integer`: machine integers, exact
//! * `rational`: exact rationals from `relp-num`
//! * `float`: `f64`, only with values that are represented exactly
pub mod float;
pub mod integer;
