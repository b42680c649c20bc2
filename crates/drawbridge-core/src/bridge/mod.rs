//! The two converters that make up the marshalling boundary.
//!
//! Both are stateless single-call operations against the scripting stack;
//! the only state involved is the ownership of a native image, which
//! transfers to the script domain exactly once, at push time.

mod color;
mod image;
