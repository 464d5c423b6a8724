//! Type definitions for dotted paths.

/// A step in a dotted path.
pub type PathStep = String;

/// A parsed dotted path.
pub type Path = Vec<PathStep>;
