mod coverage;
mod track_point;

pub use coverage::*;
pub use track_point::*;
