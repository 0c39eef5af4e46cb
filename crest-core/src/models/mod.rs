pub mod coverage;
pub mod fragment;
pub mod island;
pub mod read;
pub mod summary;

// re-export for cleaner imports
pub use self::coverage::{CoverageProfile, DepthRun};
pub use self::fragment::FragmentInterval;
pub use self::island::Island;
pub use self::read::{AlignedRead, Strand};
pub use self::summary::PeakSummary;
