pub mod list;
pub mod scaffold;

pub use list::UriConfigListing;
pub use scaffold::{ScaffoldInput, ScaffoldOptions, ScaffoldOutcome};
