mod issue;
mod options;
mod project;
mod stats;
mod timeline;

pub use issue::{Issue, IssuePage};
pub use options::{FilterOptions, NamedOption};
pub use project::Project;
pub use stats::{BacklogAgingRow, CountPoint, DashboardStats};
pub use timeline::{DatedCountPoint, TimelineData};
