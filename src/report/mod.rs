pub mod generator;
pub mod model;
pub mod render;

pub use generator::ReportGenerator;
pub use model::{
    ChangeEntry, ChangeKind, ChangeSet, ChangeStats, CommitRecord, NO_REMOTE, RepositoryInfo,
    TrackingStatus,
};
pub use render::{render_report, report_file_name};
