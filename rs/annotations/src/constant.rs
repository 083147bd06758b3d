/// Page size for list calls against the API server.
pub const LIST_PAGE_SIZE: u32 = 500;

pub const DEFAULT_WORKLOAD: &str = "all";

pub const NO_ANNOTATIONS: &str = "No annotations";
