use std::path::PathBuf;

/// Caller input for one resolution.
///
/// The project directory is always explicit; callers that want the process
/// working directory pass it in themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub project_dir: PathBuf,
    /// Populate `Config::static_dir`
    pub enable_static: bool,
    /// Replaces the framework's default output directory
    pub output: Option<PathBuf>,
    /// Ignore file, relative to `project_dir`
    pub ignore_path: Option<PathBuf>,
}

impl ResolutionRequest {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            enable_static: false,
            output: None,
            ignore_path: None,
        }
    }

    pub fn with_static(mut self, enable_static: bool) -> Self {
        self.enable_static = enable_static;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_ignore_path(mut self, ignore_path: impl Into<PathBuf>) -> Self {
        self.ignore_path = Some(ignore_path.into());
        self
    }
}
