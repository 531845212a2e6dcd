//! Scan orchestrator
//!
//! Drives one scan through its phases, reports progress to subscribers,
//! isolates failures in the documentation, dependency and architecture
//! phases, and persists the assembled result.
//!
//! Those three phases each run as their own task. A phase that panics is
//! replaced by its default value; unreadable or malformed files inside a
//! phase are skipped by the phase itself.

use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::models::{DependencyReport, ProjectOverview, ProjectScan, SCAN_FORMAT_VERSION};
use super::phase::ScanPhase;
use crate::architecture::{ArchitectureContext, ArchitectureSynthesizer};
use crate::config::ScanConfig;
use crate::documentation::analyze_documentation;
use crate::error::ScoutResult;
use crate::llm::TextCompletion;
use crate::storage::{ScanStorage, project_id_for_path};
use crate::workspace::dependencies::{
    categories_from_manifest, detect_package_manager, parse_cargo_toml, parse_go_mod,
    parse_pyproject_toml, parse_requirements_txt,
};
use crate::workspace::models::{DependencyCategories, FileRecord};
use crate::workspace::{
    IgnoreRules, Manifests, PackageManifest, classify, read_lossy_async, scan,
};

/// Default bound on a single completion call
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(120);

/// Progress callback: phase, percentage (0-100) and a human-readable message
pub type ProgressCallback = Arc<dyn Fn(ScanPhase, u8, &str) + Send + Sync>;

/// Inputs of a single scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub project_path: PathBuf,
    pub project_id: String,
    pub project_name: String,
    /// Ignore any stored scan and rescan
    pub force: bool,
    /// Do not call the text-completion capability
    pub skip_llm: bool,
    /// Overrides the configured file cap
    pub max_files: Option<usize>,
    /// Overrides the configured line-count size limit
    pub max_file_size_bytes: Option<u64>,
}

impl ScanOptions {
    /// Options for `project_path` with the ID and name derived from the path
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        let project_path = project_path.into();
        let project_id = project_id_for_path(&project_path);
        let project_name = project_path
            .canonicalize()
            .unwrap_or_else(|_| project_path.clone())
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| project_id.clone());

        Self {
            project_path,
            project_id,
            project_name,
            force: false,
            skip_llm: false,
            max_files: None,
            max_file_size_bytes: None,
        }
    }

    pub fn with_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn skip_llm(mut self, skip_llm: bool) -> Self {
        self.skip_llm = skip_llm;
        self
    }

    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = Some(max_files);
        self
    }

    pub fn max_file_size_bytes(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = Some(bytes);
        self
    }
}

/// Runs scans against a storage backend and an optional completion capability
pub struct ScanOrchestrator {
    storage: Arc<dyn ScanStorage>,
    synthesizer: ArchitectureSynthesizer,
    completion: Option<Arc<dyn TextCompletion>>,
    scan_config: ScanConfig,
    subscribers: Vec<ProgressCallback>,
}

impl ScanOrchestrator {
    pub fn new(
        storage: Arc<dyn ScanStorage>,
        completion: Option<Arc<dyn TextCompletion>>,
    ) -> Self {
        Self {
            storage,
            synthesizer: ArchitectureSynthesizer::new(completion.clone(), DEFAULT_LLM_TIMEOUT),
            completion,
            scan_config: ScanConfig::default(),
            subscribers: Vec::new(),
        }
    }

    /// Replace the scanner limits and exclusions
    pub fn with_scan_config(mut self, config: ScanConfig) -> Self {
        self.scan_config = config;
        self
    }

    /// Bound each completion call
    pub fn with_llm_timeout(mut self, timeout: Duration) -> Self {
        self.synthesizer = ArchitectureSynthesizer::new(self.completion.clone(), timeout);
        self
    }

    /// Register a progress callback, invoked on every phase transition
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(ScanPhase, u8, &str) + Send + Sync + 'static,
    {
        self.subscribers.push(Arc::new(callback));
    }

    fn report(&self, phase: ScanPhase, message: &str) {
        info!("[{}] {}", phase, message);
        for subscriber in &self.subscribers {
            subscriber(phase, phase.percentage(), message);
        }
    }

    /// Scan a project end to end, or return its stored scan unless `force`
    /// is set. Only a failed save is returned as an error.
    pub async fn perform_full_scan(&self, options: &ScanOptions) -> ScoutResult<ProjectScan> {
        self.report(
            ScanPhase::Initializing,
            &format!("Preparing scan of {}", options.project_name),
        );

        if !options.force {
            if let Some(cached) = self.storage.load(&options.project_id).await {
                self.report(
                    ScanPhase::Cached,
                    &format!("Using stored scan from {}", cached.scanned_at.to_rfc3339()),
                );
                return Ok(cached);
            }
        }

        let root = options
            .project_path
            .canonicalize()
            .unwrap_or_else(|_| options.project_path.clone());

        self.report(ScanPhase::Scanning, "Walking project tree");
        let (files, manifests) = self.scan_tree(&root, options).await?;
        debug!("Scanned {} files under {}", files.len(), root.display());
        let files = Arc::new(files);

        self.report(
            ScanPhase::Analyzing,
            &format!("Classifying {} files", files.len()),
        );
        let classification = classify(&files, &manifests);

        self.report(ScanPhase::Documentation, "Analyzing documentation");
        let documentation = {
            let (root, files) = (root.clone(), Arc::clone(&files));
            isolate(ScanPhase::Documentation, async move {
                analyze_documentation(&root, &files).await
            })
            .await
        };

        self.report(ScanPhase::Dependencies, "Collecting dependencies");
        let dependencies = {
            let (root, files) = (root.clone(), Arc::clone(&files));
            let package = manifests.package.clone();
            isolate(ScanPhase::Dependencies, async move {
                collect_dependencies(&root, &files, package.as_ref()).await
            })
            .await
        };

        self.report(ScanPhase::Architecture, "Synthesizing architecture");
        let architecture = {
            let context =
                ArchitectureContext::build(&options.project_name, &classification, &files);
            let synthesizer = self.synthesizer.clone();
            let skip_llm = options.skip_llm;
            isolate(ScanPhase::Architecture, async move {
                synthesizer.synthesize(&context, skip_llm).await
            })
            .await
        };

        self.report(ScanPhase::Finalizing, "Assembling scan");
        let summary = if architecture.description.trim().is_empty() {
            ProjectOverview::default_summary(
                classification.project_type,
                &classification.languages,
            )
        } else {
            architecture.description.clone()
        };

        let scan = ProjectScan {
            version: SCAN_FORMAT_VERSION.to_string(),
            scanned_at: Utc::now(),
            project_id: options.project_id.clone(),
            project_name: options.project_name.clone(),
            project_path: root.display().to_string(),
            overview: ProjectOverview {
                summary,
                project_type: classification.project_type,
                languages: classification.languages.clone(),
                frameworks: classification.framework_names(),
                package_manager: classification.package_manager,
                total_files: classification.total_files,
                total_lines: classification.total_lines,
            },
            directory_structure: classification.directories,
            key_files: classification.key_files,
            documentation,
            dependencies,
            architecture,
        };

        self.report(ScanPhase::Saving, "Saving scan");
        self.storage
            .save(&scan)
            .await
            .map_err(|e| e.with_context(format!("Saving scan {}", scan.project_id)))?;

        self.report(
            ScanPhase::Complete,
            &format!("Scanned {} files", scan.overview.total_files),
        );
        Ok(scan)
    }

    /// Walk the tree and read root manifests off the async runtime
    async fn scan_tree(
        &self,
        root: &Path,
        options: &ScanOptions,
    ) -> ScoutResult<(Vec<FileRecord>, Manifests)> {
        let root = root.to_path_buf();
        let max_files = options.max_files.unwrap_or(self.scan_config.max_files);
        let max_file_size = options
            .max_file_size_bytes
            .unwrap_or(self.scan_config.max_file_size_bytes);
        let exclude_patterns = self.scan_config.exclude_patterns.clone();
        let respect_gitignore = self.scan_config.respect_gitignore;

        let result = tokio::task::spawn_blocking(move || {
            let rules = IgnoreRules::build(&root, &exclude_patterns, respect_gitignore);
            let files = scan(&root, &rules, max_files, max_file_size);
            (files, Manifests::read(&root))
        })
        .await?;
        Ok(result)
    }
}

/// Run one phase as its own task, substituting the phase's default value if
/// the task panics
async fn isolate<T, F>(phase: ScanPhase, phase_future: F) -> T
where
    T: Default + Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    match tokio::spawn(phase_future).await {
        Ok(value) => value,
        Err(e) => {
            warn!("{} phase failed, continuing without it: {}", phase, e);
            T::default()
        }
    }
}

/// Merge the declared dependencies of every manifest at the project root.
/// A manifest that cannot be read is skipped; the others still count.
pub async fn collect_dependencies(
    root: &Path,
    files: &[FileRecord],
    package: Option<&PackageManifest>,
) -> DependencyReport {
    let mut categories = DependencyCategories::default();

    if let Some(manifest) = package {
        categories.merge(categories_from_manifest(manifest));
    }
    if let Some(content) = read_optional(root, "requirements.txt").await {
        categories.merge(DependencyCategories {
            runtime: parse_requirements_txt(&content),
            ..Default::default()
        });
    }
    if let Some(content) = read_optional(root, "pyproject.toml").await {
        categories.merge(parse_pyproject_toml(&content));
    }
    if let Some(content) = read_optional(root, "Cargo.toml").await {
        categories.merge(parse_cargo_toml(&content));
    }
    if let Some(content) = read_optional(root, "go.mod").await {
        categories.merge(DependencyCategories {
            runtime: parse_go_mod(&content),
            ..Default::default()
        });
    }

    DependencyReport {
        package_manager: detect_package_manager(files),
        categories,
    }
}

async fn read_optional(root: &Path, name: &str) -> Option<String> {
    let path = root.join(name);
    match read_lossy_async(&path).await {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Skipping unreadable manifest {}: {}", path.display(), e);
            None
        }
    }
}
