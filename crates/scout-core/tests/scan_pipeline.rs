//! End-to-end tests for the scan pipeline through the public API

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use scout_core::workspace::{IgnoreRules, scan};
use scout_core::{
    FileScanStorage, MemoryScanStorage, ScanOptions, ScanOrchestrator, ScanStorage, ScoutResult,
    TextCompletion,
};
use tempfile::TempDir;

const ARCHITECTURE_RESPONSE: &str = r#"```json
{
  "description": "Express API with a service layer",
  "components": [
    {"name": "Routes", "type": "layer", "description": "HTTP routes", "dependencies": ["Services"], "keyFiles": ["src/routes.js"]},
    {"name": "Services", "type": "service", "description": "Business logic", "dependencies": [], "keyFiles": []},
    {"name": "Broken", "type": "module"}
  ]
}
```"#;

/// Returns a fixed response and counts calls
struct CountingCompletion {
    calls: AtomicUsize,
    response: String,
    delay: Duration,
}

impl CountingCompletion {
    fn new(response: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: response.to_string(),
            delay: Duration::ZERO,
        }
    }

    fn slow(response: &str, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new(response)
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextCompletion for CountingCompletion {
    async fn complete(&self, _prompt: &str) -> ScoutResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn write(root: &Path, path: &str, content: impl AsRef<[u8]>) {
    let full = root.join(path);
    std::fs::create_dir_all(full.parent().unwrap()).unwrap();
    std::fs::write(full, content).unwrap();
}

fn express_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "package.json",
        r#"{
  "name": "orders-api",
  "main": "src/index.js",
  "dependencies": { "express": "^4.18.0" },
  "devDependencies": { "jest": "^29.0.0" }
}"#,
    );
    write(root, "package-lock.json", "{}\n");
    write(root, "src/index.js", "// boot\nconst app = require('./routes');\napp.listen(3000);\n");
    write(root, "src/routes.js", "/** Routes */\nmodule.exports = {};\n");
    write(root, "README.md", "# Orders API\n\nServes orders.\n\n## Installation\n\nnpm i\n");
    write(root, "docs/guide.md", "# Guide\n");
    write(root, "node_modules/express/index.js", "module.exports = {};\n");
    dir
}

#[tokio::test]
async fn test_second_scan_is_served_from_cache() {
    let project = express_project();
    let completion = Arc::new(CountingCompletion::new(ARCHITECTURE_RESPONSE));
    let orchestrator = ScanOrchestrator::new(
        Arc::new(MemoryScanStorage::new()),
        Some(completion.clone()),
    );
    let options = ScanOptions::new(project.path()).with_id("orders-api");

    let first = orchestrator.perform_full_scan(&options).await.unwrap();
    let second = orchestrator.perform_full_scan(&options).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(completion.calls(), 1);

    let third = orchestrator
        .perform_full_scan(&options.clone().force(true))
        .await
        .unwrap();
    assert_eq!(completion.calls(), 2);
    assert!(third.scanned_at >= first.scanned_at);
}

#[tokio::test]
async fn test_full_scan_contents() {
    let project = express_project();
    let completion = Arc::new(CountingCompletion::new(ARCHITECTURE_RESPONSE));
    let orchestrator = ScanOrchestrator::new(Arc::new(MemoryScanStorage::new()), Some(completion));
    let options = ScanOptions::new(project.path()).with_id("orders-api");

    let scan = orchestrator.perform_full_scan(&options).await.unwrap();

    // node_modules is excluded by default
    assert_eq!(scan.overview.total_files, 6);
    assert_eq!(scan.overview.summary, "Express API with a service layer");
    assert!(scan.overview.frameworks.contains(&"Express".to_string()));
    assert_eq!(scan.key_files[0].path, "src/index.js");

    let components: Vec<&str> = scan
        .architecture
        .components
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(components, vec!["Routes", "Services"]);
    let diagram = scan.architecture.diagram.as_deref().unwrap();
    assert_eq!(diagram.matches("-->").count(), 1);
    assert!(diagram.contains("C0 --> C1"));

    assert_eq!(scan.dependencies.categories.runtime[0].name, "express");
    assert_eq!(scan.dependencies.categories.development[0].name, "jest");
    assert_eq!(scan.documentation.doc_files, vec!["docs/guide.md".to_string()]);
}

#[tokio::test]
async fn test_malformed_content_degrades_per_file() {
    let project = express_project();
    // Not UTF-8: decoded lossily instead of failing their phases
    write(project.path(), "README.md", b"\xff\xfe\x00#");
    write(project.path(), "requirements.txt", b"\xc3\x28\n");
    write(
        project.path(),
        "Cargo.toml",
        "[package]\nname = \"orders\"\n\n[dependencies]\nserde = \"1\"\n",
    );

    let completion = Arc::new(CountingCompletion::new("not json at all"));
    let orchestrator = ScanOrchestrator::new(
        Arc::new(MemoryScanStorage::new()),
        Some(completion.clone()),
    );
    let options = ScanOptions::new(project.path()).with_id("orders-api");

    let scan = orchestrator.perform_full_scan(&options).await.unwrap();

    // The unusable model answer falls back to the empty architecture
    assert_eq!(scan.architecture, Default::default());
    assert_eq!(completion.calls(), 1);

    // The other manifests still contribute
    let runtime: Vec<&str> = scan
        .dependencies
        .categories
        .runtime
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(runtime, vec!["express", "serde"]);
    assert_eq!(scan.dependencies.categories.development[0].name, "jest");
    assert_eq!(scan.dependencies.package_manager, scan.overview.package_manager);

    // The README still counts and doc files are kept
    assert_eq!(scan.documentation.readme_path.as_deref(), Some("README.md"));
    assert!(scan.documentation.has_documentation);
    assert_eq!(scan.documentation.doc_files, vec!["docs/guide.md".to_string()]);
    assert!(scan.documentation.coverage.has_readme);

    assert_eq!(scan.overview.total_files, 8);
    assert!(scan.overview.frameworks.contains(&"Express".to_string()));
    assert!(scan.overview.summary.ends_with(&format!(
        "project using {}",
        scan.overview.languages[..scan.overview.languages.len().min(3)].join(", ")
    )));
}

#[tokio::test]
async fn test_completion_timeout_is_recoverable() {
    let project = express_project();
    let completion = Arc::new(CountingCompletion::slow(
        ARCHITECTURE_RESPONSE,
        Duration::from_secs(30),
    ));
    let orchestrator =
        ScanOrchestrator::new(Arc::new(MemoryScanStorage::new()), Some(completion.clone()))
            .with_llm_timeout(Duration::from_millis(50));
    let options = ScanOptions::new(project.path()).with_id("orders-api");

    let scan = orchestrator.perform_full_scan(&options).await.unwrap();
    assert_eq!(completion.calls(), 1);
    assert!(scan.architecture.components.is_empty());
    assert_eq!(scan.architecture.description, "");
}

#[tokio::test]
async fn test_skip_llm_never_calls_completion() {
    let project = express_project();
    let completion = Arc::new(CountingCompletion::new(ARCHITECTURE_RESPONSE));
    let orchestrator = ScanOrchestrator::new(
        Arc::new(MemoryScanStorage::new()),
        Some(completion.clone()),
    );
    let options = ScanOptions::new(project.path())
        .with_id("orders-api")
        .skip_llm(true);

    let scan = orchestrator.perform_full_scan(&options).await.unwrap();
    assert_eq!(completion.calls(), 0);
    assert!(scan.architecture.diagram.is_none());
}

#[tokio::test]
async fn test_saved_scan_round_trips_through_disk() {
    let project = express_project();
    let store_dir = TempDir::new().unwrap();
    let orchestrator = ScanOrchestrator::new(
        Arc::new(FileScanStorage::new(store_dir.path())),
        Some(Arc::new(CountingCompletion::new(ARCHITECTURE_RESPONSE))),
    );
    let options = ScanOptions::new(project.path());

    let scan = orchestrator.perform_full_scan(&options).await.unwrap();

    // A fresh backend over the same directory sees the same record
    let reopened = FileScanStorage::new(store_dir.path());
    assert_eq!(reopened.list().await.unwrap(), vec![options.project_id.clone()]);
    assert_eq!(reopened.load(&options.project_id).await, Some(scan));

    let markdown =
        std::fs::read_to_string(store_dir.path().join(&options.project_id).join("project.md"))
            .unwrap();
    assert!(markdown.contains("```mermaid"));
}

#[tokio::test]
async fn test_save_failure_is_returned() {
    let project = express_project();
    let store_dir = TempDir::new().unwrap();
    // The storage root is a file, so the project directory cannot be created
    let blocked = store_dir.path().join("blocked");
    std::fs::write(&blocked, "").unwrap();

    let orchestrator = ScanOrchestrator::new(Arc::new(FileScanStorage::new(&blocked)), None);
    let options = ScanOptions::new(project.path()).with_id("orders-api");

    let err = orchestrator.perform_full_scan(&options).await.unwrap_err();
    assert_eq!(err.error_code(), "SCOUT_STORAGE");
    assert_eq!(err.context(), Some("Saving scan orders-api"));
}

#[tokio::test]
async fn test_max_files_is_an_exact_cap() {
    let project = TempDir::new().unwrap();
    for i in 0..25 {
        write(project.path(), &format!("src/file_{:02}.rs", i), "fn f() {}\n");
    }

    let files = scan(project.path(), &IgnoreRules::empty(project.path()), 10, 1024 * 1024);
    assert_eq!(files.len(), 10);
    assert!(files.iter().all(|f| f.line_count.is_some() && f.language.is_some()));

    let orchestrator = ScanOrchestrator::new(Arc::new(MemoryScanStorage::new()), None);
    let options = ScanOptions::new(project.path())
        .with_id("capped")
        .max_files(10);
    let result = orchestrator.perform_full_scan(&options).await.unwrap();
    assert_eq!(result.overview.total_files, 10);

    let all = scan(project.path(), &IgnoreRules::empty(project.path()), 100, 1024 * 1024);
    assert_eq!(all.len(), 25);
}
