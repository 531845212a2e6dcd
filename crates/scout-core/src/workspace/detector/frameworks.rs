//! Framework detection
//!
//! Each definition lists manifest packages, dev packages, Python packages and
//! marker files. They are checked in that order and the first hit is the
//! single recorded reason for the detection.

use crate::workspace::manifest::Manifests;
use crate::workspace::models::FileRecord;

/// Static description of how a framework is recognised
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDefinition {
    pub name: &'static str,
    pub packages: &'static [&'static str],
    pub dev_packages: &'static [&'static str],
    pub pypi: &'static [&'static str],
    /// File names, or root-relative paths when they contain `/`
    pub files: &'static [&'static str],
}

impl FrameworkDefinition {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            packages: &[],
            dev_packages: &[],
            pypi: &[],
            files: &[],
        }
    }

    const fn packages(mut self, packages: &'static [&'static str]) -> Self {
        self.packages = packages;
        self
    }

    const fn dev_packages(mut self, packages: &'static [&'static str]) -> Self {
        self.dev_packages = packages;
        self
    }

    const fn pypi(mut self, packages: &'static [&'static str]) -> Self {
        self.pypi = packages;
        self
    }

    const fn files(mut self, files: &'static [&'static str]) -> Self {
        self.files = files;
        self
    }
}

/// Known frameworks, in reporting order
pub const FRAMEWORKS: &[FrameworkDefinition] = &[
    FrameworkDefinition::new("React").packages(&["react"]),
    FrameworkDefinition::new("Vue")
        .packages(&["vue"])
        .files(&["vue.config.js"]),
    FrameworkDefinition::new("Angular")
        .packages(&["@angular/core"])
        .files(&["angular.json"]),
    FrameworkDefinition::new("Svelte")
        .packages(&["svelte"])
        .dev_packages(&["svelte", "@sveltejs/kit"])
        .files(&["svelte.config.js"]),
    FrameworkDefinition::new("Next.js")
        .packages(&["next"])
        .files(&["next.config.js", "next.config.mjs", "next.config.ts"]),
    FrameworkDefinition::new("Nuxt")
        .packages(&["nuxt"])
        .dev_packages(&["nuxt"])
        .files(&["nuxt.config.ts", "nuxt.config.js"]),
    FrameworkDefinition::new("Express").packages(&["express"]),
    FrameworkDefinition::new("Fastify").packages(&["fastify"]),
    FrameworkDefinition::new("NestJS")
        .packages(&["@nestjs/core"])
        .files(&["nest-cli.json"]),
    FrameworkDefinition::new("Electron")
        .packages(&["electron"])
        .dev_packages(&["electron", "electron-builder"])
        .files(&["electron-builder.yml"]),
    FrameworkDefinition::new("Ink").packages(&["ink"]),
    FrameworkDefinition::new("oclif")
        .packages(&["@oclif/core"])
        .dev_packages(&["oclif"]),
    FrameworkDefinition::new("Vite")
        .dev_packages(&["vite"])
        .files(&["vite.config.ts", "vite.config.js", "vite.config.mjs"]),
    FrameworkDefinition::new("Jest")
        .dev_packages(&["jest"])
        .files(&["jest.config.js", "jest.config.ts"]),
    FrameworkDefinition::new("Vitest")
        .dev_packages(&["vitest"])
        .files(&["vitest.config.ts", "vitest.config.js"]),
    FrameworkDefinition::new("Tailwind CSS")
        .dev_packages(&["tailwindcss"])
        .files(&["tailwind.config.js", "tailwind.config.ts"]),
    FrameworkDefinition::new("Prisma")
        .packages(&["@prisma/client"])
        .dev_packages(&["prisma"])
        .files(&["prisma/schema.prisma"]),
    FrameworkDefinition::new("Django")
        .pypi(&["django"])
        .files(&["manage.py"]),
    FrameworkDefinition::new("Flask").pypi(&["flask"]),
    FrameworkDefinition::new("FastAPI").pypi(&["fastapi"]),
];

/// What triggered a detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionSource {
    Package(String),
    DevPackage(String),
    PythonPackage(String),
    File(String),
}

/// A framework found in the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFramework {
    pub name: String,
    pub source: DetectionSource,
}

/// Detect frameworks using the built-in definitions
pub fn detect_frameworks(files: &[FileRecord], manifests: &Manifests) -> Vec<DetectedFramework> {
    FRAMEWORKS
        .iter()
        .filter_map(|definition| {
            detect_one(definition, files, manifests).map(|source| DetectedFramework {
                name: definition.name.to_string(),
                source,
            })
        })
        .collect()
}

fn detect_one(
    definition: &FrameworkDefinition,
    files: &[FileRecord],
    manifests: &Manifests,
) -> Option<DetectionSource> {
    if let Some(package) = &manifests.package {
        if let Some(name) = definition.packages.iter().find(|p| package.has_dependency(p)) {
            return Some(DetectionSource::Package(name.to_string()));
        }
        if let Some(name) = definition
            .dev_packages
            .iter()
            .find(|p| package.has_dev_dependency(p))
        {
            return Some(DetectionSource::DevPackage(name.to_string()));
        }
    }

    if let Some(name) = definition
        .pypi
        .iter()
        .find(|p| manifests.has_python_package(p))
    {
        return Some(DetectionSource::PythonPackage(name.to_string()));
    }

    definition
        .files
        .iter()
        .find(|marker| files.iter().any(|f| matches_marker(f, marker)))
        .map(|marker| DetectionSource::File(marker.to_string()))
}

fn matches_marker(file: &FileRecord, marker: &str) -> bool {
    if marker.contains('/') {
        file.path == marker
    } else {
        file.name == marker
    }
}
