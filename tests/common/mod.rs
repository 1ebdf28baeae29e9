//! Shared testing utilities for drenv CLI tests.

#![allow(dead_code)]

mod fake_minikube;

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use fake_minikube::FakeMinikube;

/// Isolated environment: fake minikube, config root, and scratch space for scripts.
pub struct TestContext {
    root: TempDir,
    minikube: FakeMinikube,
    config_root: PathBuf,
    scripts_log: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let minikube = FakeMinikube::install(root.path());
        let config_root = root.path().join("config");
        let scripts_log = root.path().join("scripts.log");
        fs::create_dir_all(root.path().join("scripts")).expect("Failed to create scripts dir");

        Self { root, minikube, config_root, scripts_log }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn minikube(&self) -> &FakeMinikube {
        &self.minikube
    }

    /// Per-profile configuration directory as drenv computes it.
    pub fn config_dir(&self, profile: &str) -> PathBuf {
        self.config_root.join(profile)
    }

    /// Write an environment file and return its path.
    pub fn write_env(&self, yaml: &str) -> PathBuf {
        let path = self.root.path().join("env.yaml");
        fs::write(&path, yaml).expect("Failed to write environment file");
        path
    }

    /// Write a worker script that logs `<name> <args>` and then runs `body`.
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.root.path().join("scripts").join(name);
        let content = format!(
            "#!/bin/sh\necho \"{} $*\" >> \"{}\"\n{}\n",
            name,
            self.scripts_log.display(),
            body
        );
        fake_minikube::write_executable(&path, &content);
        path
    }

    pub fn scripts_log(&self) -> String {
        fs::read_to_string(&self.scripts_log).unwrap_or_default()
    }

    /// Build a command for the compiled `drenv` binary wired to the fake minikube.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("drenv").expect("Failed to locate drenv binary");
        cmd.current_dir(self.root.path())
            .env("DRENV_MINIKUBE", &self.minikube.path)
            .env("DRENV_CONFIG_DIR", &self.config_root)
            .env("DRENV_STAGGER_MS", "0")
            .env("DRENV_READY_INITIAL_WAIT", "0")
            .env_remove("RUST_LOG")
            .env_remove("FAKE_MINIKUBE_FAIL");
        cmd
    }
}
