use serde::Deserialize;

use crate::domain::{AppError, CommandSpec, Profile, Settings};
use crate::ports::{ClusterInfo, ClusterTool, ProcessRunner};

/// [`ClusterTool`] backed by the `minikube` CLI.
///
/// Every invocation has the shape `minikube <cmd> --profile <name> [args...]`
/// and is labelled with the profile name in the log.
#[derive(Debug, Clone)]
pub struct MinikubeCommandAdapter<R: ProcessRunner> {
    runner: R,
    program: String,
    driver: String,
}

impl<R: ProcessRunner> MinikubeCommandAdapter<R> {
    pub fn new(runner: R, settings: &Settings) -> Self {
        Self { runner, program: settings.minikube.clone(), driver: settings.driver.clone() }
    }

    fn command<I, S>(&self, cmd: &str, profile: &str, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(&self.program).arg(cmd).args(["--profile", profile]).args(args)
    }

    fn run(&self, cmd: &str, profile: &str, args: Vec<String>) -> Result<(), AppError> {
        self.runner.run(&self.command(cmd, profile, args), profile)
    }

    fn start_args(&self, profile: &Profile) -> Vec<String> {
        vec![
            "--driver".into(),
            self.driver.clone(),
            "--container-runtime".into(),
            profile.container_runtime.clone(),
            "--extra-disks".into(),
            profile.extra_disks.to_string(),
            "--disk-size".into(),
            profile.disk_size.clone(),
            "--network".into(),
            profile.network.clone(),
            "--nodes".into(),
            profile.nodes.to_string(),
            "--cni".into(),
            profile.cni.clone(),
            "--cpus".into(),
            profile.cpus.to_string(),
            "--memory".into(),
            profile.memory.clone(),
            "--addons".into(),
            profile.addons.join(","),
        ]
    }
}

impl<R: ProcessRunner> ClusterTool for MinikubeCommandAdapter<R> {
    fn cluster_info(&self, profile: &str) -> Result<Option<ClusterInfo>, AppError> {
        let command = self.command(
            "kubectl",
            profile,
            ["--", "config", "view", "--output", "json"],
        );
        let output = self.runner.output(&command, profile)?;
        parse_cluster_info(&output, profile)
    }

    fn start(&self, profile: &Profile) -> Result<(), AppError> {
        self.run("start", &profile.name, self.start_args(profile))
    }

    fn stop(&self, profile: &str) -> Result<(), AppError> {
        self.run("stop", profile, Vec::new())
    }

    fn delete(&self, profile: &str) -> Result<(), AppError> {
        self.run("delete", profile, Vec::new())
    }

    fn kubectl(&self, profile: &str, args: &[&str]) -> Result<(), AppError> {
        let mut proxied = vec!["--".to_string()];
        proxied.extend(args.iter().map(|arg| arg.to_string()));
        self.run("kubectl", profile, proxied)
    }
}

/// Find the cluster named `profile` in `kubectl config view --output json` output.
fn parse_cluster_info(json: &str, profile: &str) -> Result<Option<ClusterInfo>, AppError> {
    let config: KubeConfig = serde_json::from_str(json).map_err(|e| AppError::ClusterInfo {
        profile: profile.to_string(),
        details: e.to_string(),
    })?;

    Ok(config.clusters.unwrap_or_default().into_iter().find(|c| c.name == profile).map(|c| {
        ClusterInfo { name: c.name, server: c.cluster.and_then(|entry| entry.server) }
    }))
}

#[derive(Debug, Deserialize)]
struct KubeConfig {
    // kubectl prints `null` rather than `[]` for an empty config.
    #[serde(default)]
    clusters: Option<Vec<NamedCluster>>,
}

#[derive(Debug, Deserialize)]
struct NamedCluster {
    name: String,
    #[serde(default)]
    cluster: Option<ClusterEntry>,
}

#[derive(Debug, Deserialize)]
struct ClusterEntry {
    server: Option<String>,
}
