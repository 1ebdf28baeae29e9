mod fake_runner;

use std::path::Path;
use std::time::Duration;

use crate::app::AppContext;
use crate::domain::Settings;
use crate::services::MinikubeCommandAdapter;

pub use fake_runner::FakeRunner;

/// Settings with no stagger or readiness grace period, rooted at `config_root`.
pub fn test_settings(config_root: &Path) -> Settings {
    Settings {
        minikube: "minikube".to_string(),
        driver: "kvm2".to_string(),
        config_root: config_root.to_path_buf(),
        stagger: Duration::ZERO,
        ready_initial_wait: Duration::ZERO,
        ready_timeout: Duration::from_secs(300),
    }
}

/// Context whose cluster tool and script runner both record into `runner`.
pub fn fake_context<'a>(
    runner: &'a FakeRunner,
    config_root: &Path,
) -> AppContext<MinikubeCommandAdapter<&'a FakeRunner>, &'a FakeRunner> {
    let settings = test_settings(config_root);
    AppContext::new(MinikubeCommandAdapter::new(runner, &settings), runner, settings)
}
