use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell script standing in for `minikube`.
///
/// Appends its arguments to `log_file`. `start` marks the profile as existing
/// under `state_dir`, so a later `kubectl -- config view` reports the cluster
/// and the next start is a restart. Profiles listed in `FAKE_MINIKUBE_FAIL`
/// fail to start.
pub struct FakeMinikube {
    pub path: PathBuf,
    pub log_file: PathBuf,
    pub state_dir: PathBuf,
}

impl FakeMinikube {
    pub fn install(root: &Path) -> Self {
        let bin_dir = root.join("bin");
        let state_dir = root.join("minikube-state");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(&state_dir).expect("Failed to create state dir");
        let log_file = root.join("minikube.log");
        let path = bin_dir.join("minikube");

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"

cmd="$1"
profile="$3"

for p in $FAKE_MINIKUBE_FAIL; do
    if [ "$p" = "$profile" ] && [ "$cmd" = "start" ]; then
        echo "X Exiting due to GUEST_PROVISION: fake failure for $profile"
        exit 1
    fi
done

case "$cmd" in
    start)
        echo "Starting control plane node $profile"
        echo "Done! $profile is ready" >&2
        touch "{state}/$profile"
        ;;
    delete)
        rm -f "{state}/$profile"
        ;;
    kubectl)
        if [ "$5" = "config" ]; then
            if [ -e "{state}/$profile" ]; then
                echo '{{"clusters":[{{"name":"'"$profile"'","cluster":{{"server":"https://192.168.39.2:8443"}}}}]}}'
            else
                echo '{{"kind":"Config","clusters":null}}'
            fi
        fi
        ;;
esac

exit 0
"#,
            log = log_file.display(),
            state = state_dir.display(),
        );

        write_executable(&path, &script_content);

        Self { path, log_file, state_dir }
    }

    /// Pretend the profile was started by an earlier run.
    pub fn mark_existing(&self, profile: &str) {
        fs::write(self.state_dir.join(profile), "").expect("Failed to mark profile");
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

pub fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
