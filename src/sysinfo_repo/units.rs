// Service unit overview via systemctl

use crate::models::UnitStatus;
use tokio::process::Command;

/// Count failed and active units in `systemctl list-units --plain --no-legend` output.
///
/// A unit counts as failed when its ACTIVE or SUB column is `failed`, and as
/// active when either is `active`.
pub(crate) fn count_units(output: &str) -> UnitStatus {
    let mut status = UnitStatus::default();
    for line in output.lines() {
        let mut cols = line.split_whitespace().skip(2);
        let (Some(active), Some(sub)) = (cols.next(), cols.next()) else {
            continue;
        };
        if active == "failed" || sub == "failed" {
            status.failed_count += 1;
        }
        if active == "active" || sub == "active" {
            status.active_count += 1;
        }
    }
    status
}

pub(super) async fn list_units() -> anyhow::Result<UnitStatus> {
    let output = Command::new("systemctl")
        .args(["list-units", "--all", "--plain", "--no-legend", "--no-pager"])
        .output()
        .await?;
    anyhow::ensure!(
        output.status.success(),
        "systemctl list-units exited with {}",
        output.status
    );
    Ok(count_units(&String::from_utf8_lossy(&output.stdout)))
}
