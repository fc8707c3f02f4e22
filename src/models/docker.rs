// Docker inventory: containers and images, replaced wholesale on each fetch

use bollard::models::{ContainerSummary, ImageSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerInfo {
    pub containers: Vec<ContainerSummary>,
    pub images: Vec<ImageSummary>,
}

impl DockerInfo {
    /// Order containers and images by creation time, newest first.
    /// Entries without a creation time go last.
    pub fn sort_newest_first(&mut self) {
        self.containers.sort_by(|a, b| b.created.cmp(&a.created));
        self.images.sort_by(|a, b| b.created.cmp(&a.created));
    }

    /// Containers whose state is `running`.
    pub fn running_count(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| c.state.as_ref().is_some_and(|s| s.to_string() == "running"))
            .count()
    }
}
