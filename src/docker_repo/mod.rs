// Docker container and image inventory via bollard

use crate::models::DockerInfo;
use bollard::Docker;
use bollard::query_parameters::{ListContainersOptions, ListImagesOptions};
use tracing::instrument;

pub struct DockerRepo {
    docker: Docker,
}

impl DockerRepo {
    pub fn connect() -> anyhow::Result<Self> {
        let docker = Docker::connect_with_unix_defaults()?;
        Ok(Self { docker })
    }

    /// Fails when the daemon does not answer.
    pub async fn ping(&self) -> anyhow::Result<()> {
        self.docker.ping().await?;
        Ok(())
    }

    /// One inventory snapshot: every container (running or not) and every image,
    /// newest first.
    #[instrument(skip(self), fields(repo = "docker", operation = "get_docker_info"))]
    pub async fn get_docker_info(&self) -> anyhow::Result<DockerInfo> {
        let containers = self
            .docker
            .list_containers(Some(ListContainersOptions {
                all: true,
                ..Default::default()
            }))
            .await
            .map_err(|e| anyhow::anyhow!("docker list_containers: {}", e))?;
        let images = self
            .docker
            .list_images(Some(ListImagesOptions {
                all: true,
                ..Default::default()
            }))
            .await
            .map_err(|e| anyhow::anyhow!("docker list_images: {}", e))?;
        tracing::debug!(
            containers = containers.len(),
            images = images.len(),
            "docker inventory fetched"
        );
        let mut info = DockerInfo { containers, images };
        info.sort_newest_first();
        Ok(info)
    }
}
