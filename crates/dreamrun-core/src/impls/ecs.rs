//! EcsOrchestrator - TaskOrchestrator backed by the AWS ECS control plane.

use async_trait::async_trait;
use aws_sdk_ecs::types::{
    AssignPublicIp, AwsVpcConfiguration, LaunchType, NetworkConfiguration, TaskDefinitionStatus,
};

use crate::domain::{LaunchError, StartedTask, TaskArn, TaskDefinitionArn};
use crate::ports::{
    DefinitionStatus, RunTaskRequest, SortOrder, TaskDefinitionQuery, TaskOrchestrator,
};

/// ECS-backed orchestrator.
///
/// Every task run uses the Fargate launch type; the request structs carry
/// everything else. Credentials and region come from the ambient SDK
/// configuration (the default provider chain under Lambda).
pub struct EcsOrchestrator {
    client: aws_sdk_ecs::Client,
}

impl EcsOrchestrator {
    pub fn new(client: aws_sdk_ecs::Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS configuration chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_ecs::Client::new(&sdk_config))
    }
}

#[async_trait]
impl TaskOrchestrator for EcsOrchestrator {
    async fn list_task_definitions(
        &self,
        query: &TaskDefinitionQuery,
    ) -> Result<Vec<TaskDefinitionArn>, LaunchError> {
        let output = self
            .client
            .list_task_definitions()
            .family_prefix(&query.family_prefix)
            .status(status_filter(query.status))
            .sort(sort_order(query.sort))
            .max_results(query.max_results)
            .send()
            .await
            .map_err(LaunchError::orchestrator)?;

        Ok(output
            .task_definition_arns()
            .iter()
            .map(TaskDefinitionArn::new)
            .collect())
    }

    async fn run_task(&self, request: &RunTaskRequest) -> Result<Vec<StartedTask>, LaunchError> {
        let vpc_config = AwsVpcConfiguration::builder()
            .set_subnets(Some(request.network.subnets.clone()))
            .assign_public_ip(public_ip(request.network.assign_public_ip))
            .build()
            .map_err(LaunchError::orchestrator)?;

        let output = self
            .client
            .run_task()
            .task_definition(request.task_definition.as_str())
            .launch_type(LaunchType::Fargate)
            .cluster(&request.cluster)
            .count(request.count)
            .network_configuration(
                NetworkConfiguration::builder()
                    .awsvpc_configuration(vpc_config)
                    .build(),
            )
            .send()
            .await
            .map_err(LaunchError::orchestrator)?;

        Ok(output
            .tasks()
            .iter()
            .filter_map(|task| task.task_arn())
            .map(|arn| StartedTask::new(TaskArn::new(arn)))
            .collect())
    }
}

fn status_filter(status: DefinitionStatus) -> TaskDefinitionStatus {
    match status {
        DefinitionStatus::Active => TaskDefinitionStatus::Active,
        DefinitionStatus::Inactive => TaskDefinitionStatus::Inactive,
    }
}

fn sort_order(sort: SortOrder) -> aws_sdk_ecs::types::SortOrder {
    match sort {
        SortOrder::Ascending => aws_sdk_ecs::types::SortOrder::Asc,
        SortOrder::Descending => aws_sdk_ecs::types::SortOrder::Desc,
    }
}

fn public_ip(enabled: bool) -> AssignPublicIp {
    if enabled {
        AssignPublicIp::Enabled
    } else {
        AssignPublicIp::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_sdk_values() {
        assert_eq!(
            status_filter(DefinitionStatus::Active),
            TaskDefinitionStatus::Active
        );
        assert_eq!(
            status_filter(DefinitionStatus::Inactive),
            TaskDefinitionStatus::Inactive
        );
    }

    #[test]
    fn sort_maps_to_sdk_values() {
        assert_eq!(
            sort_order(SortOrder::Descending),
            aws_sdk_ecs::types::SortOrder::Desc
        );
        assert_eq!(
            sort_order(SortOrder::Ascending),
            aws_sdk_ecs::types::SortOrder::Asc
        );
    }

    #[test]
    fn public_ip_maps_to_sdk_values() {
        assert_eq!(public_ip(true), AssignPublicIp::Enabled);
        assert_eq!(public_ip(false), AssignPublicIp::Disabled);
    }
}
