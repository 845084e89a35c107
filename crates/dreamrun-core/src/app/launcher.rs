//! JobLauncher - one event in, one Fargate task out.

use tracing::info;

use crate::config::LauncherConfig;
use crate::domain::{JobEvent, LaunchError, TaskArn};
use crate::ports::{NetworkConfig, RunTaskRequest, TaskDefinitionQuery, TaskOrchestrator};

/// JobLauncher turns an incoming event into one running task.
///
/// `invoke` is a single linear sequence: validate the event, resolve the
/// newest active task-definition revision for the configured family, ask
/// the orchestrator to run one instance of it, and hand the task handle
/// back merged into the event. No retries, no timeouts, no state.
pub struct JobLauncher<O> {
    config: LauncherConfig,
    orchestrator: O,
}

impl<O: TaskOrchestrator> JobLauncher<O> {
    pub fn new(config: LauncherConfig, orchestrator: O) -> Self {
        Self {
            config,
            orchestrator,
        }
    }

    /// Launch one task for the event and return the event with the task
    /// handle added.
    ///
    /// Fails with [`LaunchError::MissingImagePath`] before any network
    /// call if the event has no string `imagePath`. Every downstream
    /// failure aborts the invocation; the second call is never issued
    /// when the lookup comes back empty.
    pub async fn invoke(&self, event: JobEvent) -> Result<JobEvent, LaunchError> {
        info!(event = %serde_json::to_string(&event).unwrap_or_default(), "received event");

        if event.image_path().is_none() {
            return Err(LaunchError::MissingImagePath);
        }

        let query = TaskDefinitionQuery::latest_active(self.config.family_prefix());
        let task_definition = self
            .orchestrator
            .list_task_definitions(&query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                LaunchError::NoActiveTaskDefinition(self.config.family_prefix().to_string())
            })?;
        info!(%task_definition, "launching new job");

        let request = RunTaskRequest {
            task_definition: task_definition.clone(),
            cluster: LauncherConfig::CLUSTER.to_string(),
            count: LauncherConfig::TASK_COUNT,
            network: NetworkConfig {
                subnets: self.config.subnets().to_vec(),
                assign_public_ip: true,
            },
        };
        let started = self.orchestrator.run_task(&request).await?;
        info!(response = ?started, "run response");

        let task_arn: TaskArn = started
            .into_iter()
            .next()
            .ok_or_else(|| LaunchError::NoTasksStarted(task_definition.to_string()))?
            .into_task_arn();
        info!(%task_arn, "task started");

        Ok(event.with_task_arn(&task_arn))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{StartedTask, TaskDefinitionArn};
    use crate::ports::{DefinitionStatus, SortOrder};

    /// Recording fake: captures every call's arguments and replays canned
    /// results.
    struct FakeOrchestrator {
        list_result: Vec<TaskDefinitionArn>,
        run_result: Vec<StartedTask>,
        list_calls: Mutex<Vec<TaskDefinitionQuery>>,
        run_calls: Mutex<Vec<RunTaskRequest>>,
    }

    impl FakeOrchestrator {
        fn new(list_result: Vec<TaskDefinitionArn>, run_result: Vec<StartedTask>) -> Self {
            Self {
                list_result,
                run_result,
                list_calls: Mutex::new(Vec::new()),
                run_calls: Mutex::new(Vec::new()),
            }
        }

        fn happy() -> Self {
            Self::new(
                vec![TaskDefinitionArn::new(
                    "arn:aws:ecs:us-east-1:123:task-definition/deep-dream-job:7",
                )],
                vec![StartedTask::new(TaskArn::new(
                    "arn:aws:ecs:us-east-1:123:task/abc123",
                ))],
            )
        }

        fn list_calls(&self) -> Vec<TaskDefinitionQuery> {
            self.list_calls.lock().unwrap().clone()
        }

        fn run_calls(&self) -> Vec<RunTaskRequest> {
            self.run_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TaskOrchestrator for &FakeOrchestrator {
        async fn list_task_definitions(
            &self,
            query: &TaskDefinitionQuery,
        ) -> Result<Vec<TaskDefinitionArn>, LaunchError> {
            self.list_calls.lock().unwrap().push(query.clone());
            Ok(self.list_result.clone())
        }

        async fn run_task(
            &self,
            request: &RunTaskRequest,
        ) -> Result<Vec<StartedTask>, LaunchError> {
            self.run_calls.lock().unwrap().push(request.clone());
            Ok(self.run_result.clone())
        }
    }

    fn config() -> LauncherConfig {
        LauncherConfig::new(
            "deep-dream-job",
            ["subnet-aaa".to_string(), "subnet-bbb".to_string()],
        )
    }

    fn event(value: Value) -> JobEvent {
        serde_json::from_value(value).unwrap()
    }

    #[rstest]
    #[case::absent(json!({ "other": "field" }))]
    #[case::number(json!({ "imagePath": 42 }))]
    #[case::null(json!({ "imagePath": null }))]
    #[case::bool(json!({ "imagePath": true }))]
    #[case::array(json!({ "imagePath": ["s3://b/x.png"] }))]
    #[case::object(json!({ "imagePath": { "path": "s3://b/x.png" } }))]
    #[tokio::test]
    async fn invalid_image_path_fails_before_any_call(#[case] payload: Value) {
        let fake = FakeOrchestrator::happy();
        let launcher = JobLauncher::new(config(), &fake);

        let err = launcher.invoke(event(payload)).await.unwrap_err();

        assert!(matches!(err, LaunchError::MissingImagePath));
        assert_eq!(err.to_string(), "Missing `imagePath` property");
        assert!(fake.list_calls().is_empty());
        assert!(fake.run_calls().is_empty());
    }

    #[tokio::test]
    async fn returns_input_plus_task_arn_only() {
        let fake = FakeOrchestrator::happy();
        let launcher = JobLauncher::new(config(), &fake);
        let input = event(json!({
            "imagePath": "s3://bucket/cat.jpg",
            "requestId": "r-42",
            "options": { "iterations": 3 },
        }));

        let output = launcher.invoke(input.clone()).await.unwrap();

        assert_eq!(output.fields().len(), input.fields().len() + 1);
        for (key, value) in input.fields() {
            assert_eq!(output.fields().get(key), Some(value));
        }
        assert_eq!(
            output.fields().get("taskArn"),
            Some(&json!("arn:aws:ecs:us-east-1:123:task/abc123"))
        );
    }

    #[tokio::test]
    async fn lookup_requests_newest_active_revision() {
        let fake = FakeOrchestrator::happy();
        let launcher = JobLauncher::new(config(), &fake);

        launcher
            .invoke(event(json!({ "imagePath": "s3://b/x.png" })))
            .await
            .unwrap();

        let calls = fake.list_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].family_prefix, "deep-dream-job");
        assert_eq!(calls[0].status, DefinitionStatus::Active);
        assert_eq!(calls[0].sort, SortOrder::Descending);
        assert_eq!(calls[0].max_results, 1);
    }

    #[tokio::test]
    async fn run_request_carries_fixed_parameters() {
        let fake = FakeOrchestrator::happy();
        let launcher = JobLauncher::new(config(), &fake);

        launcher
            .invoke(event(json!({ "imagePath": "s3://b/x.png" })))
            .await
            .unwrap();

        let calls = fake.run_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].task_definition,
            TaskDefinitionArn::new("arn:aws:ecs:us-east-1:123:task-definition/deep-dream-job:7")
        );
        assert_eq!(calls[0].cluster, "serverless-deep-dream-dev");
        assert_eq!(calls[0].count, 1);
        assert_eq!(calls[0].network.subnets, vec!["subnet-aaa", "subnet-bbb"]);
        assert!(calls[0].network.assign_public_ip);
    }

    #[tokio::test]
    async fn empty_lookup_fails_without_running_anything() {
        let fake = FakeOrchestrator::new(
            Vec::new(),
            vec![StartedTask::new(TaskArn::new("arn:unreachable"))],
        );
        let launcher = JobLauncher::new(config(), &fake);

        let err = launcher
            .invoke(event(json!({ "imagePath": "s3://b/x.png" })))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LaunchError::NoActiveTaskDefinition(ref family) if family.as_str() == "deep-dream-job"
        ));
        assert!(fake.run_calls().is_empty());
    }

    #[tokio::test]
    async fn empty_run_response_fails_at_extraction() {
        let fake = FakeOrchestrator::new(
            vec![TaskDefinitionArn::new(
                "arn:aws:ecs:us-east-1:123:task-definition/deep-dream-job:7",
            )],
            Vec::new(),
        );
        let launcher = JobLauncher::new(config(), &fake);

        let err = launcher
            .invoke(event(json!({ "imagePath": "s3://b/x.png" })))
            .await
            .unwrap_err();

        assert!(matches!(err, LaunchError::NoTasksStarted(_)));
        assert_eq!(fake.run_calls().len(), 1);
    }

    #[tokio::test]
    async fn end_to_end_example() {
        let fake = FakeOrchestrator::new(
            vec![TaskDefinitionArn::new("arn:aws:ecs:task-def/job:7")],
            vec![StartedTask::new(TaskArn::new("arn:aws:ecs:task/abc123"))],
        );
        let launcher = JobLauncher::new(config(), &fake);

        let output = launcher
            .invoke(event(json!({ "imagePath": "s3://bucket/cat.jpg" })))
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "imagePath": "s3://bucket/cat.jpg",
                "taskArn": "arn:aws:ecs:task/abc123",
            })
        );
    }
}
