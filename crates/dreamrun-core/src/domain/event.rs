//! JobEvent - the payload this launcher is invoked with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::task::TaskArn;

/// Key the caller must supply.
pub const IMAGE_PATH_KEY: &str = "imagePath";

/// Key added to the returned event.
pub const TASK_ARN_KEY: &str = "taskArn";

/// JobEvent is an arbitrary JSON object supplied by the caller.
///
/// The launcher treats it as opaque except for two keys: it reads
/// `imagePath` and adds `taskArn` to the returned copy. Everything else
/// passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobEvent(Map<String, Value>);

impl JobEvent {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The `imagePath` field, if present and a string.
    pub fn image_path(&self) -> Option<&str> {
        self.0.get(IMAGE_PATH_KEY).and_then(Value::as_str)
    }

    /// A copy of this event with `taskArn` set to the given handle.
    ///
    /// This is the only mutation the launcher performs on the payload.
    pub fn with_task_arn(&self, task_arn: &TaskArn) -> Self {
        let mut fields = self.0.clone();
        fields.insert(
            TASK_ARN_KEY.to_string(),
            Value::String(task_arn.as_str().to_string()),
        );
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for JobEvent {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
