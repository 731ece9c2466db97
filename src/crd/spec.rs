//! # Configuration Spec
//!
//! The desired state of a Configuration: a revision template stamped out by
//! the controller into a new revision every time it changes.

use super::status::ConfigurationStatus;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: serving.knative.dev/v1alpha1
/// kind: Configuration
/// metadata:
///   name: helloworld
///   namespace: serving-tests
/// spec:
///   template:
///     spec:
///       containers:
///         - image: ko.local/helloworld:latest
/// ```
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "Configuration",
    group = "serving.knative.dev",
    version = "v1alpha1",
    namespaced,
    status = "ConfigurationStatus",
    shortname = "config",
    printcolumn = r#"{"name":"LatestCreated", "type":"string", "jsonPath":".status.latestCreatedRevisionName"}"#,
    printcolumn = r#"{"name":"LatestReady", "type":"string", "jsonPath":".status.latestReadyRevisionName"}"#
)]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSpec {
    /// Template for the revisions this Configuration creates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<RevisionTemplateSpec>,
    /// Deprecated spelling of `template`, still accepted by v1alpha1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_template: Option<RevisionTemplateSpec>,
}

impl ConfigurationSpec {
    /// The template in effect: `template`, else the deprecated `revisionTemplate`
    pub fn effective_template(&self) -> Option<&RevisionTemplateSpec> {
        self.template.as_ref().or(self.revision_template.as_ref())
    }

    /// Mutable access to the template in effect
    pub fn effective_template_mut(&mut self) -> Option<&mut RevisionTemplateSpec> {
        match self.template {
            Some(ref mut template) => Some(template),
            None => self.revision_template.as_mut(),
        }
    }
}

/// Revision template: metadata and spec copied onto each new revision
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevisionTemplateSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TemplateMetadata>,
    pub spec: RevisionSpec,
}

/// Subset of object metadata allowed on a revision template
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    /// Explicit revision name; the controller generates one when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// Revision spec
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSpec {
    /// Containers of the revision pod (exactly one is supported)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<Container>,
    /// Deprecated single container field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    /// Maximum in-flight requests per container, 0 means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_concurrency: Option<i64>,
    /// Request timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
}

impl RevisionSpec {
    /// The container in effect: the deprecated `container`, else `containers[0]`
    pub fn effective_container(&self) -> Option<&Container> {
        self.container.as_ref().or_else(|| self.containers.first())
    }

    /// Mutable access to the container in effect
    pub fn effective_container_mut(&mut self) -> Option<&mut Container> {
        match self.container {
            Some(ref mut container) => Some(container),
            None => self.containers.first_mut(),
        }
    }
}

/// Container definition
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
}

impl Container {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }
}

/// Environment variable set on a container
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}
