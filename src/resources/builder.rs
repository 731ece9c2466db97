//! # Configuration Builders
//!
//! Construct Configuration objects for tests. Builders never talk to the
//! API server.

use kube::api::ObjectMeta;

use super::names::ResourceNames;
use crate::config::ImageConfig;
use crate::crd::{
    Configuration, ConfigurationSpec, Container, EnvVar, RevisionSpec, RevisionTemplateSpec,
    TemplateMetadata,
};

/// Mutation applied to a freshly built Configuration
pub type ConfigOption = Box<dyn Fn(&mut Configuration) + Send + Sync>;

/// Spec with a single container in `template.spec.containers`
pub fn configuration_spec(image_path: &str) -> ConfigurationSpec {
    ConfigurationSpec {
        template: Some(RevisionTemplateSpec {
            metadata: None,
            spec: RevisionSpec {
                containers: vec![Container::new(image_path)],
                ..Default::default()
            },
        }),
        revision_template: None,
    }
}

/// Spec using the deprecated `revisionTemplate.spec.container` layout
pub fn legacy_configuration_spec(image_path: &str) -> ConfigurationSpec {
    ConfigurationSpec {
        template: None,
        revision_template: Some(RevisionTemplateSpec {
            metadata: None,
            spec: RevisionSpec {
                container: Some(Container::new(image_path)),
                ..Default::default()
            },
        }),
    }
}

/// Configuration named `names.config` running `names.image`
///
/// Options are applied in order, so later options win.
pub fn configuration(
    names: &ResourceNames,
    images: &ImageConfig,
    options: impl IntoIterator<Item = ConfigOption>,
) -> Configuration {
    let mut config = Configuration {
        metadata: ObjectMeta {
            name: Some(names.config.clone()),
            ..Default::default()
        },
        spec: configuration_spec(&images.image_path(&names.image)),
        status: None,
    };

    for option in options {
        option(&mut config);
    }

    config
}

/// Add an environment variable to the effective container
pub fn with_env(name: impl Into<String>, value: impl Into<String>) -> ConfigOption {
    let env = EnvVar {
        name: name.into(),
        value: value.into(),
    };
    Box::new(move |config: &mut Configuration| {
        if let Some(container) = config
            .spec
            .effective_template_mut()
            .and_then(|t| t.spec.effective_container_mut())
        {
            container.env.push(env.clone());
        }
    })
}

/// Set the container concurrency of the revision template
pub fn with_container_concurrency(concurrency: i64) -> ConfigOption {
    Box::new(move |config: &mut Configuration| {
        if let Some(template) = config.spec.effective_template_mut() {
            template.spec.container_concurrency = Some(concurrency);
        }
    })
}

/// Set the request timeout of the revision template
pub fn with_revision_timeout_seconds(seconds: i64) -> ConfigOption {
    Box::new(move |config: &mut Configuration| {
        if let Some(template) = config.spec.effective_template_mut() {
            template.spec.timeout_seconds = Some(seconds);
        }
    })
}

/// Add an annotation to the revision template metadata
pub fn with_config_annotation(key: impl Into<String>, value: impl Into<String>) -> ConfigOption {
    let key = key.into();
    let value = value.into();
    Box::new(move |config: &mut Configuration| {
        if let Some(template) = config.spec.effective_template_mut() {
            template
                .metadata
                .get_or_insert_with(TemplateMetadata::default)
                .annotations
                .insert(key.clone(), value.clone());
        }
    })
}
