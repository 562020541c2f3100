use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kdash_common::ratio;
use kdash_kube::ObjectRef;
use kdash_view::{
    Action, Component, Form, FormField, Summary, SummarySections, Table, TableRow, Text, Width, table_cols,
};
use kube::{Resource, ResourceExt};
use std::sync::LazyLock;

use crate::utils::{list_columns, list_row, template_containers, timestamp};
use crate::{ItemDescriptor, Object, PrintError, PrintOptions, create_pod_list_view, print_selector};

#[cfg(test)]
#[path = "./deployment.tests.rs"]
mod deployment_tests;

pub const DEPLOYMENT_COLUMNS: [&str; 6] = ["Name", "Labels", "Status", "Age", "Containers", "Selector"];

pub const DEPLOYMENT_CONDITION_COLUMNS: [&str; 6] =
    ["Type", "Reason", "Status", "Message", "Last Update", "Last Transition"];

const ROLLING_UPDATE: &str = "RollingUpdate";
const DEFAULT_SURGE: &str = "25%";

/// Generates actions available for the deployment summary.
pub type ActionGenerator = fn(&Deployment) -> Vec<Action>;

/// Creates "Deployments" table.
pub fn deployment_list_handler(list: Option<&[Deployment]>, options: &PrintOptions) -> Result<Table, PrintError> {
    let list = list.ok_or(PrintError::MissingInput("deployment list"))?;
    let mut table = Table::new(
        "Deployments",
        "We couldn't find any deployments!",
        list_columns(&DEPLOYMENT_COLUMNS, options),
    );

    for deployment in list {
        let status = deployment.status.as_ref();
        let row = list_row(deployment, options)?
            .with(
                "Status",
                Text::new(ratio(status.and_then(|s| s.available_replicas), status.and_then(|s| s.replicas))),
            )
            .with("Age", timestamp(deployment.creation_timestamp().as_ref()))
            .with("Containers", template_containers(deployment.spec.as_ref().map(|s| &s.template)))
            .with("Selector", print_selector(&spec_of(deployment).selector));
        table.add(row)?;
    }

    Ok(table)
}

/// Prints the deployment summary.
pub async fn deployment_handler(
    deployment: Option<&Deployment>,
    options: &PrintOptions,
) -> Result<Component, PrintError> {
    let deployment = deployment.ok_or(PrintError::MissingInput("deployment"))?;
    let mut object = Object::new(deployment)?;

    object.register_config(DeploymentConfiguration::new(Some(deployment)).create()?);
    object.register_summary(deployment_status(deployment));
    object.register_items(ItemDescriptor::new(Width::Full, deployment_pods(deployment, options)));
    object.register_items(ItemDescriptor::new(Width::Full, async move { deployment_conditions(deployment) }));
    if let Some(spec) = &deployment.spec {
        object.enable_pod_template(&spec.template);
    }

    object.enable_events();
    object.to_component(options).await
}

/// Builds the deployment "Configuration" summary.
pub struct DeploymentConfiguration<'a> {
    deployment: Option<&'a Deployment>,
    action_generators: Vec<ActionGenerator>,
}

impl<'a> DeploymentConfiguration<'a> {
    /// Creates new [`DeploymentConfiguration`] instance with the edit action.
    pub fn new(deployment: Option<&'a Deployment>) -> Self {
        Self {
            deployment,
            action_generators: vec![edit_deployment_action],
        }
    }

    /// Replaces generators of the summary actions.
    pub fn with_actions(mut self, generators: Vec<ActionGenerator>) -> Self {
        self.action_generators = generators;
        self
    }

    /// Creates the summary, fails if there is no deployment.
    pub fn create(&self) -> Result<Summary, PrintError> {
        let deployment = self.deployment.ok_or(PrintError::MissingInput("deployment"))?;
        let spec = spec_of(deployment);
        let strategy = spec.strategy.as_ref();
        let strategy_type = strategy.and_then(|s| s.type_.as_deref()).unwrap_or(ROLLING_UPDATE);

        let mut sections = SummarySections::new();
        sections.add_text("Deployment Strategy", strategy_type);

        if strategy_type == ROLLING_UPDATE {
            let rolling = strategy.and_then(|s| s.rolling_update.as_ref());
            let surge = int_or_string(rolling.and_then(|r| r.max_surge.as_ref()));
            let unavailable = int_or_string(rolling.and_then(|r| r.max_unavailable.as_ref()));
            sections.add_text(
                "Rolling Update Strategy",
                format!("Max Surge {surge}, Max Unavailable {unavailable}"),
            );
        }

        sections.add("Selectors", print_selector(&spec.selector));
        sections.add_text("Min Ready Seconds", spec.min_ready_seconds.unwrap_or_default().to_string());

        if let Some(limit) = spec.revision_history_limit {
            sections.add_text("Revision History Limit", limit.to_string());
        }

        if let Some(replicas) = spec.replicas {
            sections.add_text("Replicas", replicas.to_string());
        }

        let mut summary = Summary::new("Configuration", sections);
        for generator in &self.action_generators {
            for action in generator(deployment) {
                summary.add_action(action);
            }
        }

        Ok(summary)
    }
}

/// Returns the "Edit" action with the deployment replicas editor.
pub fn edit_deployment_action(deployment: &Deployment) -> Vec<Action> {
    let replicas = spec_of(deployment).replicas.unwrap_or(1);

    vec![Action {
        name: "Edit".to_owned(),
        title: "Deployment Editor".to_owned(),
        form: Form {
            fields: vec![
                FormField::number("Replicas", "replicas", replicas.to_string()),
                FormField::hidden("group", Deployment::group(&())),
                FormField::hidden("version", Deployment::version(&())),
                FormField::hidden("kind", Deployment::kind(&())),
                FormField::hidden("name", deployment.name_any()),
                FormField::hidden("namespace", deployment.namespace().unwrap_or_default()),
                FormField::hidden("action", "deployment/configuration"),
            ],
        },
    }]
}

/// Creates "Status" summary with the deployment replica counts.
pub fn deployment_status(deployment: &Deployment) -> Summary {
    let status = deployment.status.as_ref();
    let count = |value: Option<i32>| value.unwrap_or_default().to_string();

    let mut sections = SummarySections::new();
    sections.add_text("Available Replicas", count(status.and_then(|s| s.available_replicas)));
    sections.add_text("Ready Replicas", count(status.and_then(|s| s.ready_replicas)));
    sections.add_text("Total Replicas", count(status.and_then(|s| s.replicas)));
    sections.add_text("Unavailable Replicas", count(status.and_then(|s| s.unavailable_replicas)));
    sections.add_text("Updated Replicas", count(status.and_then(|s| s.updated_replicas)));

    Summary::new("Status", sections)
}

/// Creates "Conditions" table.
pub fn deployment_conditions(deployment: &Deployment) -> Result<Table, PrintError> {
    let mut table = Table::new(
        "Conditions",
        "There are no deployment conditions!",
        table_cols(&DEPLOYMENT_CONDITION_COLUMNS),
    );

    let conditions = deployment.status.as_ref().and_then(|s| s.conditions.as_deref());
    for condition in conditions.unwrap_or_default() {
        let row = TableRow::new()
            .with("Type", Text::new(&condition.type_))
            .with("Reason", Text::new(condition.reason.as_deref().unwrap_or_default()))
            .with("Status", Text::new(&condition.status))
            .with("Message", Text::new(condition.message.as_deref().unwrap_or_default()))
            .with("Last Update", timestamp(condition.last_update_time.as_ref()))
            .with("Last Transition", timestamp(condition.last_transition_time.as_ref()));
        table.add(row)?;
    }

    Ok(table)
}

/// Creates "Pods" table for pods matching the deployment template labels.
pub async fn deployment_pods(deployment: &Deployment, options: &PrintOptions) -> Result<Table, PrintError> {
    let labels = deployment
        .spec
        .as_ref()
        .and_then(|s| s.template.metadata.as_ref())
        .and_then(|m| m.labels.as_ref());

    create_pod_list_view(&ObjectRef::from_resource(deployment), labels, &options.without_labels()).await
}

fn spec_of(deployment: &Deployment) -> &DeploymentSpec {
    static DEFAULT: LazyLock<DeploymentSpec> = LazyLock::new(DeploymentSpec::default);
    deployment.spec.as_ref().unwrap_or(&DEFAULT)
}

fn int_or_string(value: Option<&IntOrString>) -> String {
    match value {
        Some(IntOrString::Int(value)) => value.to_string(),
        Some(IntOrString::String(value)) => value.clone(),
        None => DEFAULT_SURGE.to_owned(),
    }
}
