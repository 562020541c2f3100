use k8s_openapi::api::batch::v1::{Job, JobCondition};
use kdash_common::optional_to_string;
use kdash_kube::utils::from_dynamic;
use kdash_kube::{Key, ObjectRef};
use kdash_view::{Component, Summary, SummarySections, Table, TableRow, Text, Width, table_cols};
use kube::ResourceExt;

use crate::utils::{list_columns, list_row, timestamp};
use crate::{ItemDescriptor, Object, PrintError, PrintOptions, create_pod_list_view};

#[cfg(test)]
#[path = "./job.tests.rs"]
mod job_tests;

pub const JOB_COLUMNS: [&str; 5] = ["Name", "Labels", "Completions", "Successful", "Age"];

pub const JOB_CONDITION_COLUMNS: [&str; 6] = ["Type", "Last Probe", "Last Transition", "Status", "Message", "Reason"];

/// Creates "Jobs" table.
pub fn job_list_handler(list: Option<&[Job]>, options: &PrintOptions) -> Result<Table, PrintError> {
    let list = list.ok_or(PrintError::MissingInput("job list"))?;
    let mut table = Table::new("Jobs", "We couldn't find any jobs!", list_columns(&JOB_COLUMNS, options));

    for job in list {
        let completions = job.spec.as_ref().and_then(|s| s.completions);
        let succeeded = job.status.as_ref().and_then(|s| s.succeeded).unwrap_or_default();
        let row = list_row(job, options)?
            .with("Completions", Text::new(optional_to_string(completions)))
            .with("Successful", Text::new(succeeded.to_string()))
            .with("Age", timestamp(job.creation_timestamp().as_ref()));
        table.add(row)?;
    }

    Ok(table)
}

/// Prints the job summary.
pub async fn job_handler(job: Option<&Job>, options: &PrintOptions) -> Result<Component, PrintError> {
    let job = job.ok_or(PrintError::MissingInput("job"))?;
    let mut object = Object::new(job)?;

    object.register_config(create_job_configuration(job));
    object.register_summary(create_job_status(job));
    if let Some(spec) = &job.spec {
        object.enable_pod_template(&spec.template);
    }

    object.register_items(ItemDescriptor::new(Width::Full, job_pods(job, options)));
    object.register_items(ItemDescriptor::new(Width::Full, async move {
        let conditions = job.status.as_ref().and_then(|s| s.conditions.as_deref());
        create_job_conditions(conditions.unwrap_or_default())
    }));

    object.enable_events();
    object.to_component(options).await
}

/// Creates "Configuration" summary with the job limits.
pub fn create_job_configuration(job: &Job) -> Summary {
    let spec = job.spec.as_ref();

    let mut sections = SummarySections::new();
    sections.add_text("Back Off Limit", optional_to_string(spec.and_then(|s| s.backoff_limit)));
    sections.add_text("Completions", optional_to_string(spec.and_then(|s| s.completions)));
    sections.add_text("Parallelism", optional_to_string(spec.and_then(|s| s.parallelism)));

    Summary::new("Configuration", sections)
}

/// Creates "Status" summary with the job start and completion times.
pub fn create_job_status(job: &Job) -> Summary {
    let status = job.status.as_ref();

    let mut sections = SummarySections::new();
    if let Some(start_time) = status.and_then(|s| s.start_time.as_ref()) {
        sections.add("Started", timestamp(Some(start_time)));
    }

    if let Some(completion_time) = status.and_then(|s| s.completion_time.as_ref()) {
        sections.add("Completed", timestamp(Some(completion_time)));
    }

    let succeeded = status.and_then(|s| s.succeeded).unwrap_or_default();
    sections.add_text("Succeeded", succeeded.to_string());

    Summary::new("Status", sections)
}

/// Creates "Conditions" table.
pub fn create_job_conditions(conditions: &[JobCondition]) -> Result<Table, PrintError> {
    let mut table = Table::new(
        "Conditions",
        "There are no job conditions!",
        table_cols(&JOB_CONDITION_COLUMNS),
    );

    for condition in conditions {
        let row = TableRow::new()
            .with("Type", Text::new(&condition.type_))
            .with("Last Probe", timestamp(condition.last_probe_time.as_ref()))
            .with("Last Transition", timestamp(condition.last_transition_time.as_ref()))
            .with("Status", Text::new(&condition.status))
            .with("Message", Text::new(condition.message.as_deref().unwrap_or_default()))
            .with("Reason", Text::new(condition.reason.as_deref().unwrap_or_default()));
        table.add(row)?;
    }

    Ok(table)
}

/// Creates "Jobs" table with jobs owned by the `owner`, printed without labels.
pub async fn create_job_list_view(owner: &ObjectRef, options: &PrintOptions) -> Result<Table, PrintError> {
    let key = Key::new(owner.namespace.as_deref(), "batch/v1", "Job");

    let mut jobs = Vec::new();
    for object in options.store.list(&key).await? {
        let job = from_dynamic::<Job>(&object)?;
        let is_owned = job
            .owner_references()
            .iter()
            .any(|o| o.api_version == owner.api_version && o.kind == owner.kind && o.name == owner.name);
        if is_owned {
            jobs.push(job);
        }
    }

    job_list_handler(Some(jobs.as_slice()), &options.without_labels())
}

async fn job_pods(job: &Job, options: &PrintOptions) -> Result<Table, PrintError> {
    let labels = job
        .spec
        .as_ref()
        .and_then(|s| s.template.metadata.as_ref())
        .and_then(|m| m.labels.as_ref());

    create_pod_list_view(&ObjectRef::from_resource(job), labels, options).await
}
