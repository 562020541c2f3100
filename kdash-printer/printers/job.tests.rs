use k8s_openapi::api::batch::v1::{JobSpec, JobStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kdash_view::Labels;

use crate::testing::{created, dynamic, failing_options, labels, link, metadata, options};

use super::*;

fn job(name: &str, completions: Option<i32>) -> Job {
    let mut meta = metadata(name, "default");
    meta.labels = Some(labels(&[("foo", "bar")]));

    Job {
        metadata: meta,
        spec: Some(JobSpec {
            completions,
            backoff_limit: Some(6),
            ..Default::default()
        }),
        status: Some(JobStatus {
            succeeded: Some(1),
            ..Default::default()
        }),
    }
}

fn owned_by(mut job: Job, kind: &str, name: &str) -> Job {
    job.metadata.owner_references = Some(vec![OwnerReference {
        api_version: "batch/v1".to_owned(),
        kind: kind.to_owned(),
        name: name.to_owned(),
        uid: format!("{name}-uid"),
        controller: Some(true),
        ..Default::default()
    }]);
    job
}

#[test]
fn job_list_handler_test() {
    let list = vec![job("job", Some(1)), job("unbounded", None)];

    let table = job_list_handler(Some(list.as_slice()), &options(Vec::new())).unwrap();

    let row = |name: &str, completions: &str| {
        TableRow::new()
            .with("Name", link("default", "workloads/jobs", name))
            .with("Labels", Labels::new(labels(&[("foo", "bar")])))
            .with("Completions", Text::new(completions))
            .with("Successful", Text::new("1"))
            .with("Age", timestamp(Some(&created())))
    };
    let expected = Table::with_rows(
        "Jobs",
        "We couldn't find any jobs!",
        table_cols(&JOB_COLUMNS),
        vec![row("job", "1"), row("unbounded", "<not set>")],
    )
    .unwrap();
    assert_eq!(expected, table);
    assert!(matches!(
        job_list_handler(None, &options(Vec::new())),
        Err(PrintError::MissingInput(_))
    ));
}

#[test]
fn create_job_configuration_test() {
    let summary = create_job_configuration(&job("job", Some(3)));

    let mut sections = SummarySections::new();
    sections.add_text("Back Off Limit", "6");
    sections.add_text("Completions", "3");
    sections.add_text("Parallelism", "<not set>");
    assert_eq!(Summary::new("Configuration", sections), summary);
}

#[test]
fn create_job_status_test() {
    let mut job = job("job", Some(1));
    job.status.as_mut().unwrap().start_time = Some(created());

    let summary = create_job_status(&job);

    let mut sections = SummarySections::new();
    sections.add("Started", timestamp(Some(&created())));
    sections.add_text("Succeeded", "1");
    assert_eq!(Summary::new("Status", sections), summary);
}

#[test]
fn create_job_conditions_test() {
    let conditions = vec![JobCondition {
        type_: "Complete".to_owned(),
        status: "True".to_owned(),
        last_probe_time: Some(created()),
        last_transition_time: Some(created()),
        message: Some("done".to_owned()),
        reason: None,
    }];

    let table = create_job_conditions(&conditions).unwrap();

    let expected = TableRow::new()
        .with("Type", Text::new("Complete"))
        .with("Last Probe", timestamp(Some(&created())))
        .with("Last Transition", timestamp(Some(&created())))
        .with("Status", Text::new("True"))
        .with("Message", Text::new("done"))
        .with("Reason", Text::new(""));
    assert_eq!(&[expected], table.rows());
    assert_eq!("There are no job conditions!", create_job_conditions(&[]).unwrap().empty_content());
}

#[tokio::test]
async fn create_job_list_view_test() {
    let options = options(vec![
        dynamic(&owned_by(job("hourly-1", Some(1)), "CronJob", "hourly")),
        dynamic(&owned_by(job("daily-1", Some(1)), "CronJob", "daily")),
        dynamic(&owned_by(job("hourly-2", Some(1)), "Deployment", "hourly")),
        dynamic(&job("standalone", Some(1))),
    ]);
    let owner = ObjectRef {
        api_version: "batch/v1".to_owned(),
        kind: "CronJob".to_owned(),
        namespace: Some("default".to_owned()),
        name: "hourly".to_owned(),
        uid: Some("hourly-uid".to_owned()),
    };

    let table = create_job_list_view(&owner, &options).await.unwrap();

    let expected = TableRow::new()
        .with("Name", link("default", "workloads/jobs", "hourly-1"))
        .with("Completions", Text::new("1"))
        .with("Successful", Text::new("1"))
        .with("Age", timestamp(Some(&created())));
    assert_eq!(&[expected], table.rows());
    assert!(!table.has_column("Labels"));
}

#[tokio::test]
async fn create_job_list_view_store_error_test() {
    let owner = ObjectRef {
        api_version: "batch/v1".to_owned(),
        kind: "CronJob".to_owned(),
        namespace: Some("default".to_owned()),
        name: "hourly".to_owned(),
        uid: None,
    };

    let result = create_job_list_view(&owner, &failing_options()).await;

    assert!(matches!(result, Err(PrintError::Store(_))));
}

#[tokio::test]
async fn job_handler_test() {
    let component = job_handler(Some(&job("job", Some(1))), &options(Vec::new())).await.unwrap();

    let Component::FlexLayout(layout) = component else {
        panic!("expected flex layout");
    };
    let titles = layout
        .sections()
        .iter()
        .flat_map(|s| s.items())
        .map(|i| i.view.title().unwrap_or_default().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(
        vec!["Configuration", "Status", "Metadata", "Pods", "Conditions", "Pod Template", "Events"],
        titles
    );
}

#[tokio::test]
async fn job_handler_missing_job_test() {
    let result = job_handler(None, &options(Vec::new())).await;

    assert!(matches!(result, Err(PrintError::MissingInput("job"))));
}
