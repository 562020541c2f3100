use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::{ConfigMap, ReplicationController, Secret, ServiceAccount};
use kdash_kube::utils::from_dynamic;
use kdash_view::Component;
use kube::core::DynamicObject;
use serde::de::DeserializeOwned;

use crate::printers::config_map::{config_map_handler, config_map_list_handler};
use crate::printers::deployment::{deployment_handler, deployment_list_handler};
use crate::printers::job::{job_handler, job_list_handler};
use crate::printers::replication_controller::{replication_controller_handler, replication_controller_list_handler};
use crate::printers::secret::{secret_handler, secret_list_handler};
use crate::printers::service_account::{service_account_handler, service_account_list_handler};
use crate::{PrintError, PrintOptions};

#[cfg(test)]
#[path = "./printer.tests.rs"]
mod printer_tests;

/// Dispatches objects to the printer registered for their `apiVersion` and `kind`.
pub struct Printer {
    options: PrintOptions,
}

impl Printer {
    /// Creates new [`Printer`] instance.
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Prints the object summary.
    pub async fn print(&self, object: Option<&DynamicObject>) -> Result<Component, PrintError> {
        let object = object.ok_or(PrintError::MissingInput("object"))?;
        let types = object.types.as_ref().ok_or(PrintError::MissingInput("object type"))?;
        let options = &self.options;

        match (types.api_version.as_str(), types.kind.as_str()) {
            ("apps/v1", "Deployment") => deployment_handler(Some(&from_dynamic::<Deployment>(object)?), options).await,
            ("batch/v1", "Job") => job_handler(Some(&from_dynamic::<Job>(object)?), options).await,
            ("v1", "ConfigMap") => config_map_handler(Some(&from_dynamic::<ConfigMap>(object)?), options).await,
            ("v1", "ReplicationController") => {
                let rc = from_dynamic::<ReplicationController>(object)?;
                replication_controller_handler(Some(&rc), options).await
            },
            ("v1", "Secret") => secret_handler(Some(&from_dynamic::<Secret>(object)?), options).await,
            ("v1", "ServiceAccount") => {
                let service_account = from_dynamic::<ServiceAccount>(object)?;
                service_account_handler(Some(&service_account), options).await
            },
            (api_version, kind) => Err(unsupported(api_version, kind)),
        }
    }

    /// Prints the list of objects of the given `api_version` and `kind`.
    pub fn print_list(
        &self,
        api_version: &str,
        kind: &str,
        objects: &[DynamicObject],
    ) -> Result<Component, PrintError> {
        let options = &self.options;
        let table = match (api_version, kind) {
            ("apps/v1", "Deployment") => {
                deployment_list_handler(Some(convert::<Deployment>(objects)?.as_slice()), options)?
            },
            ("batch/v1", "Job") => job_list_handler(Some(convert::<Job>(objects)?.as_slice()), options)?,
            ("v1", "ConfigMap") => config_map_list_handler(Some(convert::<ConfigMap>(objects)?.as_slice()), options)?,
            ("v1", "ReplicationController") => {
                let list = convert::<ReplicationController>(objects)?;
                replication_controller_list_handler(Some(list.as_slice()), options)?
            },
            ("v1", "Secret") => secret_list_handler(Some(convert::<Secret>(objects)?.as_slice()), options)?,
            ("v1", "ServiceAccount") => {
                let list = convert::<ServiceAccount>(objects)?;
                service_account_list_handler(Some(list.as_slice()), options)?
            },
            _ => return Err(unsupported(api_version, kind)),
        };

        Ok(table.into())
    }
}

fn convert<K: DeserializeOwned>(objects: &[DynamicObject]) -> Result<Vec<K>, PrintError> {
    Ok(objects.iter().map(from_dynamic).collect::<Result<Vec<K>, _>>()?)
}

fn unsupported(api_version: &str, kind: &str) -> PrintError {
    PrintError::UnsupportedKind {
        api_version: api_version.to_owned(),
        kind: kind.to_owned(),
    }
}
