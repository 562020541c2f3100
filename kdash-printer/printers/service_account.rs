use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, PolicyRule, Role, RoleBinding, RoleRef, Subject};
use kdash_common::join_or_none;
use kdash_kube::utils::{from_dynamic, to_dynamic};
use kdash_kube::{Key, ObjectRef, ObjectStore};
use kdash_view::{Component, FlexLayout, List, Summary, SummarySections, Table, TableRow, Text, Width, table_cols};
use kube::ResourceExt;
use tracing::warn;

use crate::object::metadata_summary;
use crate::utils::{list_columns, list_row, timestamp};
use crate::{BoxedFuture, PrintError, PrintOptions};

#[cfg(test)]
#[path = "./service_account.tests.rs"]
mod service_account_tests;

pub const SERVICE_ACCOUNT_COLUMNS: [&str; 4] = ["Name", "Labels", "Secrets", "Age"];

pub const POLICY_RULE_COLUMNS: [&str; 4] = ["Resources", "Non-Resource URLs", "Resource Names", "Verbs"];

pub const SERVICE_ACCOUNT_TOKEN: &str = "kubernetes.io/service-account-token";
pub const SERVICE_ACCOUNT_NAME_KEY: &str = "kubernetes.io/service-account.name";
pub const SERVICE_ACCOUNT_UID_KEY: &str = "kubernetes.io/service-account.uid";

const RBAC_VERSION: &str = "rbac.authorization.k8s.io/v1";
const ALL_SERVICE_ACCOUNTS: &str = "system:serviceaccounts";

/// Creates the service account "Configuration" summary.
pub type ConfigFunc = for<'b> fn(&'b ServiceAccount, &'b PrintOptions) -> BoxedFuture<'b, Summary>;

/// Creates the service account "Policy Rules" table.
pub type PolicyRulesFunc = for<'b> fn(&'b ServiceAccount, &'b dyn ObjectStore) -> BoxedFuture<'b, Table>;

/// Creates "Service Accounts" table.
pub fn service_account_list_handler(
    list: Option<&[ServiceAccount]>,
    options: &PrintOptions,
) -> Result<Table, PrintError> {
    let list = list.ok_or(PrintError::MissingInput("service account list"))?;
    let mut table = Table::new(
        "Service Accounts",
        "We couldn't find any service accounts!",
        list_columns(&SERVICE_ACCOUNT_COLUMNS, options),
    );

    for service_account in list {
        let secrets = service_account.secrets.as_ref().map_or(0, |s| s.len());
        let row = list_row(service_account, options)?
            .with("Secrets", Text::new(secrets.to_string()))
            .with("Age", timestamp(service_account.creation_timestamp().as_ref()));
        table.add(row)?;
    }

    Ok(table)
}

/// Prints the service account summary.
pub async fn service_account_handler(
    service_account: Option<&ServiceAccount>,
    options: &PrintOptions,
) -> Result<Component, PrintError> {
    let service_account = service_account.ok_or(PrintError::MissingInput("service account"))?;
    ServiceAccountHandler::new(service_account, options).run().await
}

/// Builds the service account summary layout.
pub struct ServiceAccountHandler<'a> {
    service_account: &'a ServiceAccount,
    options: &'a PrintOptions,
    config_func: ConfigFunc,
    policy_rules_func: PolicyRulesFunc,
}

impl<'a> ServiceAccountHandler<'a> {
    /// Creates new [`ServiceAccountHandler`] instance.
    pub fn new(service_account: &'a ServiceAccount, options: &'a PrintOptions) -> Self {
        Self {
            service_account,
            options,
            config_func: default_config,
            policy_rules_func: default_policy_rules,
        }
    }

    /// Replaces function that creates the configuration summary.
    pub fn with_config(mut self, func: ConfigFunc) -> Self {
        self.config_func = func;
        self
    }

    /// Replaces function that creates the policy rules table.
    pub fn with_policy_rules(mut self, func: PolicyRulesFunc) -> Self {
        self.policy_rules_func = func;
        self
    }

    /// Builds the "Summary" flex layout.
    pub async fn run(&self) -> Result<Component, PrintError> {
        let service_account = self.service_account;
        let plugin = self.options.plugins.print(&to_dynamic(service_account)?).await?;

        let mut config = (self.config_func)(service_account, self.options).await?;
        config.add(plugin.config);

        let mut layout = FlexLayout::new("Summary");
        let section = layout.add_section();
        section.add(config, Width::Half)?;
        if !plugin.status.is_empty() {
            section.add(Summary::new("Status", plugin.status), Width::Half)?;
        }

        let object_ref = ObjectRef::from_resource(service_account);
        let metadata = metadata_summary(&object_ref, &service_account.metadata, self.options)?;
        layout.add_section().add(metadata, Width::Half)?;

        let rules = (self.policy_rules_func)(service_account, self.options.store.as_ref()).await?;
        layout.add_section().add(rules, Width::Full)?;

        layout.pack(plugin.items);
        Ok(layout.into())
    }
}

fn default_config<'b>(service_account: &'b ServiceAccount, options: &'b PrintOptions) -> BoxedFuture<'b, Summary> {
    Box::pin(print_service_account_config(service_account, options))
}

fn default_policy_rules<'b>(service_account: &'b ServiceAccount, store: &'b dyn ObjectStore) -> BoxedFuture<'b, Table> {
    Box::pin(async move { ServiceAccountPolicyRules::new(service_account, store).run().await })
}

/// Creates "Configuration" summary with the image pull, mountable and token secrets.\
/// **Note** that sections without secrets are omitted.
pub async fn print_service_account_config(
    service_account: &ServiceAccount,
    options: &PrintOptions,
) -> Result<Summary, PrintError> {
    let namespace = service_account.namespace();
    let mut sections = SummarySections::new();

    let pull_secrets = service_account
        .image_pull_secrets
        .iter()
        .flatten()
        .map(|s| secret_link(namespace.as_deref(), &s.name, options))
        .collect::<Result<Vec<_>, _>>()?;
    if !pull_secrets.is_empty() {
        sections.add("Image Pull Secrets", List::new("", pull_secrets));
    }

    let mountable_secrets = service_account
        .secrets
        .iter()
        .flatten()
        .filter_map(|s| s.name.as_deref())
        .map(|name| secret_link(namespace.as_deref(), name, options))
        .collect::<Result<Vec<_>, _>>()?;
    if !mountable_secrets.is_empty() {
        sections.add("Mountable Secrets", List::new("", mountable_secrets));
    }

    let key = Key::new(namespace.as_deref(), "v1", "Secret");
    let mut tokens = Vec::new();
    for object in options.store.list(&key).await? {
        let secret = from_dynamic::<Secret>(&object)?;
        if is_token_of(&secret, service_account) {
            tokens.push(secret_link(secret.namespace().as_deref(), &secret.name_any(), options)?);
        }
    }

    if !tokens.is_empty() {
        sections.add("Tokens", List::new("", tokens));
    }

    Ok(Summary::new("Configuration", sections))
}

fn secret_link(namespace: Option<&str>, name: &str, options: &PrintOptions) -> Result<Component, PrintError> {
    Ok(options.link.for_gvk(namespace, "v1", "Secret", name, name)?.into())
}

fn is_token_of(secret: &Secret, service_account: &ServiceAccount) -> bool {
    if secret.type_.as_deref() != Some(SERVICE_ACCOUNT_TOKEN) {
        return false;
    }

    let annotations = secret.annotations();
    if annotations.get(SERVICE_ACCOUNT_NAME_KEY) != Some(&service_account.name_any()) {
        return false;
    }

    annotations
        .get(SERVICE_ACCOUNT_UID_KEY)
        .is_none_or(|uid| service_account.metadata.uid.as_ref() == Some(uid))
}

/// Collects policy rules granted to the service account by role and cluster role bindings.
pub struct ServiceAccountPolicyRules<'a> {
    service_account: &'a ServiceAccount,
    store: &'a dyn ObjectStore,
}

impl<'a> ServiceAccountPolicyRules<'a> {
    /// Creates new [`ServiceAccountPolicyRules`] instance.
    pub fn new(service_account: &'a ServiceAccount, store: &'a dyn ObjectStore) -> Self {
        Self { service_account, store }
    }

    /// Creates the "Policy Rules" table.
    pub async fn run(&self) -> Result<Table, PrintError> {
        print_policy_rules(&self.collect().await?)
    }

    /// Returns rules of all roles bound to the service account, in the bindings order.\
    /// **Note** that roles missing in the store are skipped.
    pub async fn collect(&self) -> Result<Vec<PolicyRule>, PrintError> {
        let namespace = self.service_account.namespace();
        let mut rules = Vec::new();

        let key = Key::new(namespace.as_deref(), RBAC_VERSION, "RoleBinding");
        for object in self.store.list(&key).await? {
            let binding = from_dynamic::<RoleBinding>(&object)?;
            if self.is_subject(binding.subjects.as_deref()) {
                self.add_rules(namespace.as_deref(), &binding.role_ref, &mut rules).await?;
            }
        }

        let key = Key::new(None, RBAC_VERSION, "ClusterRoleBinding");
        for object in self.store.list(&key).await? {
            let binding = from_dynamic::<ClusterRoleBinding>(&object)?;
            if self.is_subject(binding.subjects.as_deref()) {
                self.add_rules(None, &binding.role_ref, &mut rules).await?;
            }
        }

        Ok(rules)
    }

    fn is_subject(&self, subjects: Option<&[Subject]>) -> bool {
        let name = self.service_account.name_any();
        let namespace = self.service_account.namespace().unwrap_or_default();
        let namespace_group = format!("{ALL_SERVICE_ACCOUNTS}:{namespace}");

        subjects.unwrap_or_default().iter().any(|s| match s.kind.as_str() {
            "ServiceAccount" => s.name == name && s.namespace.as_deref() == Some(namespace.as_str()),
            "Group" => s.name == ALL_SERVICE_ACCOUNTS || s.name == namespace_group,
            _ => false,
        })
    }

    async fn add_rules(
        &self,
        namespace: Option<&str>,
        role_ref: &RoleRef,
        rules: &mut Vec<PolicyRule>,
    ) -> Result<(), PrintError> {
        let is_cluster_role = match role_ref.kind.as_str() {
            "Role" => false,
            "ClusterRole" => true,
            kind => {
                warn!("unsupported role kind '{kind}' referenced by '{}'", role_ref.name);
                return Ok(());
            },
        };

        let key = if is_cluster_role {
            Key::new(None, RBAC_VERSION, "ClusterRole")
        } else {
            Key::new(namespace, RBAC_VERSION, "Role")
        }
        .with_name(&role_ref.name);

        let Some(object) = self.store.get(&key).await? else {
            warn!("skipping missing {key}");
            return Ok(());
        };

        let role_rules = if is_cluster_role {
            from_dynamic::<ClusterRole>(&object)?.rules
        } else {
            from_dynamic::<Role>(&object)?.rules
        };

        rules.extend(role_rules.unwrap_or_default());
        Ok(())
    }
}

/// Creates "Policy Rules" table.
pub fn print_policy_rules(rules: &[PolicyRule]) -> Result<Table, PrintError> {
    let mut table = Table::new(
        "Policy Rules",
        "There are no policy rules!",
        table_cols(&POLICY_RULE_COLUMNS),
    );

    for rule in rules {
        let row = TableRow::new()
            .with("Resources", Text::new(join_or_none(&rule_resources(rule), ", ")))
            .with("Non-Resource URLs", Text::new(join_values(rule.non_resource_urls.as_deref())))
            .with("Resource Names", Text::new(join_values(rule.resource_names.as_deref())))
            .with("Verbs", Text::new(join_or_none(&rule.verbs, ", ")));
        table.add(row)?;
    }

    Ok(table)
}

fn rule_resources(rule: &PolicyRule) -> Vec<String> {
    let groups = rule.api_groups.as_deref().unwrap_or_default();
    let mut resources = Vec::new();
    for resource in rule.resources.iter().flatten() {
        if groups.is_empty() {
            resources.push(resource.clone());
        }

        for group in groups {
            if group.is_empty() {
                resources.push(resource.clone());
            } else {
                resources.push(format!("{resource}.{group}"));
            }
        }
    }

    resources
}

fn join_values(values: Option<&[String]>) -> String {
    join_or_none(values.unwrap_or_default(), ", ")
}
