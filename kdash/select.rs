use kube::ResourceExt;
use kube::core::DynamicObject;

use crate::cli::PrintArgs;

#[cfg(test)]
#[path = "./select.tests.rs"]
mod select_tests;

/// Returns the first object matching kind, name and namespace from the print arguments.
pub fn select_object<'a>(objects: &'a [DynamicObject], args: &PrintArgs) -> Option<&'a DynamicObject> {
    objects.iter().find(|o| matches(o, args, true))
}

/// Returns the api version, kind and objects of the first listed kind matching the print arguments.\
/// **Note** that `--name` is ignored, so the list holds every object of the kind.
pub fn select_list(objects: &[DynamicObject], args: &PrintArgs) -> Option<(String, String, Vec<DynamicObject>)> {
    let types = objects.iter().find(|o| matches(o, args, false))?.types.clone()?;
    let list = objects
        .iter()
        .filter(|o| o.types.as_ref() == Some(&types) && matches(o, args, false))
        .cloned()
        .collect();

    Some((types.api_version, types.kind, list))
}

fn matches(object: &DynamicObject, args: &PrintArgs, with_name: bool) -> bool {
    let Some(types) = &object.types else {
        return false;
    };

    let (api_version, kind) = args.kind();
    api_version.is_none_or(|v| v == types.api_version)
        && kind.is_none_or(|k| k == types.kind)
        && args.namespace.as_ref().is_none_or(|ns| object.namespace().as_ref() == Some(ns))
        && (!with_name || args.name.as_ref().is_none_or(|name| object.name_any() == *name))
}
