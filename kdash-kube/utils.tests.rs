use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use rstest::rstest;

use super::*;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[rstest]
#[case(true, &[], &[("app", "nginx")])]
#[case(true, &[("app", "nginx")], &[("app", "nginx"), ("tier", "web")])]
#[case(false, &[("app", "nginx")], &[("app", "kuard")])]
#[case(false, &[("app", "nginx"), ("tier", "web")], &[("app", "nginx")])]
fn labels_match_test(#[case] expected: bool, #[case] selector: &[(&str, &str)], #[case] labels: &[(&str, &str)]) {
    assert_eq!(expected, labels_match(&map(selector), &map(labels)));
}

#[test]
fn controller_of_test() {
    let owner = |name: &str, controller: Option<bool>| OwnerReference {
        api_version: "apps/v1".into(),
        kind: "ReplicaSet".into(),
        name: name.into(),
        uid: format!("{name}-uid"),
        controller,
        ..Default::default()
    };

    let owners = vec![owner("first", None), owner("second", Some(true))];
    assert_eq!(Some("second"), controller_of(&owners).map(|o| o.name.as_str()));
    assert_eq!(None, controller_of(&owners[..1]));
}

#[test]
fn dynamic_round_trip_keeps_type_test() {
    let secret = Secret {
        metadata: ObjectMeta {
            name: Some("token".into()),
            ..Default::default()
        },
        type_: Some("Opaque".into()),
        ..Default::default()
    };

    let dynamic = to_dynamic(&secret).unwrap();
    assert_eq!(Some("Secret"), dynamic.types.as_ref().map(|t| t.kind.as_str()));

    let typed: Secret = from_dynamic(&dynamic).unwrap();
    assert_eq!(secret, typed);
}
