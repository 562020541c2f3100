use clap::Parser;
use rstest::rstest;

use super::*;

#[rstest]
#[case(None, (None, None))]
#[case(Some("Deployment"), (None, Some("Deployment")))]
#[case(Some("v1/Secret"), (Some("v1"), Some("Secret")))]
#[case(Some("apps/v1/Deployment"), (Some("apps/v1"), Some("Deployment")))]
fn print_args_kind_test(#[case] kind: Option<&str>, #[case] expected: (Option<&str>, Option<&str>)) {
    let args = PrintArgs {
        files: vec![PathBuf::from("manifest.yaml")],
        kind: kind.map(String::from),
        name: None,
        namespace: None,
        list: false,
        pretty: false,
    };

    assert_eq!(expected, args.kind());
}

#[test]
fn parse_print_command_test() {
    let args = Args::try_parse_from([
        "kdash", "print", "-f", "a.yaml", "b.yaml", "--kind", "Job", "-n", "batch", "--list",
    ])
    .unwrap();

    let Command::Print(print) = args.command else {
        panic!("expected print command");
    };
    assert_eq!(vec![PathBuf::from("a.yaml"), PathBuf::from("b.yaml")], print.files);
    assert_eq!(Some("batch"), print.namespace.as_deref());
    assert!(print.list);
    assert!(!print.pretty);
}

#[test]
fn parse_print_without_files_test() {
    assert!(Args::try_parse_from(["kdash", "print", "--kind", "Job"]).is_err());
}
