use rstest::rstest;

use crate::Text;

use super::*;

fn item(width: Width) -> FlexLayoutItem {
    FlexLayoutItem::new(Text::new("x"), width)
}

#[test]
fn section_rejects_overflow_test() {
    let mut layout = FlexLayout::new("Summary");
    let section = layout.add_section();

    section.add(Text::new("config"), Width::Half).unwrap();
    section.add(Text::new("status"), Width::Half).unwrap();

    assert_eq!(
        Err(ViewError::SectionFull { width: 6, used: 24 }),
        section.add(Text::new("more"), Width::Quarter)
    );
    assert_eq!(2, layout.sections()[0].items().len());
}

#[rstest]
#[case(vec![Width::Full, Width::Full], vec![1, 1])]
#[case(vec![Width::Quarter, Width::Full], vec![1, 1])]
#[case(vec![Width::Half, Width::Half, Width::Quarter], vec![2, 1])]
#[case(vec![Width::Third, Width::Third, Width::Third, Width::Half], vec![3, 1])]
#[case(vec![], vec![])]
fn pack_test(#[case] widths: Vec<Width>, #[case] expected: Vec<usize>) {
    let mut layout = FlexLayout::new("Summary");
    layout.pack(widths.into_iter().map(item));

    let counts = layout.sections().iter().map(|s| s.items().len()).collect::<Vec<_>>();
    assert_eq!(expected, counts);
}

#[test]
fn compact_test() {
    let mut layout = FlexLayout::new("Summary");
    layout.add_section();
    layout.add_section().add(Text::new("a"), Width::Full).unwrap();
    layout.add_section();
    layout.compact();

    assert_eq!(1, layout.sections().len());
}

#[test]
fn pack_keeps_sections_within_width_test() {
    let mut layout = FlexLayout::new("Summary");
    layout.pack([Width::Full, Width::Full, Width::Half, Width::Third, Width::Half].map(item));

    let used = layout.sections().iter().map(FlexLayoutSection::used).collect::<Vec<_>>();
    assert_eq!(vec![24, 24, 20, 12], used);
}

#[test]
fn item_width_serialization_test() {
    let value = k8s_openapi::serde_json::to_value(item(Width::Third)).unwrap();

    assert_eq!(8, value["width"]);
}
