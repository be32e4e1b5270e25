use estate_core::{calculate, format_fraction, EstateInput, Gender, ParentsStatus, Relationship};

const TOLERANCE: f64 = 0.01;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn wife_alone_takes_quarter_rest_unclaimed() {
    let input = EstateInput::default()
        .with_total_assets(100_000.0)
        .with_gender(Gender::Male)
        .with_spouse(true);

    let heirs = calculate(&input).unwrap();

    assert_eq!(heirs.len(), 1);
    assert_eq!(heirs[0].relationship, Relationship::Spouse);
    assert_eq!(heirs[0].share, "1/4");
    assert_close(heirs[0].amount.value(), 25_000.0);
}

#[test]
fn wife_and_two_sons() {
    let input = EstateInput::default()
        .with_total_assets(100_000.0)
        .with_spouse(true)
        .with_sons(2);

    let heirs = calculate(&input).unwrap();

    assert_eq!(heirs.len(), 3);
    assert_eq!(heirs[0].share, "1/8");
    assert_close(heirs[0].amount.value(), 12_500.0);
    assert_close(heirs[1].amount.value(), 43_750.0);
    assert_close(heirs[2].amount.value(), 43_750.0);
}

#[test]
fn both_parents_son_and_daughter() {
    let input = EstateInput::default()
        .with_total_assets(60_000.0)
        .with_parents_status(ParentsStatus::Both)
        .with_sons(1)
        .with_daughters(1);

    let heirs = calculate(&input).unwrap();

    assert_eq!(heirs.len(), 4);
    assert_eq!(heirs[0].name, "Father");
    assert_close(heirs[0].amount.value(), 10_000.0);
    assert_eq!(heirs[1].name, "Mother");
    assert_close(heirs[1].amount.value(), 10_000.0);
    assert_eq!(heirs[2].name, "Son 1");
    assert_close(heirs[2].amount.value(), 26_666.67);
    assert_eq!(heirs[3].name, "Daughter 1");
    assert_close(heirs[3].amount.value(), 13_333.33);
}

#[test]
fn father_residue_excludes_brothers() {
    let input = EstateInput::default()
        .with_total_assets(75_000.0)
        .with_parents_status(ParentsStatus::Father)
        .with_brothers(3);

    let heirs = calculate(&input).unwrap();

    assert_eq!(heirs.len(), 1);
    assert_eq!(heirs[0].relationship, Relationship::Parent);
    assert_eq!(heirs[0].share, "Residue");
    assert_close(heirs[0].amount.value(), 75_000.0);
    assert!(heirs.iter().all(|h| h.relationship != Relationship::Sibling));
}

#[test]
fn json_input_produces_json_output() {
    let json = r#"{
        "totalAssets": 60000,
        "financialLiabilities": 0,
        "debtAmount": 0,
        "bequestsAmount": 0,
        "distributableEstate": 0,
        "genderDeceased": "male",
        "parentsStatus": "both",
        "sons": 1,
        "daughters": 1,
        "brothers": 0,
        "sisters": 0,
        "hasSpouse": false
    }"#;

    let input = EstateInput::from_json(json).unwrap();
    let heirs = calculate(&input).unwrap();
    let output = serde_json::to_value(&heirs).unwrap();

    assert_eq!(output[0]["name"], "Father");
    assert_eq!(output[0]["relationship"], "Parent");
    assert_eq!(output[2]["share"], "2x");
}

#[test]
fn fraction_labels() {
    assert_eq!(format_fraction(0.3333), "1/3");
    assert_eq!(format_fraction(0.2), "20.0%");
}
