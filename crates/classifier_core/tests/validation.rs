use classifier_core::{can_submit, sample_job_record, JobField, JobRecord};

fn record(title: &str, description: &str) -> JobRecord {
    JobRecord {
        title: title.to_string(),
        description: description.to_string(),
        ..JobRecord::default()
    }
}

#[test]
fn blank_required_fields_block_submission() {
    let blanks = ["", " ", "\t\n", "   \r\n  "];
    for blank in blanks {
        assert!(!can_submit(&record(blank, "Build things")), "title {blank:?}");
        assert!(!can_submit(&record("Engineer", blank)), "description {blank:?}");
        assert!(!can_submit(&record(blank, blank)));
    }
}

#[test]
fn optional_fields_never_affect_the_gate() {
    let mut filled = record("Engineer", "Build things");
    assert!(can_submit(&filled));

    for field in [
        JobField::CompanyProfile,
        JobField::Requirements,
        JobField::Benefits,
    ] {
        filled.set(field, "   ");
        assert!(can_submit(&filled));
        filled.set(field, "lots of text");
        assert!(can_submit(&filled));
    }

    let mut blocked = record("", "Build things");
    blocked.company_profile = "Acme".to_string();
    blocked.requirements = "Rust".to_string();
    blocked.benefits = "Snacks".to_string();
    assert!(!can_submit(&blocked));
}

#[test]
fn padded_required_fields_pass() {
    assert!(can_submit(&record("  x ", "\ty\n")));
}

#[test]
fn sample_record_is_submittable() {
    assert!(can_submit(&sample_job_record()));
}

#[test]
fn field_keys_round_trip_and_required_flags() {
    for field in JobField::ALL {
        assert_eq!(JobField::from_key(field.key()), Some(field));
    }
    assert_eq!(JobField::from_key(" Company_Profile "), Some(JobField::CompanyProfile));
    assert_eq!(JobField::from_key("salary"), None);

    let required: Vec<_> = JobField::ALL
        .into_iter()
        .filter(|field| field.is_required())
        .collect();
    assert_eq!(required, vec![JobField::Title, JobField::Description]);
}
