use jiff::civil::date;

use oftalmo_core::error::CoreError;
use oftalmo_core::keys;
use oftalmo_core::models::patient::NewPatient;

fn form(name: &str, birth_date: &str) -> NewPatient {
    NewPatient {
        name: name.to_string(),
        birth_date: birth_date.to_string(),
        phone: None,
        address: None,
    }
}

#[test]
fn name_is_trimmed_and_upper_cased() {
    let patient = form("  maria da conceição ", "1958-09-02")
        .into_patient()
        .unwrap();
    assert_eq!(patient.name, "MARIA DA CONCEIÇÃO");
    assert_eq!(patient.birth_date, date(1958, 9, 2));
}

#[test]
fn blank_optional_fields_become_none() {
    let mut new = form("Ana", "1990-01-01");
    new.phone = Some("   ".to_string());
    new.address = Some(" Rua A, 10 ".to_string());

    let patient = new.into_patient().unwrap();
    assert_eq!(patient.phone, None);
    assert_eq!(patient.address.as_deref(), Some("Rua A, 10"));
}

#[test]
fn name_and_birth_date_are_required() {
    assert!(matches!(
        form("   ", "1990-01-01").into_patient(),
        Err(CoreError::MissingField(field)) if field == "name"
    ));
    assert!(matches!(
        form("Ana", "").into_patient(),
        Err(CoreError::MissingField(field)) if field == "birth_date"
    ));
}

#[test]
fn bad_birth_date_is_invalid_format() {
    assert!(matches!(
        form("Ana", "01/01/1990").into_patient(),
        Err(CoreError::InvalidDateFormat(_))
    ));
}

#[test]
fn age_on_uses_birth_date() {
    let patient = form("Ana", "1960-05-10").into_patient().unwrap();
    assert_eq!(patient.age_on(date(2024, 5, 9)), 63);
    assert_eq!(patient.age_on(date(2024, 5, 10)), 64);
}

#[test]
fn birth_date_serializes_as_iso_string() {
    let patient = form("Ana", "1960-05-10").into_patient().unwrap();
    let json = serde_json::to_value(&patient).unwrap();
    assert_eq!(json["birth_date"], "1960-05-10");
}

#[test]
fn record_keys() {
    let id = uuid::Uuid::nil();
    assert_eq!(
        keys::patient(id),
        "patients/00000000-0000-0000-0000-000000000000.json"
    );
    assert!(keys::attendance(id).starts_with(keys::ATTENDANCES_PREFIX));
}
