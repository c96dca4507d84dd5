use roster_core::{Employee, EmployeeFields, EmployeeValidationError};

#[test]
fn valid_fields_pass_validation() {
    let fields = EmployeeFields::new("Ada Lovelace", "Analyst", 1234.5);
    assert_eq!(fields.validate(), Ok(()));

    let zero_salary = EmployeeFields::new("Bob", "Dev", 0.0);
    assert_eq!(zero_salary.validate(), Ok(()));
}

#[test]
fn blank_text_fields_are_missing() {
    let err = EmployeeFields::new("", "Analyst", 1.0).validate().unwrap_err();
    assert_eq!(err, EmployeeValidationError::MissingField("name"));

    let err = EmployeeFields::new("Ada Lovelace", "   ", 1.0)
        .validate()
        .unwrap_err();
    assert_eq!(err, EmployeeValidationError::MissingField("position"));
}

#[test]
fn short_text_fields_are_rejected_by_char_count() {
    let err = EmployeeFields::new("Al", "Analyst", 1.0).validate().unwrap_err();
    assert_eq!(
        err,
        EmployeeValidationError::TooShort {
            field: "name",
            min: 3,
            actual: 2,
        }
    );
    assert_eq!(err.to_string(), "name must be at least 3 characters (got 2)");

    // Three multi-byte characters are long enough.
    let fields = EmployeeFields::new("李小龍", "Analyst", 1.0);
    assert_eq!(fields.validate(), Ok(()));
}

#[test]
fn unusable_salaries_are_rejected() {
    let err = EmployeeFields::new("Ada Lovelace", "Analyst", -0.5)
        .validate()
        .unwrap_err();
    assert_eq!(err, EmployeeValidationError::NegativeSalary(-0.5));

    for salary in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = EmployeeFields::new("Ada Lovelace", "Analyst", salary)
            .validate()
            .unwrap_err();
        assert_eq!(err, EmployeeValidationError::NonFiniteSalary);
    }
}

#[test]
fn apply_replaces_fields_but_keeps_id() {
    let mut employee = Employee::from_fields(7, EmployeeFields::new("Old Name", "Old Role", 1.0));
    employee.apply(EmployeeFields::new("New Name", "New Role", 2.0));

    assert_eq!(employee.id, 7);
    assert_eq!(employee.fields(), EmployeeFields::new("New Name", "New Role", 2.0));
}

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let employee = Employee::from_fields(3, EmployeeFields::new("Ada Lovelace", "Analyst", 1234.5));

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 3,
            "name": "Ada Lovelace",
            "position": "Analyst",
            "salary": 1234.5
        })
    );

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn request_body_deserializes_without_id() {
    let fields: EmployeeFields = serde_json::from_str(
        r#"{"name": "Grace Hopper", "position": "Compiler Engineer", "salary": 5100}"#,
    )
    .unwrap();

    assert_eq!(
        fields,
        EmployeeFields::new("Grace Hopper", "Compiler Engineer", 5100.0)
    );
}
