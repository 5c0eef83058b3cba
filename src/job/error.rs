use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidField {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("job has non-numeric fields: {}", describe_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<InvalidField>,
}

fn describe_fields(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(|invalid| format!("{}=`{}`", invalid.field, invalid.value))
        .collect::<Vec<_>>()
        .join(", ")
}
