use super::{InvalidField, JobDescriptor, Result, ValidationError};

impl JobDescriptor {
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, &str); 7] = [
            ("diameter", &self.diameter),
            ("xleft", &self.xleft),
            ("ydown", &self.ydown),
            ("xdim", &self.xdim),
            ("ydim", &self.ydim),
            ("verticalAngle", &self.vertical_angle),
            ("horizontalAngle", &self.horizontal_angle),
        ];
        let fields = checks
            .into_iter()
            .filter(|(_, value)| value.trim().parse::<f64>().is_err())
            .map(|(field, value)| InvalidField {
                field,
                value: value.to_string(),
            })
            .collect::<Vec<_>>();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}
