//! The export request: one boolean per field, read from a checkbox snapshot
//! on the page side and decoded from the query string on the server side.

use url::Url;

use crate::error::ExportError;
use crate::field::ExportField;
use crate::snapshot::CheckboxSnapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportRequest {
    flags: [bool; 6],
}

impl ExportRequest {
    /// Read all six checkboxes in declaration order.
    ///
    /// Fails on the first checkbox the snapshot does not contain.
    pub fn read<S: CheckboxSnapshot + ?Sized>(snapshot: &S) -> Result<Self, ExportError> {
        let mut flags = [false; 6];
        for field in ExportField::ALL {
            let id = field.checkbox_id();
            flags[field.index()] = snapshot
                .checked(id)
                .ok_or(ExportError::MissingCheckbox { checkbox_id: id })?;
        }
        Ok(Self { flags })
    }

    /// Decode the six flags from an export URL's query string.
    ///
    /// Every parameter must be present and literally `true` or `false`.
    /// The first occurrence of a key wins; other parameters are ignored.
    pub fn from_query(url: &Url) -> Result<Self, ExportError> {
        let mut seen: [Option<bool>; 6] = [None; 6];
        for (key, value) in url.query_pairs() {
            let Some(field) = ExportField::ALL
                .into_iter()
                .find(|f| f.param_name() == key)
            else {
                continue;
            };
            if seen[field.index()].is_some() {
                continue;
            }
            let flag = match value.as_ref() {
                "true" => true,
                "false" => false,
                other => {
                    return Err(ExportError::InvalidFlag {
                        param: field.param_name(),
                        value: other.to_string(),
                    })
                }
            };
            seen[field.index()] = Some(flag);
        }

        let mut flags = [false; 6];
        for field in ExportField::ALL {
            flags[field.index()] =
                seen[field.index()].ok_or(ExportError::MissingParameter(field.param_name()))?;
        }
        Ok(Self { flags })
    }

    pub fn get(&self, field: ExportField) -> bool {
        self.flags[field.index()]
    }

    pub fn set(&mut self, field: ExportField, included: bool) {
        self.flags[field.index()] = included;
    }

    /// Query pairs in declaration order, values `"true"` / `"false"`.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        ExportField::ALL
            .into_iter()
            .map(move |f| (f.param_name(), if self.get(f) { "true" } else { "false" }))
    }

    pub fn included(&self) -> impl Iterator<Item = ExportField> + '_ {
        ExportField::ALL.into_iter().filter(move |f| self.get(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::CheckedSet;
    use std::collections::HashMap;

    #[test]
    fn read_all_unchecked() {
        let req = ExportRequest::read(&CheckedSet::new()).unwrap();
        assert_eq!(req, ExportRequest::default());
        assert!(req.query_pairs().all(|(_, v)| v == "false"));
    }

    #[test]
    fn read_email_and_shirt() {
        let snap: CheckedSet = [ExportField::Email, ExportField::Shirt].into_iter().collect();
        let req = ExportRequest::read(&snap).unwrap();
        let pairs: Vec<_> = req.query_pairs().collect();
        assert_eq!(
            pairs,
            [
                ("name", "false"),
                ("email", "true"),
                ("phone", "false"),
                ("shirt", "true"),
                ("nutrition", "false"),
                ("comment", "false"),
            ]
        );
        assert_eq!(
            req.included().collect::<Vec<_>>(),
            [ExportField::Email, ExportField::Shirt]
        );
    }

    #[test]
    fn read_missing_checkbox() {
        let mut map: HashMap<String, bool> = ExportField::ALL
            .iter()
            .map(|f| (f.checkbox_id().to_string(), true))
            .collect();
        map.remove("checkbox_comment");
        match ExportRequest::read(&map) {
            Err(ExportError::MissingCheckbox { checkbox_id }) => {
                assert_eq!(checkbox_id, "checkbox_comment")
            }
            other => panic!("expected MissingCheckbox, got {other:?}"),
        }
    }

    #[test]
    fn from_query_decodes_contract() {
        let url = Url::parse(
            "https://example.org/export?name=true&email=false&phone=true&shirt=false&nutrition=true&comment=false",
        )
        .unwrap();
        let req = ExportRequest::from_query(&url).unwrap();
        assert!(req.get(ExportField::Name));
        assert!(!req.get(ExportField::Email));
        assert!(req.get(ExportField::Phone));
        assert!(req.get(ExportField::Nutrition));
        assert!(!req.get(ExportField::Comment));
    }

    #[test]
    fn from_query_ignores_unrelated_and_duplicates() {
        let url = Url::parse(
            "https://example.org/export?date=2024-06-01&name=true&name=false&email=false&phone=false&shirt=false&nutrition=false&comment=true",
        )
        .unwrap();
        let req = ExportRequest::from_query(&url).unwrap();
        assert!(req.get(ExportField::Name));
        assert!(req.get(ExportField::Comment));
    }

    #[test]
    fn from_query_missing_parameter() {
        let url = Url::parse("https://example.org/export?name=true&email=true").unwrap();
        assert!(matches!(
            ExportRequest::from_query(&url),
            Err(ExportError::MissingParameter("phone"))
        ));
    }

    #[test]
    fn from_query_rejects_non_boolean() {
        let url = Url::parse("https://example.org/export?name=on").unwrap();
        match ExportRequest::from_query(&url) {
            Err(ExportError::InvalidFlag { param, value }) => {
                assert_eq!(param, "name");
                assert_eq!(value, "on");
            }
            other => panic!("expected InvalidFlag, got {other:?}"),
        }
    }
}
