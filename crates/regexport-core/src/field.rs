//! The six fixed export fields and their page/query identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

/// A column group the operator can include in a registration export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExportField {
    Name,
    Email,
    Phone,
    Shirt,
    Nutrition,
    Comment,
}

impl ExportField {
    /// All fields in declaration order. Query parameters are emitted in this order.
    pub const ALL: [ExportField; 6] = [
        ExportField::Name,
        ExportField::Email,
        ExportField::Phone,
        ExportField::Shirt,
        ExportField::Nutrition,
        ExportField::Comment,
    ];

    /// Query-parameter key.
    pub fn param_name(self) -> &'static str {
        match self {
            ExportField::Name => "name",
            ExportField::Email => "email",
            ExportField::Phone => "phone",
            ExportField::Shirt => "shirt",
            ExportField::Nutrition => "nutrition",
            ExportField::Comment => "comment",
        }
    }

    /// Identifier of the checkbox element on the export page.
    pub fn checkbox_id(self) -> &'static str {
        match self {
            ExportField::Name => "checkbox_name",
            ExportField::Email => "checkbox_email",
            ExportField::Phone => "checkbox_phone",
            ExportField::Shirt => "checkbox_shirt",
            ExportField::Nutrition => "checkbox_nutrition",
            ExportField::Comment => "checkbox_comment",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ExportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

/// Accepts the parameter name (any case) or the checkbox id.
impl FromStr for ExportField {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ExportField::ALL
            .into_iter()
            .find(|f| f.param_name().eq_ignore_ascii_case(wanted) || f.checkbox_id() == wanted)
            .ok_or_else(|| ExportError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order() {
        let names: Vec<_> = ExportField::ALL.iter().map(|f| f.param_name()).collect();
        assert_eq!(
            names,
            ["name", "email", "phone", "shirt", "nutrition", "comment"]
        );
        for (i, f) in ExportField::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
    }

    #[test]
    fn checkbox_ids_map_one_to_one() {
        for f in ExportField::ALL {
            assert_eq!(f.checkbox_id(), format!("checkbox_{}", f.param_name()));
        }
    }

    #[test]
    fn parse_names_and_ids() {
        assert_eq!("email".parse::<ExportField>().unwrap(), ExportField::Email);
        assert_eq!("SHIRT".parse::<ExportField>().unwrap(), ExportField::Shirt);
        assert_eq!(
            "checkbox_nutrition".parse::<ExportField>().unwrap(),
            ExportField::Nutrition
        );
        assert!(matches!(
            "foodhandling".parse::<ExportField>(),
            Err(ExportError::UnknownField(s)) if s == "foodhandling"
        ));
    }
}
