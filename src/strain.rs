use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One row of the strain directory, trimmed to the four displayed fields.
///
/// Serializes with the column names used by the dashboard table
/// (`Name`, `Rating`, `THC%`, `Type`), so a list of records is exactly the
/// list of field-to-value mappings the page renders.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct StrainRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    /// Integer percentage; never the raw text form such as `"18%"`.
    #[serde(rename = "THC%")]
    pub thc: Option<u32>,
    #[serde(rename = "Type")]
    pub strain_type: String,
}

/// The columns exposed to the display layer, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Rating,
    Thc,
    Type,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Name, Column::Rating, Column::Thc, Column::Type];

    /// Parse a column from its display name. Matching is exact, as column
    /// names are header names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Name" => Some(Column::Name),
            "Rating" => Some(Column::Rating),
            "THC%" => Some(Column::Thc),
            "Type" => Some(Column::Type),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Rating => "Rating",
            Column::Thc => "THC%",
            Column::Type => "Type",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a sort. Only `"asc"` means ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_strng(order: &str) -> Self {
        if order == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

impl StrainRecord {
    pub fn new(name: &str, rating: Option<f64>, thc: Option<u32>, strain_type: &str) -> Self {
        StrainRecord {
            name: name.to_string(),
            rating,
            thc,
            strain_type: strain_type.to_string(),
        }
    }

    /// Text of a field as it is shown in the table. Missing numbers render
    /// as an empty string.
    pub fn field_text(&self, column: Column) -> String {
        match column {
            Column::Name => self.name.clone(),
            Column::Rating => self.rating.map(|r| r.to_string()).unwrap_or_default(),
            Column::Thc => self.thc.map(|t| t.to_string()).unwrap_or_default(),
            Column::Type => self.strain_type.clone(),
        }
    }

    /// Total order of two records on one column.
    ///
    /// Text compares by code point, so `"Zkittlez" < "blue"`. Missing
    /// numbers order before any present number.
    pub fn compare(&self, other: &Self, column: Column) -> Ordering {
        match column {
            Column::Name => self.name.cmp(&other.name),
            Column::Rating => match (self.rating, other.rating) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (a, b) => a.is_some().cmp(&b.is_some()),
            },
            Column::Thc => self.thc.cmp(&other.thc),
            Column::Type => self.strain_type.cmp(&other.strain_type),
        }
    }
}
