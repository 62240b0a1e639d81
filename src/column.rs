use serde::{ser::SerializeSeq, Serialize, Serializer};

// A named series as the charting engine expects it: the name marker first,
// followed by the values, e.g. `["Measure", 5, 7]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    pub name: String,
    pub values: Vec<T>,
}

impl<T> Column<T> {
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    // Length including the name marker.
    pub fn len(&self) -> usize {
        self.values.len() + 1
    }
}

impl<T: Serialize> Serialize for Column<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        seq.serialize_element(&self.name)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}
